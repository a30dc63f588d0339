/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

use ss_domain::CarrierConfigBundle;
use std::path::PathBuf;

pub fn static_config_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("static-configs")
        .join(format!("{name}.json5"))
}

/// Loads `static-configs/<name>.json5`. Panics on a missing or malformed fixture.
pub fn load_carrier_config(name: &str) -> CarrierConfigBundle {
    let path = static_config_path(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("unable to read fixture {}: {err}", path.display()));
    CarrierConfigBundle::from_json5_str(&text)
        .unwrap_or_else(|err| panic!("unable to parse fixture {}: {err}", path.display()))
}
