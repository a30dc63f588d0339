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

mod carrier_config_fixtures;
pub use carrier_config_fixtures::{load_carrier_config, static_config_path};
mod fake_network_state;
pub use fake_network_state::{FakeImsPhone, FakeNetworkState};
mod logging;
pub use logging::init_logging;
mod recording_connectivity_service;
pub use recording_connectivity_service::RecordingConnectivityService;
