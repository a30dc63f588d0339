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

//! Canonical structured field keys and value-format helpers.

use std::fmt::Display;

pub const EVENT: &str = "event";
pub const COMPONENT: &str = "component";
pub const REASON: &str = "reason";
pub const ERR: &str = "err";

pub const NONE: &str = "none";
pub const REASON_SERVICE_ABSENT: &str = "connectivity_service_absent";
pub const REASON_ALREADY_ACTIVE: &str = "already_monitoring";
pub const REASON_NOT_ACTIVE: &str = "not_monitoring";
pub const REASON_ABSENT_CONFIGURATION: &str = "absent_configuration";

/// Renders a collection as `[a, b, c]`, or `[]` when empty.
pub fn format_set<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let rendered: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    format!("[{}]", rendered.join(", "))
}

pub fn format_optional<T: Display>(value: Option<T>) -> String {
    value
        .map(|value| value.to_string())
        .unwrap_or_else(|| NONE.to_string())
}
