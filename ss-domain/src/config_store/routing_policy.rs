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

//! Scalar Ut routing policy and its raw, not yet normalized, input form.

use crate::config_store::carrier_config::CarrierConfigBundle;
use crate::network_state::AccessNetworkType;
use crate::observability::events;
use std::collections::BTreeSet;
use tracing::debug;

const COMPONENT: &str = "routing_policy";

/// Routing flags extracted from a carrier configuration, with raw code arrays.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawUtConfig {
    pub supports_ut: bool,
    pub supports_csfb: bool,
    pub requires_ims_registration: bool,
    pub available_when_ps_data_off: bool,
    pub available_when_roaming: bool,
    pub services: Vec<i32>,
    pub ut_rats: Vec<i32>,
}

impl From<&CarrierConfigBundle> for RawUtConfig {
    fn from(bundle: &CarrierConfigBundle) -> Self {
        Self {
            supports_ut: bundle.supports_ss_over_ut,
            supports_csfb: bundle.use_csfb_on_ut_failure,
            requires_ims_registration: bundle.ut_requires_ims_registration,
            available_when_ps_data_off: bundle.ut_supported_when_ps_data_off,
            available_when_roaming: bundle.ut_supported_when_roaming,
            services: bundle.ut_server_based_services.clone().unwrap_or_default(),
            ut_rats: bundle
                .xcap_over_ut_supported_rats
                .clone()
                .unwrap_or_default(),
        }
    }
}

/// Normalized Ut routing policy.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoutingPolicy {
    pub ut_supported: bool,
    pub csfb_supported: bool,
    pub requires_ims_registration: bool,
    pub available_when_ps_data_off: bool,
    pub available_when_roaming: bool,
    pub ut_transports: BTreeSet<AccessNetworkType>,
}

impl Default for RoutingPolicy {
    /// Ut disabled, CSFB always allowed.
    fn default() -> Self {
        Self {
            ut_supported: false,
            csfb_supported: true,
            requires_ims_registration: false,
            available_when_ps_data_off: false,
            available_when_roaming: false,
            ut_transports: BTreeSet::new(),
        }
    }
}

impl RoutingPolicy {
    /// Normalizes `raw`. RAT codes are dropped entirely when Ut is unsupported.
    pub(crate) fn from_raw(raw: &RawUtConfig) -> Self {
        let ut_transports = if raw.supports_ut {
            transports_from_codes(&raw.ut_rats)
        } else {
            BTreeSet::new()
        };

        Self {
            ut_supported: raw.supports_ut,
            csfb_supported: raw.supports_csfb,
            requires_ims_registration: raw.requires_ims_registration,
            available_when_ps_data_off: raw.available_when_ps_data_off,
            available_when_roaming: raw.available_when_roaming,
            ut_transports,
        }
    }

    pub fn supports_transport(&self, transport: AccessNetworkType) -> bool {
        self.ut_transports.contains(&transport)
    }

    /// Wi-Fi availability only matters while IWLAN carries Ut.
    pub fn needs_wifi_monitoring(&self) -> bool {
        self.ut_supported && self.supports_transport(AccessNetworkType::Iwlan)
    }
}

fn transports_from_codes(codes: &[i32]) -> BTreeSet<AccessNetworkType> {
    codes
        .iter()
        .filter_map(|&code| {
            let transport = AccessNetworkType::from_code(code);
            if transport.is_none() {
                debug!(
                    event = events::CONFIG_RAT_CODE_IGNORED,
                    component = COMPONENT,
                    code,
                    "ignoring RAT code without Ut category"
                );
            }
            transport
        })
        .collect()
}
