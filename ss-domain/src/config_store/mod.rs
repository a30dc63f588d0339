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

//! Carrier-configuration cache.
//!
//! Turns a carrier-configuration snapshot into an immutable [`DomainConfig`] (routing
//! policy plus capability sets) and publishes it with a single atomic pointer swap.
//! Readers always observe either the fully-old or the fully-new configuration.

pub(crate) mod capability_sets;
pub(crate) mod carrier_config;
pub(crate) mod routing_policy;
pub mod service_code_table;

use arc_swap::ArcSwap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

use crate::observability::{events, fields};
use capability_sets::ServiceCapabilitySets;
use carrier_config::CarrierConfigBundle;
use routing_policy::{RawUtConfig, RoutingPolicy};

const COMPONENT: &str = "config_store";

/// One immutable, versioned configuration snapshot.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DomainConfig {
    version: u64,
    policy: RoutingPolicy,
    capabilities: ServiceCapabilitySets,
}

impl DomainConfig {
    fn from_raw(version: u64, raw: &RawUtConfig) -> Self {
        let policy = RoutingPolicy::from_raw(raw);
        let capabilities = if policy.ut_supported {
            ServiceCapabilitySets::from_service_codes(&raw.services)
        } else {
            ServiceCapabilitySets::default()
        };

        Self {
            version,
            policy,
            capabilities,
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn policy(&self) -> &RoutingPolicy {
        &self.policy
    }

    pub fn capabilities(&self) -> &ServiceCapabilitySets {
        &self.capabilities
    }
}

/// Atomically replaced holder of the current [`DomainConfig`].
pub struct ConfigStore {
    snapshot: ArcSwap<DomainConfig>,
    next_version: AtomicU64,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore {
    /// Starts at version 0 with Ut disabled and CSFB always allowed.
    pub fn new() -> Self {
        Self {
            snapshot: ArcSwap::from_pointee(DomainConfig::default()),
            next_version: AtomicU64::new(1),
        }
    }

    /// Applies a carrier bundle. `None` is the absent-configuration marker and applies
    /// the platform default bundle.
    pub fn apply_configuration(&self, bundle: Option<&CarrierConfigBundle>) -> Arc<DomainConfig> {
        let raw = match bundle {
            Some(bundle) => RawUtConfig::from(bundle),
            None => {
                debug!(
                    component = COMPONENT,
                    reason = fields::REASON_ABSENT_CONFIGURATION,
                    "applying platform default carrier configuration"
                );
                RawUtConfig::from(&CarrierConfigBundle::default())
            }
        };
        self.apply_raw(raw)
    }

    /// Replaces the current snapshot wholesale and returns the published value.
    pub fn apply_raw(&self, raw: RawUtConfig) -> Arc<DomainConfig> {
        let version = self.next_version.fetch_add(1, Ordering::Relaxed);
        let next = Arc::new(DomainConfig::from_raw(version, &raw));
        self.snapshot.store(next.clone());

        let policy = next.policy();
        if !policy.ut_supported {
            info!(
                event = events::CONFIG_UT_DISABLED,
                component = COMPONENT,
                version,
                csfb = policy.csfb_supported,
                "Ut is not supported by carrier configuration"
            );
            return next;
        }

        info!(
            event = events::CONFIG_APPLY_OK,
            component = COMPONENT,
            version,
            csfb = policy.csfb_supported,
            requires_ims_registration = policy.requires_ims_registration,
            when_ps_data_off = policy.available_when_ps_data_off,
            when_roaming = policy.available_when_roaming,
            cb_over_ut = %fields::format_set(next.capabilities().call_barring()),
            cf_over_ut = %fields::format_set(next.capabilities().call_forwarding()),
            ss_over_ut = %fields::format_set(next.capabilities().supplementary()),
            ut_transports = %fields::format_set(&policy.ut_transports),
            monitors_wifi = policy.needs_wifi_monitoring(),
            "applied Ut configuration"
        );
        next
    }

    /// Loads the current snapshot. Hold the returned value for one whole decision.
    pub fn load(&self) -> Arc<DomainConfig> {
        self.snapshot.load_full()
    }
}

#[cfg(test)]
mod tests {
    use super::carrier_config::CarrierConfigBundle;
    use super::routing_policy::RawUtConfig;
    use super::ConfigStore;
    use crate::network_state::AccessNetworkType;
    use crate::supp_service::{CbFacility, SsService, SuppServiceRequest};

    fn ut_bundle(services: Vec<i32>, rats: Vec<i32>) -> CarrierConfigBundle {
        CarrierConfigBundle {
            supports_ss_over_ut: true,
            ut_server_based_services: Some(services),
            xcap_over_ut_supported_rats: Some(rats),
            ..Default::default()
        }
    }

    #[test]
    fn initial_snapshot_is_disabled_at_version_zero() {
        let store = ConfigStore::new();
        let current = store.load();

        assert_eq!(current.version(), 0);
        assert!(!current.policy().ut_supported);
        assert!(current.policy().csfb_supported);
        assert!(current.capabilities().is_empty());
    }

    #[test]
    fn apply_configuration_advances_version_and_replaces_sets() {
        let store = ConfigStore::new();

        let first = store.apply_configuration(Some(&ut_bundle(vec![0, 14], vec![3])));
        assert_eq!(first.version(), 1);
        assert!(first
            .capabilities()
            .contains(SuppServiceRequest::Ss(SsService::Cw)));

        let second = store.apply_configuration(Some(&ut_bundle(vec![14], vec![5])));
        assert_eq!(second.version(), 2);
        assert_eq!(store.load().version(), 2);
        assert!(!second
            .capabilities()
            .contains(SuppServiceRequest::Ss(SsService::Cw)));
        assert!(second
            .capabilities()
            .contains(SuppServiceRequest::Cb(CbFacility::Baoc)));
        assert!(!second
            .policy()
            .supports_transport(AccessNetworkType::Eutran));
    }

    #[test]
    fn previously_loaded_snapshot_is_unaffected_by_later_apply() {
        let store = ConfigStore::new();
        store.apply_configuration(Some(&ut_bundle(vec![0], vec![3])));
        let held = store.load();

        store.apply_configuration(None);

        assert!(held.policy().ut_supported);
        assert!(held
            .capabilities()
            .contains(SuppServiceRequest::Ss(SsService::Cw)));
        assert!(!store.load().policy().ut_supported);
    }

    #[test]
    fn disabling_ut_clears_every_set_even_with_services_listed() {
        let store = ConfigStore::new();
        let applied = store.apply_raw(RawUtConfig {
            supports_ut: false,
            supports_csfb: false,
            requires_ims_registration: false,
            available_when_ps_data_off: true,
            available_when_roaming: true,
            services: vec![0, 1, 14],
            ut_rats: vec![3, 5],
        });

        assert!(applied.capabilities().is_empty());
        assert!(applied.policy().ut_transports.is_empty());
        assert!(!applied.policy().csfb_supported);
    }

    #[test]
    fn absent_configuration_matches_platform_default_bundle() {
        let store = ConfigStore::new();
        let absent = store.apply_configuration(None);
        let defaulted = store.apply_configuration(Some(&CarrierConfigBundle::default()));

        assert_eq!(absent.policy(), defaulted.policy());
        assert_eq!(absent.capabilities(), defaulted.capabilities());
        assert!(!absent.policy().ut_supported);
    }
}
