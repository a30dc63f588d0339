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

//! Public routing facade combining configuration, Wi-Fi state and network state.

use crate::config_store::carrier_config::CarrierConfigBundle;
use crate::config_store::routing_policy::{RawUtConfig, RoutingPolicy};
use crate::config_store::{ConfigStore, DomainConfig};
use crate::connectivity::monitor::{ConnectivityMonitor, WifiAvailability};
use crate::connectivity::network_callback::ConnectivityService;
use crate::domain_snapshot::DomainSnapshot;
use crate::network_state::{NetworkStateQuery, ServiceState};
use crate::observability::events;
use crate::routing::transport_reachability::TransportReachability;
use crate::routing_info::SuppServiceRoutingInfo;
use crate::supp_service::{CbFacility, CfReason, SsService, SuppServiceRequest};
use std::sync::Arc;
use tracing::{debug, info};

const COMPONENT: &str = "routing_engine";

/// Decides, per supplementary-service request, between Ut and CS signalling.
///
/// Configuration updates are expected from one owner at a time. Queries may run
/// concurrently with updates and with Wi-Fi notifications; each query works on a
/// single configuration snapshot.
pub struct RoutingDecisionEngine {
    name: String,
    network: Arc<dyn NetworkStateQuery>,
    config_store: ConfigStore,
    connectivity: ConnectivityMonitor,
}

impl RoutingDecisionEngine {
    /// Creates an engine with Ut disabled until a configuration is applied.
    ///
    /// `connectivity_service` is `None` when the platform has no connectivity service;
    /// Wi-Fi availability then only changes through
    /// [`ConnectivityMonitor::update_wifi_for_ut`].
    pub fn new(
        name: &str,
        network: Arc<dyn NetworkStateQuery>,
        connectivity_service: Option<Arc<dyn ConnectivityService>>,
    ) -> Self {
        info!(
            component = COMPONENT,
            engine = name,
            connectivity_service = connectivity_service.is_some(),
            "routing decision engine created"
        );

        Self {
            name: name.to_string(),
            network,
            config_store: ConfigStore::new(),
            connectivity: ConnectivityMonitor::new(name, connectivity_service),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Applies a carrier bundle, or the platform default when `None`, then starts or
    /// stops Wi-Fi monitoring to match.
    pub fn apply_configuration(&self, bundle: Option<&CarrierConfigBundle>) {
        let config = self.config_store.apply_configuration(bundle);
        self.sync_wifi_monitoring(&config);
    }

    /// Applies already-extracted flags and raw code arrays.
    pub fn apply_raw_configuration(&self, raw: RawUtConfig) {
        let config = self.config_store.apply_raw(raw);
        self.sync_wifi_monitoring(&config);
    }

    fn sync_wifi_monitoring(&self, config: &DomainConfig) {
        if config.policy().needs_wifi_monitoring() {
            self.connectivity.start();
        } else {
            self.connectivity.stop();
        }
    }

    /// Current configuration snapshot.
    pub fn config(&self) -> Arc<DomainConfig> {
        self.config_store.load()
    }

    pub fn connectivity(&self) -> &ConnectivityMonitor {
        &self.connectivity
    }

    fn reachability<'a>(&'a self, policy: &'a RoutingPolicy) -> TransportReachability<'a> {
        TransportReachability::new(
            &self.name,
            policy,
            self.network.as_ref(),
            &self.connectivity,
        )
    }

    /// Whether Ut can be used right now at all, independent of the service requested.
    pub fn is_ut_enabled(&self) -> bool {
        self.is_ut_enabled_for(&self.config_store.load())
    }

    fn is_ut_enabled_for(&self, config: &DomainConfig) -> bool {
        let Some(ims_phone) = self.network.ims_phone() else {
            debug!(
                event = events::UT_ENABLED_NO_IMS_PHONE,
                component = COMPONENT,
                engine = self.name.as_str(),
                "no IMS-capable phone, Ut is not enabled"
            );
            return false;
        };

        let policy = config.policy();
        if !policy.ut_supported {
            debug!(
                event = events::UT_ENABLED_NOT_SUPPORTED,
                component = COMPONENT,
                engine = self.name.as_str(),
                version = config.version(),
                "Ut is not supported by configuration"
            );
            return false;
        }

        if policy.requires_ims_registration {
            let state = ims_phone.service_state();
            if state != ServiceState::InService {
                debug!(
                    event = events::UT_ENABLED_NOT_REGISTERED,
                    component = COMPONENT,
                    engine = self.name.as_str(),
                    ims_state = ?state,
                    "Ut requires IMS registration"
                );
                return false;
            }
        }

        if !self.reachability(policy).is_ut_available_on_any_transport() {
            debug!(
                event = events::UT_ENABLED_NO_TRANSPORT,
                component = COMPONENT,
                engine = self.name.as_str(),
                "no transport carries Ut"
            );
            return false;
        }

        ims_phone.is_ut_enabled()
    }

    /// Whether the carrier lists `request` as Ut capable, with Ut globally enabled.
    pub fn uses_ut_for(&self, request: SuppServiceRequest) -> bool {
        self.uses_ut_for_config(&self.config_store.load(), request)
    }

    fn uses_ut_for_config(&self, config: &DomainConfig, request: SuppServiceRequest) -> bool {
        if !config.policy().ut_supported {
            debug!(
                event = events::UT_QUERY_NOT_SUPPORTED,
                component = COMPONENT,
                engine = self.name.as_str(),
                request = %request,
                "Ut is not supported by configuration"
            );
            return false;
        }
        config.capabilities().contains(request)
    }

    pub fn use_cb_over_ut(&self, facility: CbFacility) -> bool {
        self.uses_ut_for(facility.into())
    }

    pub fn use_cf_over_ut(&self, reason: CfReason) -> bool {
        self.uses_ut_for(reason.into())
    }

    pub fn use_ss_over_ut(&self, service: SsService) -> bool {
        self.uses_ut_for(service.into())
    }

    /// Always `true` without Ut, otherwise the configured CSFB flag.
    pub fn supports_csfb_fallback(&self) -> bool {
        Self::supports_csfb_fallback_for(&self.config_store.load())
    }

    fn supports_csfb_fallback_for(config: &DomainConfig) -> bool {
        let policy = config.policy();
        !policy.ut_supported || policy.csfb_supported
    }

    /// Routing answer for one request, computed from a single configuration snapshot.
    pub fn routing_info_for(&self, request: SuppServiceRequest) -> SuppServiceRoutingInfo {
        let config = self.config_store.load();
        let uses_ut =
            self.uses_ut_for_config(&config, request) && self.is_ut_enabled_for(&config);
        SuppServiceRoutingInfo::new(uses_ut, Self::supports_csfb_fallback_for(&config))
    }

    pub fn routing_info_for_cb(&self, facility: CbFacility) -> SuppServiceRoutingInfo {
        self.routing_info_for(facility.into())
    }

    pub fn routing_info_for_cf(&self, reason: CfReason) -> SuppServiceRoutingInfo {
        self.routing_info_for(reason.into())
    }

    pub fn routing_info_for_ss(&self, service: SsService) -> SuppServiceRoutingInfo {
        self.routing_info_for(service.into())
    }

    pub fn snapshot(&self) -> DomainSnapshot {
        let config = self.config_store.load();
        let policy = config.policy();
        let capabilities = config.capabilities();

        DomainSnapshot {
            name: self.name.clone(),
            config_version: config.version(),
            ut_supported: policy.ut_supported,
            csfb_supported: policy.csfb_supported,
            cb_over_ut: capabilities.call_barring().clone(),
            cf_over_ut: capabilities.call_forwarding().clone(),
            ss_over_ut: capabilities.supplementary().clone(),
            requires_ims_registration: policy.requires_ims_registration,
            available_when_ps_data_off: policy.available_when_ps_data_off,
            available_when_roaming: policy.available_when_roaming,
            ut_transports: policy.ut_transports.clone(),
            wifi_available: self.connectivity.is_wifi_available(),
            monitoring_active: self.connectivity.is_monitoring(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RoutingDecisionEngine;
    use crate::config_store::routing_policy::RawUtConfig;
    use crate::network_state::{
        ImsPhone, NetworkRegistrationInfo, NetworkStateQuery, NetworkType, ServiceState,
        TransportType,
    };
    use crate::supp_service::{CbFacility, CfReason, SsService};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex as StdMutex};

    struct StubImsPhone {
        state: StdMutex<ServiceState>,
        ut_enabled: AtomicBool,
    }

    impl ImsPhone for StubImsPhone {
        fn service_state(&self) -> ServiceState {
            *self.state.lock().expect("lock state")
        }

        fn is_ut_enabled(&self) -> bool {
            self.ut_enabled.load(Ordering::SeqCst)
        }
    }

    struct StubNetwork {
        ims_phone: Option<Arc<StubImsPhone>>,
        wwan: StdMutex<Option<NetworkRegistrationInfo>>,
    }

    impl StubNetwork {
        fn on_lte() -> Self {
            Self {
                ims_phone: Some(Arc::new(StubImsPhone {
                    state: StdMutex::new(ServiceState::InService),
                    ut_enabled: AtomicBool::new(true),
                })),
                wwan: StdMutex::new(Some(NetworkRegistrationInfo::new(
                    true,
                    false,
                    NetworkType::Lte,
                ))),
            }
        }
    }

    impl NetworkStateQuery for StubNetwork {
        fn ims_phone(&self) -> Option<Arc<dyn ImsPhone>> {
            self.ims_phone
                .clone()
                .map(|phone| phone as Arc<dyn ImsPhone>)
        }

        fn ps_registration_info(
            &self,
            _transport: TransportType,
        ) -> Option<NetworkRegistrationInfo> {
            self.wwan.lock().expect("lock wwan").clone()
        }

        fn mobile_data_setting(&self) -> Option<bool> {
            Some(true)
        }
    }

    fn raw(supports_ut: bool, supports_csfb: bool, requires_ims: bool) -> RawUtConfig {
        RawUtConfig {
            supports_ut,
            supports_csfb,
            requires_ims_registration: requires_ims,
            available_when_ps_data_off: false,
            available_when_roaming: false,
            services: vec![0, 14, 2],
            ut_rats: vec![3, 5],
        }
    }

    fn engine_with(network: Arc<StubNetwork>) -> RoutingDecisionEngine {
        RoutingDecisionEngine::new("unit", network, None)
    }

    #[test]
    fn fresh_engine_routes_nothing_over_ut() {
        let engine = engine_with(Arc::new(StubNetwork::on_lte()));

        assert!(!engine.is_ut_enabled());
        assert!(engine.supports_csfb_fallback());
        let info = engine.routing_info_for_ss(SsService::Cw);
        assert!(!info.uses_ut_routing());
        assert!(info.supports_csfb_fallback());
    }

    #[test]
    fn ut_enabled_defers_to_ims_phone_verdict() {
        let network = Arc::new(StubNetwork::on_lte());
        let engine = engine_with(network.clone());
        engine.apply_raw_configuration(raw(true, true, true));
        assert!(engine.is_ut_enabled());

        network
            .ims_phone
            .as_ref()
            .expect("ims phone")
            .ut_enabled
            .store(false, Ordering::SeqCst);

        assert!(!engine.is_ut_enabled());
    }

    #[test]
    fn ims_registration_requirement_checks_service_state() {
        let network = Arc::new(StubNetwork::on_lte());
        *network
            .ims_phone
            .as_ref()
            .expect("ims phone")
            .state
            .lock()
            .expect("lock state") = ServiceState::OutOfService;
        let engine = engine_with(network);

        engine.apply_raw_configuration(raw(true, true, true));
        assert!(!engine.is_ut_enabled());

        engine.apply_raw_configuration(raw(true, true, false));
        assert!(engine.is_ut_enabled());
    }

    #[test]
    fn missing_ims_phone_disables_ut() {
        let network = Arc::new(StubNetwork {
            ims_phone: None,
            ..StubNetwork::on_lte()
        });
        let engine = engine_with(network);
        engine.apply_raw_configuration(raw(true, true, false));

        assert!(!engine.is_ut_enabled());
        assert!(engine.use_ss_over_ut(SsService::Cw));
        assert!(!engine.routing_info_for_ss(SsService::Cw).uses_ut_routing());
    }

    #[test]
    fn membership_queries_follow_capability_sets() {
        let engine = engine_with(Arc::new(StubNetwork::on_lte()));
        engine.apply_raw_configuration(raw(true, false, false));

        assert!(engine.use_ss_over_ut(SsService::Cw));
        assert!(!engine.use_ss_over_ut(SsService::Clir));
        assert!(engine.use_cb_over_ut(CbFacility::Baoc));
        assert!(!engine.use_cb_over_ut(CbFacility::Baic));
        assert!(engine.use_cf_over_ut(CfReason::Unconditional));
        assert!(!engine.use_cf_over_ut(CfReason::Busy));
    }

    #[test]
    fn routing_info_carries_policy_csfb_only_when_routed_over_ut() {
        let network = Arc::new(StubNetwork::on_lte());
        let engine = engine_with(network.clone());
        engine.apply_raw_configuration(raw(true, false, false));

        let routed = engine.routing_info_for_cf(CfReason::Unconditional);
        assert!(routed.uses_ut_routing());
        assert!(!routed.supports_csfb_fallback());

        let unlisted = engine.routing_info_for_cf(CfReason::Busy);
        assert!(!unlisted.uses_ut_routing());
        assert!(unlisted.supports_csfb_fallback());

        *network.wwan.lock().expect("lock wwan") = None;
        let unreachable = engine.routing_info_for_cf(CfReason::Unconditional);
        assert!(!unreachable.uses_ut_routing());
        assert!(unreachable.supports_csfb_fallback());
    }

    #[test]
    fn disabled_ut_overrides_configured_csfb_flag() {
        let engine = engine_with(Arc::new(StubNetwork::on_lte()));
        engine.apply_raw_configuration(raw(false, false, false));

        assert!(engine.supports_csfb_fallback());
        assert!(!engine.use_ss_over_ut(SsService::Cw));
        assert!(!engine.is_ut_enabled());
    }

    #[test]
    fn snapshot_reflects_applied_configuration() {
        let engine = engine_with(Arc::new(StubNetwork::on_lte()));
        engine.apply_raw_configuration(raw(true, false, true));
        engine.connectivity().update_wifi_for_ut(true);

        let snapshot = engine.snapshot();

        assert_eq!(snapshot.name, "unit");
        assert_eq!(snapshot.config_version, 1);
        assert!(snapshot.ut_supported);
        assert!(!snapshot.csfb_supported);
        assert_eq!(snapshot.cb_over_ut.len(), 1);
        assert_eq!(snapshot.cf_over_ut.len(), 1);
        assert_eq!(snapshot.ss_over_ut.len(), 1);
        assert_eq!(snapshot.ut_transports.len(), 2);
        assert!(snapshot.wifi_available);
        assert!(!snapshot.monitoring_active);
    }
}
