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

//! # ss-domain
//!
//! `ss-domain` decides, per supplementary-service request (call waiting, call
//! forwarding, call barring, caller identification), whether the request is carried
//! over Ut (XCAP over IP) or falls back to circuit-switched signalling (CSFB).
//!
//! Typical usage is API-first and centered on [`RoutingDecisionEngine`]: apply a carrier
//! configuration, then ask for a [`SuppServiceRoutingInfo`] per request.
//!
//! ```
//! use std::sync::Arc;
//! use ss_domain::{
//!     CarrierConfigBundle, ImsPhone, NetworkRegistrationInfo, NetworkStateQuery, NetworkType,
//!     RoutingDecisionEngine, ServiceState, SsService, TransportType,
//! };
//!
//! # struct InServicePhone;
//! #
//! # impl ImsPhone for InServicePhone {
//! #     fn service_state(&self) -> ServiceState {
//! #         ServiceState::InService
//! #     }
//! #     fn is_ut_enabled(&self) -> bool {
//! #         true
//! #     }
//! # }
//! #
//! # struct OnLte;
//! #
//! # impl NetworkStateQuery for OnLte {
//! #     fn ims_phone(&self) -> Option<Arc<dyn ImsPhone>> {
//! #         Some(Arc::new(InServicePhone))
//! #     }
//! #     fn ps_registration_info(&self, _: TransportType) -> Option<NetworkRegistrationInfo> {
//! #         Some(NetworkRegistrationInfo::new(true, false, NetworkType::Lte))
//! #     }
//! #     fn mobile_data_setting(&self) -> Option<bool> {
//! #         Some(true)
//! #     }
//! # }
//! #
//! let engine = RoutingDecisionEngine::new("slot0", Arc::new(OnLte), None);
//!
//! // Nothing goes over Ut until the carrier enables it.
//! assert!(!engine.routing_info_for_ss(SsService::Cw).uses_ut_routing());
//!
//! let bundle = CarrierConfigBundle::from_json5_str(
//!     r#"{
//!         carrier_supports_ss_over_ut_bool: true,
//!         "imsss.ut_server_based_services_int_array": [0],
//!         "imsss.xcap_over_ut_supported_rats_int_array": [3],
//!     }"#,
//! )
//! .unwrap();
//! engine.apply_configuration(Some(&bundle));
//!
//! let info = engine.routing_info_for_ss(SsService::Cw);
//! assert!(info.uses_ut_routing());
//! assert!(info.supports_csfb_fallback());
//! assert!(!engine.routing_info_for_ss(SsService::Clir).uses_ut_routing());
//! ```
//!
//! ## Internal architecture map
//!
//! - Config store: carrier bundle decoding, service-code table, atomic snapshot swap
//! - Connectivity: Wi-Fi callback subscription lifecycle and availability cell
//! - Routing: cellular-first transport reachability
//! - Engine: public decision facade and diagnostics snapshot
//!
//! ## Observability model
//!
//! The crate uses `tracing` for logs/events.
//! Library code emits events and does not initialize a global subscriber. Embedders and
//! tests are responsible for one-time `tracing_subscriber` initialization.

mod config_store;
pub use config_store::capability_sets::ServiceCapabilitySets;
pub use config_store::carrier_config::{CarrierConfigBundle, CarrierConfigError};
pub use config_store::routing_policy::{RawUtConfig, RoutingPolicy};
pub use config_store::service_code_table;
pub use config_store::{ConfigStore, DomainConfig};

mod connectivity;
pub use connectivity::monitor::{ConnectivityMonitor, WifiAvailability};
pub use connectivity::network_callback::{
    ConnectivityError, ConnectivityService, NetworkCallback, NetworkHandle, NetworkRequest,
    NetworkTransport,
};

mod domain_snapshot;
pub use domain_snapshot::DomainSnapshot;

mod engine;
pub use engine::RoutingDecisionEngine;

mod network_state;
pub use network_state::{
    AccessNetworkType, ImsPhone, NetworkRegistrationInfo, NetworkStateQuery, NetworkType,
    ServiceState, TransportType,
};

#[doc(hidden)]
pub mod observability;
mod routing;

mod routing_info;
pub use routing_info::SuppServiceRoutingInfo;

mod supp_service;
pub use supp_service::{
    CbFacility, CfReason, SsService, SuppServiceRequest, UnknownServiceIdentifier,
};
