//! Cellular-first Ut transport reachability.

use crate::config_store::routing_policy::RoutingPolicy;
use crate::connectivity::monitor::WifiAvailability;
use crate::network_state::{AccessNetworkType, NetworkStateQuery, TransportType};
use crate::observability::{events, fields};
use tracing::{debug, info};

const COMPONENT: &str = "transport_reachability";

/// Resolves Ut reachability for one engine and one policy snapshot.
pub(crate) struct TransportReachability<'a> {
    engine: &'a str,
    policy: &'a RoutingPolicy,
    network: &'a dyn NetworkStateQuery,
    wifi: &'a dyn WifiAvailability,
}

impl<'a> TransportReachability<'a> {
    pub(crate) fn new(
        engine: &'a str,
        policy: &'a RoutingPolicy,
        network: &'a dyn NetworkStateQuery,
        wifi: &'a dyn WifiAvailability,
    ) -> Self {
        Self {
            engine,
            policy,
            network,
            wifi,
        }
    }

    /// User setting, falling back to the build-time default when never written.
    pub(crate) fn is_mobile_data_enabled(&self) -> bool {
        match self.network.mobile_data_setting() {
            Some(enabled) => enabled,
            None => {
                let enabled = self.network.mobile_data_default();
                info!(
                    event = events::MOBILE_DATA_SETTING_MISSING,
                    component = COMPONENT,
                    engine = self.engine,
                    default = enabled,
                    "mobile data setting not found, using default"
                );
                enabled
            }
        }
    }

    /// WWAN packet-domain registration must be present, registered, allowed while
    /// roaming, and on a RAT category the policy lists.
    pub(crate) fn is_ut_available_over_cellular(&self) -> bool {
        let Some(registration) = self.network.ps_registration_info(TransportType::Wwan) else {
            debug!(
                event = events::UT_CELLULAR_UNAVAILABLE,
                component = COMPONENT,
                engine = self.engine,
                reason = "no_registration_info",
                "no WWAN packet-domain registration record"
            );
            return false;
        };

        if !registration.is_registered() {
            debug!(
                event = events::UT_CELLULAR_UNAVAILABLE,
                component = COMPONENT,
                engine = self.engine,
                reason = "not_registered",
                "WWAN packet domain not registered"
            );
            return false;
        }

        if registration.is_roaming() && !self.policy.available_when_roaming {
            debug!(
                event = events::UT_CELLULAR_ROAMING_BLOCKED,
                component = COMPONENT,
                engine = self.engine,
                "Ut not allowed while roaming"
            );
            return false;
        }

        let category = registration.access_network_technology.access_network_type();
        let available = category
            .map(|category| self.policy.supports_transport(category))
            .unwrap_or(false);
        if !available {
            debug!(
                event = events::UT_CELLULAR_UNAVAILABLE,
                component = COMPONENT,
                engine = self.engine,
                reason = "rat_not_ut_capable",
                rat = ?registration.access_network_technology,
                category = %fields::format_optional(category),
                "current RAT does not carry Ut"
            );
        }
        available
    }

    /// Cellular is tried first and short-circuits; Wi-Fi is only read when cellular
    /// did not qualify.
    pub(crate) fn is_ut_available_on_any_transport(&self) -> bool {
        if (self.policy.available_when_ps_data_off || self.is_mobile_data_enabled())
            && self.is_ut_available_over_cellular()
        {
            debug!(
                event = events::UT_TRANSPORT_CELLULAR,
                component = COMPONENT,
                engine = self.engine,
                "Ut is available over cellular"
            );
            return true;
        }

        if self.wifi.is_wifi_available() {
            if self.policy.supports_transport(AccessNetworkType::Iwlan) {
                debug!(
                    event = events::UT_TRANSPORT_WIFI,
                    component = COMPONENT,
                    engine = self.engine,
                    "Ut is available over Wi-Fi"
                );
                return true;
            }
            debug!(
                event = events::UT_TRANSPORT_WIFI_NOT_CAPABLE,
                component = COMPONENT,
                engine = self.engine,
                "Wi-Fi available but Ut is not supported over IWLAN"
            );
        }

        debug!(
            event = events::UT_TRANSPORT_NONE,
            component = COMPONENT,
            engine = self.engine,
            "Ut is not available on any transport"
        );
        false
    }
}
