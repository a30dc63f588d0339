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

//! Wi-Fi availability monitoring and its subscription lifecycle.

use crate::connectivity::network_callback::{
    ConnectivityError, ConnectivityService, NetworkCallback, NetworkHandle, NetworkRequest,
};
use crate::observability::{events, fields};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

const COMPONENT: &str = "connectivity_monitor";

/// Source of the current Wi-Fi availability used by transport reachability checks.
pub trait WifiAvailability {
    fn is_wifi_available(&self) -> bool;
}

/// Callback handed to the connectivity service. Only ever writes the shared cell.
struct WifiAvailabilityCallback {
    monitor_name: String,
    wifi_available: Arc<AtomicBool>,
}

impl NetworkCallback for WifiAvailabilityCallback {
    fn on_available(&self, network: NetworkHandle) {
        info!(
            event = events::WIFI_AVAILABLE,
            component = COMPONENT,
            monitor = self.monitor_name.as_str(),
            network = %network,
            "Wi-Fi network available"
        );
        self.wifi_available.store(true, Ordering::Release);
    }

    fn on_lost(&self, network: NetworkHandle) {
        info!(
            event = events::WIFI_LOST,
            component = COMPONENT,
            monitor = self.monitor_name.as_str(),
            network = %network,
            "Wi-Fi network lost"
        );
        self.wifi_available.store(false, Ordering::Release);
    }

    fn on_unavailable(&self) {
        info!(
            event = events::WIFI_UNAVAILABLE,
            component = COMPONENT,
            monitor = self.monitor_name.as_str(),
            "Wi-Fi network unavailable"
        );
        self.wifi_available.store(false, Ordering::Release);
    }
}

/// Holds at most one Wi-Fi callback subscription and the last reported availability.
///
/// `start` and `stop` are idempotent. Without a connectivity service no subscription is
/// possible and `is_wifi_available` keeps its last known value, initially `false`.
pub struct ConnectivityMonitor {
    name: String,
    service: Option<Arc<dyn ConnectivityService>>,
    wifi_available: Arc<AtomicBool>,
    callback: Arc<WifiAvailabilityCallback>,
    monitoring_active: Mutex<bool>,
}

impl ConnectivityMonitor {
    pub fn new(name: &str, service: Option<Arc<dyn ConnectivityService>>) -> Self {
        let wifi_available = Arc::new(AtomicBool::new(false));
        Self {
            name: name.to_string(),
            service,
            wifi_available: wifi_available.clone(),
            callback: Arc::new(WifiAvailabilityCallback {
                monitor_name: name.to_string(),
                wifi_available,
            }),
            monitoring_active: Mutex::new(false),
        }
    }

    fn lock_monitoring_active(&self) -> MutexGuard<'_, bool> {
        self.monitoring_active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn callback_handle(&self) -> Arc<dyn NetworkCallback> {
        self.callback.clone()
    }

    /// Subscribes to Wi-Fi availability unless a subscription is already held.
    pub fn start(&self) {
        let mut monitoring_active = self.lock_monitoring_active();
        if *monitoring_active {
            debug!(
                event = events::CONNECTIVITY_REGISTER_SKIPPED,
                component = COMPONENT,
                monitor = self.name.as_str(),
                reason = fields::REASON_ALREADY_ACTIVE,
                "Wi-Fi monitoring already active"
            );
            return;
        }

        let Some(service) = self.service.as_ref() else {
            debug!(
                event = events::CONNECTIVITY_REGISTER_SKIPPED,
                component = COMPONENT,
                monitor = self.name.as_str(),
                reason = fields::REASON_SERVICE_ABSENT,
                "no connectivity service, Wi-Fi monitoring not possible"
            );
            return;
        };

        match service.register_network_callback(&NetworkRequest::wifi(), self.callback_handle()) {
            Ok(()) => {
                *monitoring_active = true;
                info!(
                    event = events::CONNECTIVITY_REGISTER_OK,
                    component = COMPONENT,
                    monitor = self.name.as_str(),
                    "registered for Wi-Fi connectivity changes"
                );
            }
            Err(ConnectivityError::ServiceUnavailable) => {
                debug!(
                    event = events::CONNECTIVITY_REGISTER_SKIPPED,
                    component = COMPONENT,
                    monitor = self.name.as_str(),
                    reason = fields::REASON_SERVICE_ABSENT,
                    "connectivity service unavailable, Wi-Fi monitoring not possible"
                );
            }
            Err(err) => {
                warn!(
                    event = events::CONNECTIVITY_REGISTER_FAILED,
                    component = COMPONENT,
                    monitor = self.name.as_str(),
                    err = %err,
                    "unable to register for Wi-Fi connectivity changes"
                );
            }
        }
    }

    /// Drops the Wi-Fi subscription if one is held.
    ///
    /// A failed unregister keeps the subscription marked active so a later `stop` retries.
    pub fn stop(&self) {
        let mut monitoring_active = self.lock_monitoring_active();
        if !*monitoring_active {
            debug!(
                event = events::CONNECTIVITY_UNREGISTER_SKIPPED,
                component = COMPONENT,
                monitor = self.name.as_str(),
                reason = fields::REASON_NOT_ACTIVE,
                "Wi-Fi monitoring not active"
            );
            return;
        }

        let Some(service) = self.service.as_ref() else {
            return;
        };

        match service.unregister_network_callback(self.callback_handle()) {
            Ok(()) => {
                *monitoring_active = false;
                info!(
                    event = events::CONNECTIVITY_UNREGISTER_OK,
                    component = COMPONENT,
                    monitor = self.name.as_str(),
                    "unregistered from Wi-Fi connectivity changes"
                );
            }
            Err(err) => {
                warn!(
                    event = events::CONNECTIVITY_UNREGISTER_FAILED,
                    component = COMPONENT,
                    monitor = self.name.as_str(),
                    err = %err,
                    "unable to unregister from Wi-Fi connectivity changes"
                );
            }
        }
    }

    pub fn is_monitoring(&self) -> bool {
        *self.lock_monitoring_active()
    }

    /// Overrides the cached availability, as a platform notification would.
    pub fn update_wifi_for_ut(&self, available: bool) {
        self.wifi_available.store(available, Ordering::Release);
    }
}

impl WifiAvailability for ConnectivityMonitor {
    fn is_wifi_available(&self) -> bool {
        self.wifi_available.load(Ordering::Acquire)
    }
}

impl Drop for ConnectivityMonitor {
    fn drop(&mut self) {
        self.stop();
    }
}
