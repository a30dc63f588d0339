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
use ss_domain::{
    ConnectivityError, ConnectivityService, NetworkCallback, NetworkHandle, NetworkRequest,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Connectivity service that records subscriptions and lets a test deliver Wi-Fi
/// notifications to every active callback.
pub struct RecordingConnectivityService {
    name: String,
    register_calls: AtomicUsize,
    unregister_calls: AtomicUsize,
    callbacks: Mutex<Vec<Arc<dyn NetworkCallback>>>,
    fail_register: AtomicBool,
    unavailable: bool,
    next_network: AtomicUsize,
}

impl RecordingConnectivityService {
    pub fn new(name: &str) -> Arc<Self> {
        Arc::new(Self::build(name, false))
    }

    /// A service whose every register call reports `ServiceUnavailable`.
    pub fn unavailable(name: &str) -> Arc<Self> {
        Arc::new(Self::build(name, true))
    }

    fn build(name: &str, unavailable: bool) -> Self {
        Self {
            name: name.to_string(),
            register_calls: AtomicUsize::new(0),
            unregister_calls: AtomicUsize::new(0),
            callbacks: Mutex::new(Vec::new()),
            fail_register: AtomicBool::new(false),
            unavailable,
            next_network: AtomicUsize::new(100),
        }
    }

    pub fn set_fail_register(&self, fail: bool) {
        self.fail_register.store(fail, Ordering::SeqCst);
    }

    pub fn register_calls(&self) -> usize {
        self.register_calls.load(Ordering::SeqCst)
    }

    pub fn unregister_calls(&self) -> usize {
        self.unregister_calls.load(Ordering::SeqCst)
    }

    pub fn active_callbacks(&self) -> usize {
        self.callbacks.lock().expect("lock callbacks").len()
    }

    fn snapshot_callbacks(&self) -> Vec<Arc<dyn NetworkCallback>> {
        self.callbacks.lock().expect("lock callbacks").clone()
    }

    pub fn notify_available(&self) {
        let network = NetworkHandle(self.next_network.fetch_add(1, Ordering::SeqCst) as u64);
        for callback in self.snapshot_callbacks() {
            callback.on_available(network);
        }
    }

    pub fn notify_lost(&self) {
        let network = NetworkHandle(self.next_network.load(Ordering::SeqCst) as u64);
        for callback in self.snapshot_callbacks() {
            callback.on_lost(network);
        }
    }

    pub fn notify_unavailable(&self) {
        for callback in self.snapshot_callbacks() {
            callback.on_unavailable();
        }
    }
}

impl ConnectivityService for RecordingConnectivityService {
    fn register_network_callback(
        &self,
        request: &NetworkRequest,
        callback: Arc<dyn NetworkCallback>,
    ) -> Result<(), ConnectivityError> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        debug!("{}: register_network_callback for {request:?}", self.name);

        if self.unavailable {
            return Err(ConnectivityError::ServiceUnavailable);
        }
        if self.fail_register.load(Ordering::SeqCst) {
            return Err(ConnectivityError::RegisterFailed(format!(
                "{} refuses registrations",
                self.name
            )));
        }

        self.callbacks
            .lock()
            .expect("lock callbacks")
            .push(callback);
        Ok(())
    }

    fn unregister_network_callback(
        &self,
        callback: Arc<dyn NetworkCallback>,
    ) -> Result<(), ConnectivityError> {
        self.unregister_calls.fetch_add(1, Ordering::SeqCst);
        debug!("{}: unregister_network_callback", self.name);

        let mut callbacks = self.callbacks.lock().expect("lock callbacks");
        let before = callbacks.len();
        callbacks.retain(|registered| !Arc::ptr_eq(registered, &callback));
        if callbacks.len() == before {
            return Err(ConnectivityError::UnregisterFailed(
                "callback was not registered".to_string(),
            ));
        }
        Ok(())
    }
}
