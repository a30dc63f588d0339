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
    ImsPhone, NetworkRegistrationInfo, NetworkStateQuery, NetworkType, ServiceState,
    TransportType,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// IMS phone whose service state and Ut verdict can be flipped by a test.
pub struct FakeImsPhone {
    service_state: Mutex<ServiceState>,
    ut_enabled: AtomicBool,
}

impl FakeImsPhone {
    pub fn in_service() -> Arc<Self> {
        Arc::new(Self {
            service_state: Mutex::new(ServiceState::InService),
            ut_enabled: AtomicBool::new(true),
        })
    }

    pub fn set_service_state(&self, state: ServiceState) {
        *self.service_state.lock().expect("lock service_state") = state;
    }

    pub fn set_ut_enabled(&self, enabled: bool) {
        self.ut_enabled.store(enabled, Ordering::SeqCst);
    }
}

impl ImsPhone for FakeImsPhone {
    fn service_state(&self) -> ServiceState {
        *self.service_state.lock().expect("lock service_state")
    }

    fn is_ut_enabled(&self) -> bool {
        self.ut_enabled.load(Ordering::SeqCst)
    }
}

/// Mutable stand-in for the telephony registration tracker.
///
/// Starts with an in-service IMS phone, mobile data enabled and no WWAN registration.
pub struct FakeNetworkState {
    ims_phone: Mutex<Option<Arc<FakeImsPhone>>>,
    wwan: Mutex<Option<NetworkRegistrationInfo>>,
    mobile_data: Mutex<Option<bool>>,
    mobile_data_default: AtomicBool,
    registration_reads: AtomicUsize,
}

impl Default for FakeNetworkState {
    fn default() -> Self {
        Self {
            ims_phone: Mutex::new(Some(FakeImsPhone::in_service())),
            wwan: Mutex::new(None),
            mobile_data: Mutex::new(Some(true)),
            mobile_data_default: AtomicBool::new(true),
            registration_reads: AtomicUsize::new(0),
        }
    }
}

impl FakeNetworkState {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Registered, not roaming, on `rat`.
    pub fn registered_on(rat: NetworkType) -> Arc<Self> {
        let state = Self::new();
        state.register(rat, false);
        state
    }

    pub fn register(&self, rat: NetworkType, roaming: bool) {
        *self.wwan.lock().expect("lock wwan") =
            Some(NetworkRegistrationInfo::new(true, roaming, rat));
    }

    pub fn lose_registration(&self) {
        *self.wwan.lock().expect("lock wwan") = None;
    }

    pub fn set_mobile_data(&self, setting: Option<bool>) {
        *self.mobile_data.lock().expect("lock mobile_data") = setting;
    }

    pub fn set_mobile_data_default(&self, enabled: bool) {
        self.mobile_data_default.store(enabled, Ordering::SeqCst);
    }

    pub fn remove_ims_phone(&self) {
        *self.ims_phone.lock().expect("lock ims_phone") = None;
    }

    /// The current IMS phone, for flipping its state mid-test.
    pub fn ims_phone_handle(&self) -> Option<Arc<FakeImsPhone>> {
        self.ims_phone.lock().expect("lock ims_phone").clone()
    }

    pub fn registration_reads(&self) -> usize {
        self.registration_reads.load(Ordering::SeqCst)
    }
}

impl NetworkStateQuery for FakeNetworkState {
    fn ims_phone(&self) -> Option<Arc<dyn ImsPhone>> {
        self.ims_phone_handle()
            .map(|phone| phone as Arc<dyn ImsPhone>)
    }

    fn ps_registration_info(&self, transport: TransportType) -> Option<NetworkRegistrationInfo> {
        self.registration_reads.fetch_add(1, Ordering::SeqCst);
        match transport {
            TransportType::Wwan => self.wwan.lock().expect("lock wwan").clone(),
            TransportType::Wlan => None,
        }
    }

    fn mobile_data_setting(&self) -> Option<bool> {
        *self.mobile_data.lock().expect("lock mobile_data")
    }

    fn mobile_data_default(&self) -> bool {
        self.mobile_data_default.load(Ordering::SeqCst)
    }
}
