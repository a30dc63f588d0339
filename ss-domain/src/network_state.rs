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

//! Read-only view over externally owned registration and IMS state.
//!
//! The routing engine never mutates anything behind [`NetworkStateQuery`]. An absent
//! answer (no IMS phone, no registration record) is treated as "not registered".

use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Radio access network category that carrier configuration can mark as Ut capable.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum AccessNetworkType {
    Geran,
    Utran,
    Eutran,
    Iwlan,
    Ngran,
}

impl AccessNetworkType {
    pub const GERAN: i32 = 1;
    pub const UTRAN: i32 = 2;
    pub const EUTRAN: i32 = 3;
    pub const CDMA2000: i32 = 4;
    pub const IWLAN: i32 = 5;
    pub const NGRAN: i32 = 6;

    /// Maps a carrier-configuration RAT code. CDMA2000 and unknown codes have no Ut category.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            Self::GERAN => Some(AccessNetworkType::Geran),
            Self::UTRAN => Some(AccessNetworkType::Utran),
            Self::EUTRAN => Some(AccessNetworkType::Eutran),
            Self::IWLAN => Some(AccessNetworkType::Iwlan),
            Self::NGRAN => Some(AccessNetworkType::Ngran),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            AccessNetworkType::Geran => Self::GERAN,
            AccessNetworkType::Utran => Self::UTRAN,
            AccessNetworkType::Eutran => Self::EUTRAN,
            AccessNetworkType::Iwlan => Self::IWLAN,
            AccessNetworkType::Ngran => Self::NGRAN,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AccessNetworkType::Geran => "GERAN",
            AccessNetworkType::Utran => "UTRAN",
            AccessNetworkType::Eutran => "EUTRAN",
            AccessNetworkType::Iwlan => "IWLAN",
            AccessNetworkType::Ngran => "NGRAN",
        }
    }
}

impl Display for AccessNetworkType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AccessNetworkType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Radio technology reported by a registration record.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum NetworkType {
    #[default]
    Unknown,
    Gprs,
    Edge,
    Umts,
    Cdma,
    Evdo,
    Hsdpa,
    Hsupa,
    Hspa,
    Hspap,
    Gsm,
    TdScdma,
    Lte,
    Nr,
    Iwlan,
}

impl NetworkType {
    /// Ut category of this technology. Technologies outside the five categories have none.
    pub fn access_network_type(self) -> Option<AccessNetworkType> {
        match self {
            NetworkType::Nr => Some(AccessNetworkType::Ngran),
            NetworkType::Lte => Some(AccessNetworkType::Eutran),
            NetworkType::Umts
            | NetworkType::Hsdpa
            | NetworkType::Hsupa
            | NetworkType::Hspa
            | NetworkType::Hspap => Some(AccessNetworkType::Utran),
            NetworkType::Gprs | NetworkType::Edge | NetworkType::Gsm => {
                Some(AccessNetworkType::Geran)
            }
            _ => None,
        }
    }
}

/// IMS service state as reported by the IMS phone.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ServiceState {
    InService,
    #[default]
    OutOfService,
    EmergencyOnly,
    PowerOff,
}

/// Transport of a packet-domain registration record.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TransportType {
    Wwan,
    Wlan,
}

/// Packet-domain registration record for one transport.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NetworkRegistrationInfo {
    pub registered: bool,
    pub roaming: bool,
    pub access_network_technology: NetworkType,
}

impl NetworkRegistrationInfo {
    pub fn new(registered: bool, roaming: bool, access_network_technology: NetworkType) -> Self {
        Self {
            registered,
            roaming,
            access_network_technology,
        }
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    pub fn is_roaming(&self) -> bool {
        self.roaming
    }
}

/// IMS-capable phone instance owned by the IMS stack.
pub trait ImsPhone: Send + Sync {
    fn service_state(&self) -> ServiceState;

    /// The IMS stack's own view of whether Ut can be used right now.
    fn is_ut_enabled(&self) -> bool;
}

/// Read accessors over registration, roaming, RAT and IMS state.
pub trait NetworkStateQuery: Send + Sync {
    /// The IMS-capable phone, or `None` when this line has no IMS path at all.
    fn ims_phone(&self) -> Option<Arc<dyn ImsPhone>>;

    /// Packet-domain registration record for `transport`, `None` when unavailable.
    fn ps_registration_info(&self, transport: TransportType) -> Option<NetworkRegistrationInfo>;

    /// User mobile-data setting, `None` when the setting has never been written.
    fn mobile_data_setting(&self) -> Option<bool>;

    /// Build-time default used when [`NetworkStateQuery::mobile_data_setting`] is absent.
    fn mobile_data_default(&self) -> bool {
        true
    }
}
