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

//! Normalized supplementary-service identifiers.
//!
//! Command encoders hand these to the routing queries. Each identifier keeps the
//! wire form used by the circuit-switched command layer (`"AO"`, `"CW"`, reason `0`)
//! so callers holding raw values can convert with [`FromStr`] / [`TryFrom<i32>`].

use serde::{Serialize, Serializer};
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Raised when a raw facility string, forwarding reason or service name is unknown.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownServiceIdentifier {
    kind: &'static str,
    value: String,
}

impl UnknownServiceIdentifier {
    fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl Display for UnknownServiceIdentifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} identifier: {}", self.kind, self.value)
    }
}

impl Error for UnknownServiceIdentifier {}

/// Call-barring facility.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum CbFacility {
    /// Barring of all outgoing calls.
    Baoc,
    /// Barring of outgoing international calls.
    Baoic,
    /// Barring of outgoing international calls except to the home country.
    BaoicExHc,
    /// Barring of all incoming calls.
    Baic,
    /// Barring of incoming calls when roaming.
    BaicRoaming,
    /// All barring services.
    AllBarring,
    /// All outgoing barring services.
    AllOutgoing,
    /// All incoming barring services.
    AllIncoming,
    /// Barring list of incoming numbers.
    IncomingBarringList,
    /// Barring of all anonymous incoming calls.
    AnonymousRejection,
}

impl CbFacility {
    pub const ALL: [CbFacility; 10] = [
        CbFacility::Baoc,
        CbFacility::Baoic,
        CbFacility::BaoicExHc,
        CbFacility::Baic,
        CbFacility::BaicRoaming,
        CbFacility::AllBarring,
        CbFacility::AllOutgoing,
        CbFacility::AllIncoming,
        CbFacility::IncomingBarringList,
        CbFacility::AnonymousRejection,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CbFacility::Baoc => "AO",
            CbFacility::Baoic => "OI",
            CbFacility::BaoicExHc => "OX",
            CbFacility::Baic => "AI",
            CbFacility::BaicRoaming => "IR",
            CbFacility::AllBarring => "AB",
            CbFacility::AllOutgoing => "AG",
            CbFacility::AllIncoming => "AC",
            CbFacility::IncomingBarringList => "BIL",
            CbFacility::AnonymousRejection => "ACR",
        }
    }
}

impl FromStr for CbFacility {
    type Err = UnknownServiceIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CbFacility::ALL
            .into_iter()
            .find(|facility| facility.as_str() == s)
            .ok_or_else(|| UnknownServiceIdentifier::new("call barring facility", s))
    }
}

impl Display for CbFacility {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CbFacility {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Call-forwarding reason.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum CfReason {
    Unconditional,
    Busy,
    NoReply,
    NotReachable,
    All,
    AllConditional,
}

impl CfReason {
    pub const ALL: [CfReason; 6] = [
        CfReason::Unconditional,
        CfReason::Busy,
        CfReason::NoReply,
        CfReason::NotReachable,
        CfReason::All,
        CfReason::AllConditional,
    ];

    /// Reason code used by the circuit-switched command layer.
    pub fn code(self) -> i32 {
        match self {
            CfReason::Unconditional => 0,
            CfReason::Busy => 1,
            CfReason::NoReply => 2,
            CfReason::NotReachable => 3,
            CfReason::All => 4,
            CfReason::AllConditional => 5,
        }
    }
}

impl TryFrom<i32> for CfReason {
    type Error = UnknownServiceIdentifier;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        CfReason::ALL
            .into_iter()
            .find(|reason| reason.code() == code)
            .ok_or_else(|| UnknownServiceIdentifier::new("call forwarding reason", code.to_string()))
    }
}

impl Display for CfReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for CfReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.code())
    }
}

/// Supplementary services that are neither barring nor forwarding.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum SsService {
    /// Call waiting.
    Cw,
    /// Calling line identification presentation.
    Clip,
    /// Calling line identification restriction.
    Clir,
    /// Connected line identification presentation.
    Colp,
    /// Connected line identification restriction.
    Colr,
}

impl SsService {
    pub const ALL: [SsService; 5] = [
        SsService::Cw,
        SsService::Clip,
        SsService::Clir,
        SsService::Colp,
        SsService::Colr,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SsService::Cw => "CW",
            SsService::Clip => "CLIP",
            SsService::Clir => "CLIR",
            SsService::Colp => "COLP",
            SsService::Colr => "COLR",
        }
    }
}

impl FromStr for SsService {
    type Err = UnknownServiceIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SsService::ALL
            .into_iter()
            .find(|service| service.as_str() == s)
            .ok_or_else(|| UnknownServiceIdentifier::new("supplementary service", s))
    }
}

impl Display for SsService {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SsService {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One routing request: the service kind together with its identifier.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SuppServiceRequest {
    Cb(CbFacility),
    Cf(CfReason),
    Ss(SsService),
}

impl From<CbFacility> for SuppServiceRequest {
    fn from(facility: CbFacility) -> Self {
        SuppServiceRequest::Cb(facility)
    }
}

impl From<CfReason> for SuppServiceRequest {
    fn from(reason: CfReason) -> Self {
        SuppServiceRequest::Cf(reason)
    }
}

impl From<SsService> for SuppServiceRequest {
    fn from(service: SsService) -> Self {
        SuppServiceRequest::Ss(service)
    }
}

impl Display for SuppServiceRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SuppServiceRequest::Cb(facility) => write!(f, "cb:{facility}"),
            SuppServiceRequest::Cf(reason) => write!(f, "cf:{reason}"),
            SuppServiceRequest::Ss(service) => write!(f, "ss:{service}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CbFacility, CfReason, SsService, SuppServiceRequest};
    use std::str::FromStr;

    #[test]
    fn cb_facility_parses_command_layer_codes() {
        assert_eq!(CbFacility::from_str("AO"), Ok(CbFacility::Baoc));
        assert_eq!(CbFacility::from_str("OX"), Ok(CbFacility::BaoicExHc));
        assert_eq!(
            CbFacility::from_str("BIL"),
            Ok(CbFacility::IncomingBarringList)
        );
        assert_eq!(
            CbFacility::from_str("ACR"),
            Ok(CbFacility::AnonymousRejection)
        );
    }

    #[test]
    fn unknown_identifiers_are_rejected_with_readable_error() {
        let err = CbFacility::from_str("ZZ").expect_err("ZZ is not a facility");
        assert_eq!(err.to_string(), "unknown call barring facility identifier: ZZ");

        assert!(SsService::from_str("cw").is_err());
        assert!(CfReason::try_from(7).is_err());
        assert!(CfReason::try_from(-1).is_err());
    }

    #[test]
    fn cf_reason_codes_match_command_layer() {
        assert_eq!(CfReason::try_from(0), Ok(CfReason::Unconditional));
        assert_eq!(CfReason::try_from(3), Ok(CfReason::NotReachable));
        assert_eq!(CfReason::try_from(5), Ok(CfReason::AllConditional));
        assert_eq!(CfReason::All.code(), 4);
    }

    #[test]
    fn request_display_names_kind_and_identifier() {
        assert_eq!(
            SuppServiceRequest::from(CbFacility::Baic).to_string(),
            "cb:AI"
        );
        assert_eq!(SuppServiceRequest::from(CfReason::Busy).to_string(), "cf:1");
        assert_eq!(SuppServiceRequest::from(SsService::Colr).to_string(), "ss:COLR");
    }
}
