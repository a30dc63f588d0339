//! Carrier service code to normalized supplementary-service identifier table.

use crate::supp_service::{CbFacility, CfReason, SsService, SuppServiceRequest};

pub const SUPPLEMENTARY_SERVICE_CW: i32 = 0;
pub const SUPPLEMENTARY_SERVICE_CF_ALL: i32 = 1;
pub const SUPPLEMENTARY_SERVICE_CF_CFU: i32 = 2;
pub const SUPPLEMENTARY_SERVICE_CF_ALL_CONDITIONAL_FORWARDING: i32 = 3;
pub const SUPPLEMENTARY_SERVICE_CF_CFB: i32 = 4;
pub const SUPPLEMENTARY_SERVICE_CF_CFNRY: i32 = 5;
pub const SUPPLEMENTARY_SERVICE_CF_CFNRC: i32 = 6;
pub const SUPPLEMENTARY_SERVICE_CF_NOT_LOGGED_IN: i32 = 7;
pub const SUPPLEMENTARY_SERVICE_IDENTIFICATION_OIP: i32 = 8;
pub const SUPPLEMENTARY_SERVICE_IDENTIFICATION_TIP: i32 = 9;
pub const SUPPLEMENTARY_SERVICE_IDENTIFICATION_OIR: i32 = 10;
pub const SUPPLEMENTARY_SERVICE_IDENTIFICATION_TIR: i32 = 11;
pub const SUPPLEMENTARY_SERVICE_CB_ALL: i32 = 12;
pub const SUPPLEMENTARY_SERVICE_CB_OBS: i32 = 13;
pub const SUPPLEMENTARY_SERVICE_CB_BAOC: i32 = 14;
pub const SUPPLEMENTARY_SERVICE_CB_BOIC: i32 = 15;
pub const SUPPLEMENTARY_SERVICE_CB_BOIC_EXHC: i32 = 16;
pub const SUPPLEMENTARY_SERVICE_CB_IBS: i32 = 17;
pub const SUPPLEMENTARY_SERVICE_CB_BAIC: i32 = 18;
pub const SUPPLEMENTARY_SERVICE_CB_BIC_ROAM: i32 = 19;
pub const SUPPLEMENTARY_SERVICE_CB_ACR: i32 = 20;
pub const SUPPLEMENTARY_SERVICE_CB_BIL: i32 = 21;

// CF_NOT_LOGGED_IN has no Ut counterpart.
static SERVICE_CODE_TABLE: [(i32, SuppServiceRequest); 21] = [
    (SUPPLEMENTARY_SERVICE_CW, SuppServiceRequest::Ss(SsService::Cw)),
    (SUPPLEMENTARY_SERVICE_CF_ALL, SuppServiceRequest::Cf(CfReason::All)),
    (
        SUPPLEMENTARY_SERVICE_CF_CFU,
        SuppServiceRequest::Cf(CfReason::Unconditional),
    ),
    (
        SUPPLEMENTARY_SERVICE_CF_ALL_CONDITIONAL_FORWARDING,
        SuppServiceRequest::Cf(CfReason::AllConditional),
    ),
    (SUPPLEMENTARY_SERVICE_CF_CFB, SuppServiceRequest::Cf(CfReason::Busy)),
    (
        SUPPLEMENTARY_SERVICE_CF_CFNRY,
        SuppServiceRequest::Cf(CfReason::NoReply),
    ),
    (
        SUPPLEMENTARY_SERVICE_CF_CFNRC,
        SuppServiceRequest::Cf(CfReason::NotReachable),
    ),
    (
        SUPPLEMENTARY_SERVICE_IDENTIFICATION_OIP,
        SuppServiceRequest::Ss(SsService::Clip),
    ),
    (
        SUPPLEMENTARY_SERVICE_IDENTIFICATION_TIP,
        SuppServiceRequest::Ss(SsService::Colp),
    ),
    (
        SUPPLEMENTARY_SERVICE_IDENTIFICATION_OIR,
        SuppServiceRequest::Ss(SsService::Clir),
    ),
    (
        SUPPLEMENTARY_SERVICE_IDENTIFICATION_TIR,
        SuppServiceRequest::Ss(SsService::Colr),
    ),
    (
        SUPPLEMENTARY_SERVICE_CB_ALL,
        SuppServiceRequest::Cb(CbFacility::AllBarring),
    ),
    (
        SUPPLEMENTARY_SERVICE_CB_OBS,
        SuppServiceRequest::Cb(CbFacility::AllOutgoing),
    ),
    (
        SUPPLEMENTARY_SERVICE_CB_BAOC,
        SuppServiceRequest::Cb(CbFacility::Baoc),
    ),
    (
        SUPPLEMENTARY_SERVICE_CB_BOIC,
        SuppServiceRequest::Cb(CbFacility::Baoic),
    ),
    (
        SUPPLEMENTARY_SERVICE_CB_BOIC_EXHC,
        SuppServiceRequest::Cb(CbFacility::BaoicExHc),
    ),
    (
        SUPPLEMENTARY_SERVICE_CB_IBS,
        SuppServiceRequest::Cb(CbFacility::AllIncoming),
    ),
    (
        SUPPLEMENTARY_SERVICE_CB_BAIC,
        SuppServiceRequest::Cb(CbFacility::Baic),
    ),
    (
        SUPPLEMENTARY_SERVICE_CB_BIC_ROAM,
        SuppServiceRequest::Cb(CbFacility::BaicRoaming),
    ),
    (
        SUPPLEMENTARY_SERVICE_CB_ACR,
        SuppServiceRequest::Cb(CbFacility::AnonymousRejection),
    ),
    (
        SUPPLEMENTARY_SERVICE_CB_BIL,
        SuppServiceRequest::Cb(CbFacility::IncomingBarringList),
    ),
];

/// Resolves one carrier service code. Unrecognized codes yield `None`.
pub(crate) fn lookup_service_code(code: i32) -> Option<SuppServiceRequest> {
    SERVICE_CODE_TABLE
        .iter()
        .find(|(table_code, _)| *table_code == code)
        .map(|(_, request)| *request)
}
