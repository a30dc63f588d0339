//! Canonical structured event names used across `ss-domain`.

// Configuration events.
pub const CONFIG_APPLY_OK: &str = "config_apply_ok";
pub const CONFIG_UT_DISABLED: &str = "config_ut_disabled";
pub const CONFIG_PARSE_FAILED: &str = "config_parse_failed";
pub const CONFIG_SERVICE_CODE_IGNORED: &str = "config_service_code_ignored";
pub const CONFIG_RAT_CODE_IGNORED: &str = "config_rat_code_ignored";

// Connectivity monitoring events.
pub const CONNECTIVITY_REGISTER_OK: &str = "connectivity_register_ok";
pub const CONNECTIVITY_REGISTER_FAILED: &str = "connectivity_register_failed";
pub const CONNECTIVITY_REGISTER_SKIPPED: &str = "connectivity_register_skipped";
pub const CONNECTIVITY_UNREGISTER_OK: &str = "connectivity_unregister_ok";
pub const CONNECTIVITY_UNREGISTER_FAILED: &str = "connectivity_unregister_failed";
pub const CONNECTIVITY_UNREGISTER_SKIPPED: &str = "connectivity_unregister_skipped";
pub const WIFI_AVAILABLE: &str = "wifi_available";
pub const WIFI_LOST: &str = "wifi_lost";
pub const WIFI_UNAVAILABLE: &str = "wifi_unavailable";

// Transport reachability events.
pub const MOBILE_DATA_SETTING_MISSING: &str = "mobile_data_setting_missing";
pub const UT_TRANSPORT_CELLULAR: &str = "ut_transport_cellular";
pub const UT_TRANSPORT_WIFI: &str = "ut_transport_wifi";
pub const UT_TRANSPORT_WIFI_NOT_CAPABLE: &str = "ut_transport_wifi_not_capable";
pub const UT_TRANSPORT_NONE: &str = "ut_transport_none";
pub const UT_CELLULAR_ROAMING_BLOCKED: &str = "ut_cellular_roaming_blocked";
pub const UT_CELLULAR_UNAVAILABLE: &str = "ut_cellular_unavailable";

// Decision events.
pub const UT_ENABLED_NO_IMS_PHONE: &str = "ut_enabled_no_ims_phone";
pub const UT_ENABLED_NOT_SUPPORTED: &str = "ut_enabled_not_supported";
pub const UT_ENABLED_NOT_REGISTERED: &str = "ut_enabled_not_registered";
pub const UT_ENABLED_NO_TRANSPORT: &str = "ut_enabled_no_transport";
pub const UT_QUERY_NOT_SUPPORTED: &str = "ut_query_not_supported";
