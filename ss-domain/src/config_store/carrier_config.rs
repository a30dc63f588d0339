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

//! Carrier-configuration snapshot as handed over by the configuration collaborator.

use crate::network_state::AccessNetworkType;
use crate::observability::events;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use tracing::warn;

const COMPONENT: &str = "carrier_config";

/// Failures while decoding a carrier-configuration snapshot.
#[derive(Debug)]
pub enum CarrierConfigError {
    Parse(json5::Error),
}

impl Display for CarrierConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CarrierConfigError::Parse(err) => {
                write!(f, "unable to parse carrier configuration: {err}")
            }
        }
    }
}

impl Error for CarrierConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CarrierConfigError::Parse(err) => Some(err),
        }
    }
}

/// Typed carrier settings that drive Ut/CSFB routing.
///
/// Field names on the wire are the carrier-configuration keys. Keys that are missing
/// take the platform default; keys this crate does not know about are ignored.
///
/// ```
/// use ss_domain::CarrierConfigBundle;
///
/// let bundle = CarrierConfigBundle::from_json5_str(
///     r#"{
///         carrier_supports_ss_over_ut_bool: true,
///         "imsss.ut_server_based_services_int_array": [0],
///         some_unrelated_key: 12,
///     }"#,
/// )
/// .unwrap();
///
/// assert!(bundle.supports_ss_over_ut);
/// assert!(bundle.use_csfb_on_ut_failure);
/// assert_eq!(bundle.ut_server_based_services, Some(vec![0]));
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct CarrierConfigBundle {
    #[serde(rename = "carrier_supports_ss_over_ut_bool")]
    pub supports_ss_over_ut: bool,
    #[serde(rename = "imsss.use_csfb_on_xcap_over_ut_failure_bool")]
    pub use_csfb_on_ut_failure: bool,
    #[serde(rename = "imsss.ut_requires_ims_registration_bool")]
    pub ut_requires_ims_registration: bool,
    #[serde(rename = "imsss.ut_supported_when_ps_data_off_bool")]
    pub ut_supported_when_ps_data_off: bool,
    #[serde(rename = "imsss.ut_supported_when_roaming_bool")]
    pub ut_supported_when_roaming: bool,
    #[serde(rename = "imsss.ut_server_based_services_int_array")]
    pub ut_server_based_services: Option<Vec<i32>>,
    #[serde(rename = "imsss.xcap_over_ut_supported_rats_int_array")]
    pub xcap_over_ut_supported_rats: Option<Vec<i32>>,
}

impl Default for CarrierConfigBundle {
    fn default() -> Self {
        Self {
            supports_ss_over_ut: false,
            use_csfb_on_ut_failure: true,
            ut_requires_ims_registration: false,
            ut_supported_when_ps_data_off: true,
            ut_supported_when_roaming: true,
            ut_server_based_services: Some(Vec::new()),
            xcap_over_ut_supported_rats: Some(vec![
                AccessNetworkType::NGRAN,
                AccessNetworkType::EUTRAN,
                AccessNetworkType::IWLAN,
            ]),
        }
    }
}

impl CarrierConfigBundle {
    pub fn from_json5_str(text: &str) -> Result<Self, CarrierConfigError> {
        json5::from_str(text).map_err(CarrierConfigError::Parse)
    }

    /// Decodes `text`, collapsing malformed input to the platform default bundle.
    pub fn parse_or_default(text: &str) -> Self {
        match Self::from_json5_str(text) {
            Ok(bundle) => bundle,
            Err(err) => {
                warn!(
                    event = events::CONFIG_PARSE_FAILED,
                    component = COMPONENT,
                    err = %err,
                    "malformed carrier configuration, using platform defaults"
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CarrierConfigBundle, CarrierConfigError};
    use std::error::Error;

    #[test]
    fn missing_keys_take_platform_defaults() {
        let bundle = CarrierConfigBundle::from_json5_str("{}").expect("empty object parses");

        assert_eq!(bundle, CarrierConfigBundle::default());
        assert!(!bundle.supports_ss_over_ut);
        assert!(bundle.use_csfb_on_ut_failure);
        assert_eq!(bundle.xcap_over_ut_supported_rats, Some(vec![6, 3, 5]));
    }

    #[test]
    fn explicit_null_arrays_decode_as_absent() {
        let bundle = CarrierConfigBundle::from_json5_str(
            r#"{
                carrier_supports_ss_over_ut_bool: true,
                "imsss.ut_server_based_services_int_array": null,
                "imsss.xcap_over_ut_supported_rats_int_array": null,
            }"#,
        )
        .expect("null arrays parse");

        assert!(bundle.supports_ss_over_ut);
        assert_eq!(bundle.ut_server_based_services, None);
        assert_eq!(bundle.xcap_over_ut_supported_rats, None);
    }

    #[test]
    fn malformed_text_reports_parse_error_with_source() {
        let err = CarrierConfigBundle::from_json5_str("{ carrier_supports_ss_over_ut_bool: ")
            .expect_err("truncated input must fail");

        assert!(matches!(err, CarrierConfigError::Parse(_)));
        assert!(err
            .to_string()
            .starts_with("unable to parse carrier configuration"));
        assert!(err.source().is_some());
    }

    #[test]
    fn parse_or_default_collapses_malformed_and_mistyped_input() {
        assert_eq!(
            CarrierConfigBundle::parse_or_default("not a bundle"),
            CarrierConfigBundle::default()
        );
        assert_eq!(
            CarrierConfigBundle::parse_or_default(r#"{ carrier_supports_ss_over_ut_bool: "yes" }"#),
            CarrierConfigBundle::default()
        );
    }
}
