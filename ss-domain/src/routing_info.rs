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

use serde::Serialize;

/// Routing answer for a single supplementary-service request.
///
/// A request that is not routed over Ut always allows the circuit-switched path,
/// so `uses_ut_routing() == false` implies `supports_csfb_fallback() == true`.
///
/// ```
/// use ss_domain::SuppServiceRoutingInfo;
///
/// let info = SuppServiceRoutingInfo::new(false, false);
/// assert!(!info.uses_ut_routing());
/// assert!(info.supports_csfb_fallback());
///
/// let info = SuppServiceRoutingInfo::new(true, false);
/// assert!(info.uses_ut_routing());
/// assert!(!info.supports_csfb_fallback());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct SuppServiceRoutingInfo {
    uses_ut_routing: bool,
    supports_csfb_fallback: bool,
}

impl SuppServiceRoutingInfo {
    /// Ut is used and a Ut failure may fall back to CS signalling.
    pub const OVER_UT: SuppServiceRoutingInfo = SuppServiceRoutingInfo::new(true, true);

    pub const fn new(uses_ut_routing: bool, supports_csfb_fallback: bool) -> Self {
        Self {
            uses_ut_routing,
            supports_csfb_fallback: supports_csfb_fallback || !uses_ut_routing,
        }
    }

    pub fn uses_ut_routing(&self) -> bool {
        self.uses_ut_routing
    }

    pub fn supports_csfb_fallback(&self) -> bool {
        self.supports_csfb_fallback
    }
}

#[cfg(test)]
mod tests {
    use super::SuppServiceRoutingInfo;

    #[test]
    fn not_routed_over_ut_always_allows_csfb() {
        for supports_csfb in [false, true] {
            let info = SuppServiceRoutingInfo::new(false, supports_csfb);
            assert!(!info.uses_ut_routing());
            assert!(info.supports_csfb_fallback());
        }
    }

    #[test]
    fn routed_over_ut_keeps_policy_flag() {
        assert!(SuppServiceRoutingInfo::new(true, true).supports_csfb_fallback());
        assert!(!SuppServiceRoutingInfo::new(true, false).supports_csfb_fallback());
        assert_eq!(
            SuppServiceRoutingInfo::OVER_UT,
            SuppServiceRoutingInfo::new(true, true)
        );
    }
}
