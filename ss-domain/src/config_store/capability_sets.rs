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

//! Per-kind sets of services the carrier marks as Ut capable.

use crate::config_store::service_code_table::lookup_service_code;
use crate::observability::events;
use crate::supp_service::{CbFacility, CfReason, SsService, SuppServiceRequest};
use std::collections::BTreeSet;
use tracing::debug;

const COMPONENT: &str = "capability_sets";

/// Membership-only view of Ut-capable supplementary services.
///
/// Always built wholesale from one list of service codes, never patched in place.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ServiceCapabilitySets {
    call_barring: BTreeSet<CbFacility>,
    call_forwarding: BTreeSet<CfReason>,
    supplementary: BTreeSet<SsService>,
}

impl ServiceCapabilitySets {
    /// Builds the sets from carrier service codes, skipping unrecognized codes.
    pub(crate) fn from_service_codes(codes: &[i32]) -> Self {
        let mut sets = Self::default();
        for &code in codes {
            match lookup_service_code(code) {
                Some(request) => sets.insert(request),
                None => debug!(
                    event = events::CONFIG_SERVICE_CODE_IGNORED,
                    component = COMPONENT,
                    code,
                    "ignoring service code without Ut mapping"
                ),
            }
        }
        sets
    }

    fn insert(&mut self, request: SuppServiceRequest) {
        match request {
            SuppServiceRequest::Cb(facility) => {
                self.call_barring.insert(facility);
            }
            SuppServiceRequest::Cf(reason) => {
                self.call_forwarding.insert(reason);
            }
            SuppServiceRequest::Ss(service) => {
                self.supplementary.insert(service);
            }
        }
    }

    pub fn contains(&self, request: SuppServiceRequest) -> bool {
        match request {
            SuppServiceRequest::Cb(facility) => self.call_barring.contains(&facility),
            SuppServiceRequest::Cf(reason) => self.call_forwarding.contains(&reason),
            SuppServiceRequest::Ss(service) => self.supplementary.contains(&service),
        }
    }

    pub fn call_barring(&self) -> &BTreeSet<CbFacility> {
        &self.call_barring
    }

    pub fn call_forwarding(&self) -> &BTreeSet<CfReason> {
        &self.call_forwarding
    }

    pub fn supplementary(&self) -> &BTreeSet<SsService> {
        &self.supplementary
    }

    pub fn is_empty(&self) -> bool {
        self.call_barring.is_empty()
            && self.call_forwarding.is_empty()
            && self.supplementary.is_empty()
    }
}
