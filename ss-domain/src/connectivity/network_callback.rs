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

//! Platform connectivity-service seam.

use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

/// Opaque platform network identifier carried by availability notifications.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NetworkHandle(pub u64);

impl Display for NetworkHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "network-{}", self.0)
    }
}

/// Transport a callback subscription is filtered on.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NetworkTransport {
    Wifi,
    Cellular,
}

/// Filter describing which networks a callback is interested in.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NetworkRequest {
    pub transport: NetworkTransport,
}

impl NetworkRequest {
    pub fn wifi() -> Self {
        Self {
            transport: NetworkTransport::Wifi,
        }
    }
}

/// Availability notifications, delivered on a platform-owned thread.
///
/// Implementations must not block or perform I/O.
pub trait NetworkCallback: Send + Sync {
    fn on_available(&self, network: NetworkHandle);

    fn on_lost(&self, network: NetworkHandle);

    fn on_unavailable(&self);
}

/// Connectivity-service failures.
pub enum ConnectivityError {
    ServiceUnavailable,
    RegisterFailed(String),
    UnregisterFailed(String),
}

impl Debug for ConnectivityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConnectivityError::ServiceUnavailable => write!(f, "ServiceUnavailable"),
            ConnectivityError::RegisterFailed(reason) => write!(f, "RegisterFailed({reason:?})"),
            ConnectivityError::UnregisterFailed(reason) => {
                write!(f, "UnregisterFailed({reason:?})")
            }
        }
    }
}

impl Display for ConnectivityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConnectivityError::ServiceUnavailable => {
                write!(f, "connectivity service is unavailable")
            }
            ConnectivityError::RegisterFailed(reason) => {
                write!(f, "failed to register network callback: {reason}")
            }
            ConnectivityError::UnregisterFailed(reason) => {
                write!(f, "failed to unregister network callback: {reason}")
            }
        }
    }
}

impl Error for ConnectivityError {}

/// Platform connectivity service that owns network-callback subscriptions.
///
/// `unregister_network_callback` must be synchronous: once it returns, no further
/// notification may be delivered to that callback.
pub trait ConnectivityService: Send + Sync {
    fn register_network_callback(
        &self,
        request: &NetworkRequest,
        callback: Arc<dyn NetworkCallback>,
    ) -> Result<(), ConnectivityError>;

    fn unregister_network_callback(
        &self,
        callback: Arc<dyn NetworkCallback>,
    ) -> Result<(), ConnectivityError>;
}

#[cfg(test)]
mod tests {
    use super::{ConnectivityError, NetworkHandle, NetworkRequest, NetworkTransport};

    #[test]
    fn connectivity_error_display_is_stable() {
        assert_eq!(
            ConnectivityError::ServiceUnavailable.to_string(),
            "connectivity service is unavailable"
        );
        assert_eq!(
            ConnectivityError::RegisterFailed("quota".to_string()).to_string(),
            "failed to register network callback: quota"
        );
        assert_eq!(
            format!("{:?}", ConnectivityError::UnregisterFailed("gone".to_string())),
            "UnregisterFailed(\"gone\")"
        );
    }

    #[test]
    fn wifi_request_filters_on_wifi_transport() {
        assert_eq!(NetworkRequest::wifi().transport, NetworkTransport::Wifi);
        assert_eq!(NetworkHandle(7).to_string(), "network-7");
    }
}
