//! Routing layer.
//!
//! Evaluates Ut reachability over cellular and Wi-Fi for one configuration snapshot.
//! Nothing here is cached: every evaluation reads live network and Wi-Fi state.

pub(crate) mod transport_reachability;
