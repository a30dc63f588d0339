//! Connectivity layer.
//!
//! Owns the single Wi-Fi availability subscription and the atomic availability cell
//! written from the platform notification thread.

pub(crate) mod monitor;
pub(crate) mod network_callback;
