//! Networking modules for the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` adapts `gloo-net` to the gateway's `Transport` seam and `api`
//! holds the process-wide gateway plus the services built on it.

pub mod api;
pub mod transport;
