//! Browser bindings for the gateway seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page logic so
//! native builds and tests compile them as no-ops.

pub mod navigate;
pub mod session;
