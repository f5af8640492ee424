//! Page modules for route-level screens.

pub mod signup;
