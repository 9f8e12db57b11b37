//! Utilities for pn532-classic: small, reusable helpers used across the crate.

pub mod timeout;

pub use timeout::*;
