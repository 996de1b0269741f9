//! Utilities for libntag: small, reusable helpers used across the crate.

pub mod bits;
pub mod hex;

pub use hex::*;
