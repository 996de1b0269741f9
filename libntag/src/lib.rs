// libntag/src/lib.rs

//! libntag
//!
//! Pure Rust protocol engine for NTAG21x and MIFARE Ultralight EV1 tags:
//! command codec, multi-exchange reads and writes, tag classification,
//! the configuration record and originality signature verification.
//! The radio link is supplied by the caller as a [`transport::Transceiver`].
#![warn(missing_docs)]

pub mod configuration;
pub mod constants;
pub mod error;
pub mod identify;
pub mod operations;
pub mod prelude;
pub mod protocol;
pub mod session;
pub mod signature;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
