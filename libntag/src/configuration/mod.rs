// libntag/src/configuration/mod.rs
//! The two-page configuration record of NTAG21x / Ultralight EV1 tags.

pub mod record;
pub mod report;

pub use record::{AuthLimit, ConfigurationRecord, MirrorSource, ProtectionMode, RECORD_LEN};
