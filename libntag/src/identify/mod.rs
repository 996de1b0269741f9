// libntag/src/identify/mod.rs
//! Tag classification from GET_VERSION data or ATQA/SAK.

pub mod classifier;
pub mod profile;
pub mod table;
pub mod version;

pub use classifier::{classify, classify_fallback, classify_version, describe_version_rejection};
pub use profile::{Capabilities, MemoryLayout, ProfileSource, TagFamily, TagProfile};
pub use version::VersionInfo;
