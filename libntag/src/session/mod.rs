// libntag/src/session/mod.rs
//! Type-state tag session.

pub mod builder;
pub mod handle;

pub use builder::TagBuilder;
pub use handle::{Identified, Tag, Unidentified};
