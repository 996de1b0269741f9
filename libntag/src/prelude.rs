// libntag/src/prelude.rs

pub use crate::configuration::{AuthLimit, ConfigurationRecord, MirrorSource, ProtectionMode};
pub use crate::identify::{Capabilities, MemoryLayout, TagFamily, TagProfile, VersionInfo};
pub use crate::operations::{PasswordChange, PasswordChangeState};
pub use crate::protocol::{Command, NakKind, Response};
pub use crate::session::{Identified, Tag, TagBuilder, Unidentified};
pub use crate::signature::{verify_originality, OriginalitySignature, PublicKey};
pub use crate::transport::Transceiver;
pub use crate::{Atqa, Credentials, Error, Pack, PageData, Password, Result, Sak, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
