// libntag/src/identify/profile.rs

use derive_more::Display;

use crate::constants::{BYTES_PER_PAGE, FIRST_USER_PAGE};
use crate::identify::version::VersionInfo;

/// Tag family
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TagFamily {
    #[display(fmt = "NTAG21x")]
    Ntag21x,
    #[display(fmt = "MIFARE Ultralight EV1")]
    UltralightEv1,
    #[display(fmt = "MIFARE DESFire")]
    Desfire,
    #[display(fmt = "Unknown")]
    Unknown,
}

impl TagFamily {
    /// Families that speak the page-based NTAG21x command set.
    pub fn is_page_based(&self) -> bool {
        matches!(self, Self::Ntag21x | Self::UltralightEv1)
    }
}

/// Where a profile came from.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ProfileSource {
    /// Decoded from GET_VERSION
    #[display(fmt = "version")]
    Version,
    /// Looked up from ATQA/SAK; these values are not unique across tag
    /// generations so the result is a guess
    #[display(fmt = "ATQA/SAK fallback")]
    Fallback,
    /// Supplied by the caller
    #[display(fmt = "caller supplied")]
    Manual,
}

/// Memory map of a page-based tag. All zero when unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MemoryLayout {
    pub user_memory_bytes: u32,
    pub first_user_page: u16,
    /// Inclusive
    pub last_user_page: u16,
    /// Inclusive; PACK lives here, PWD one page below
    pub last_page: u16,
    /// First of the two configuration pages
    pub config_page: u16,
}

impl MemoryLayout {
    /// Layout for the tags in the NTAG21x / Ultralight EV1 tables.
    pub const fn paged(user_memory_bytes: u32, last_user_page: u16, last_page: u16, config_page: u16) -> Self {
        Self {
            user_memory_bytes,
            first_user_page: FIRST_USER_PAGE,
            last_user_page,
            last_page,
            config_page,
        }
    }

    /// Only a byte count is known (DESFire class).
    pub const fn bytes_only(user_memory_bytes: u32) -> Self {
        Self {
            user_memory_bytes,
            first_user_page: 0,
            last_user_page: 0,
            last_page: 0,
            config_page: 0,
        }
    }

    pub fn bytes_per_page(&self) -> usize {
        BYTES_PER_PAGE
    }

    /// True when the page map is usable for page addressed operations.
    pub fn has_pages(&self) -> bool {
        self.last_page != 0
    }

    pub fn pwd_page(&self) -> u16 {
        self.last_page.saturating_sub(1)
    }

    pub fn pack_page(&self) -> u16 {
        self.last_page
    }
}

/// Capability flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Capabilities {
    pub fast_read: bool,
    pub password_auth: bool,
    pub des_auth: bool,
    pub page_lock_bytes: bool,
    pub otp_area: bool,
}

impl Capabilities {
    pub const NONE: Self = Self {
        fast_read: false,
        password_auth: false,
        des_auth: false,
        page_lock_bytes: false,
        otp_area: false,
    };

    /// What every NTAG21x / Ultralight EV1 subtype supports.
    pub const PAGED: Self = Self {
        fast_read: true,
        password_auth: true,
        des_auth: false,
        page_lock_bytes: true,
        otp_area: true,
    };
}

/// Everything known about the tag in the field. Immutable for the
/// lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TagProfile {
    pub family: TagFamily,
    /// Subtype name, e.g. "NTAG215"
    pub name: String,
    pub memory: MemoryLayout,
    pub counters: u8,
    pub capabilities: Capabilities,
    pub source: ProfileSource,
    pub version: Option<VersionInfo>,
}

impl TagProfile {
    /// Profile for a caller that already knows the tag.
    pub fn manual(family: TagFamily, name: impl Into<String>, memory: MemoryLayout, counters: u8, capabilities: Capabilities) -> Self {
        Self {
            family,
            name: name.into(),
            memory,
            counters,
            capabilities,
            source: ProfileSource::Manual,
            version: None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == ProfileSource::Fallback
    }

    /// Page based family with a known memory map.
    pub fn supports_page_operations(&self) -> bool {
        self.family.is_page_based() && self.memory.has_pages()
    }
}

impl std::fmt::Display for TagProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) with {} bytes user memory [{}]",
            self.name, self.family, self.memory.user_memory_bytes, self.source
        )
    }
}
