// libntag/src/configuration/record.rs

use derive_more::Display;

use crate::constants::{
    AUTH0_DISABLED, BYTES_PER_PAGE, FIRST_USER_PAGE, MIRROR_BOTH_LEN, MIRROR_COUNTER_LEN,
    MIRROR_UID_LEN,
};
use crate::types::PageData;
use crate::utils::bits::{get_field, test_bit, with_bit, with_field};
use crate::{Error, Result};

/// Length of the configuration record (2 pages)
pub const RECORD_LEN: usize = 8;

// MIRROR byte (page A, byte 0)
const MIRROR_COUNTER_BIT: u8 = 7;
const MIRROR_UID_BIT: u8 = 6;
const MIRROR_BYTE_SHIFT: u8 = 4;
const STRG_MOD_EN_BIT: u8 = 2;

// ACCESS byte (page B, byte 0)
const PROT_BIT: u8 = 7;
const CFGLCK_BIT: u8 = 6;
const NFC_CNT_EN_BIT: u8 = 4;
const NFC_CNT_PWD_PROT_BIT: u8 = 3;
const AUTHLIM_WIDTH: u8 = 3;

/// What gets mirrored into user memory as ASCII.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum MirrorSource {
    #[display(fmt = "none")]
    None,
    #[display(fmt = "UID")]
    Uid,
    #[display(fmt = "NFC counter")]
    Counter,
    #[display(fmt = "UID and NFC counter")]
    Both,
}

impl MirrorSource {
    fn from_bits(uid: bool, counter: bool) -> Self {
        match (uid, counter) {
            (false, false) => Self::None,
            (true, false) => Self::Uid,
            (false, true) => Self::Counter,
            (true, true) => Self::Both,
        }
    }

    fn uid(&self) -> bool {
        matches!(self, Self::Uid | Self::Both)
    }

    fn counter(&self) -> bool {
        matches!(self, Self::Counter | Self::Both)
    }

    /// Bytes of ASCII the tag writes for this source.
    pub fn mirrored_len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Uid => MIRROR_UID_LEN,
            Self::Counter => MIRROR_COUNTER_LEN,
            Self::Both => MIRROR_BOTH_LEN,
        }
    }
}

/// PROT bit of ACCESS
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ProtectionMode {
    /// Password needed for writes only
    #[display(fmt = "Write only")]
    WriteOnly,
    /// Password needed for reads and writes
    #[display(fmt = "Read & Write")]
    ReadWrite,
}

/// AUTHLIM: failed password attempts allowed before the tag locks up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthLimit {
    Unlimited,
    Attempts(u8),
}

impl AuthLimit {
    /// Build from an attempt count; 0 means unlimited, above 7 is rejected.
    pub fn new(attempts: u8) -> Result<Self> {
        match attempts {
            0 => Ok(Self::Unlimited),
            1..=7 => Ok(Self::Attempts(attempts)),
            n => Err(Error::InvalidArgument(format!(
                "AUTHLIM must be 0..=7, got {}",
                n
            ))),
        }
    }

    /// Decode the low three bits of ACCESS.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => Self::Unlimited,
            n => Self::Attempts(n),
        }
    }

    pub fn bits(&self) -> u8 {
        match self {
            Self::Unlimited => 0,
            Self::Attempts(n) => *n & 0x07,
        }
    }
}

impl std::fmt::Display for AuthLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unlimited => write!(f, "0 (unlimited)"),
            Self::Attempts(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fields {
    mirror: u8,
    rfui0: u8,
    mirror_page: u8,
    auth0: u8,
    access: u8,
    vctid: u8,
    rfui1: u8,
    rfui2: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Valid(Fields),
    Invalid { len: usize },
}

/// Typed view over the two configuration pages.
///
/// Built from anything but exactly 8 bytes the record is invalid: every
/// accessor and mutator then returns `Error::InvalidConfiguration`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationRecord {
    state: State,
}

impl ConfigurationRecord {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let state = match bytes {
            [mirror, rfui0, mirror_page, auth0, access, vctid, rfui1, rfui2] => {
                State::Valid(Fields {
                    mirror: *mirror,
                    rfui0: *rfui0,
                    mirror_page: *mirror_page,
                    auth0: *auth0,
                    access: *access,
                    vctid: *vctid,
                    rfui1: *rfui1,
                    rfui2: *rfui2,
                })
            }
            _ => State::Invalid { len: bytes.len() },
        };
        Self { state }
    }

    /// Factory state of an NTAG21x / Ultralight EV1: nothing mirrored,
    /// authentication disabled, everything else clear.
    pub fn factory_default() -> Self {
        Self::from_bytes(&[0x04, 0x00, 0x00, AUTH0_DISABLED, 0x00, 0x05, 0x00, 0x00])
    }

    pub fn is_valid(&self) -> bool {
        matches!(self.state, State::Valid(_))
    }

    fn fields(&self) -> Result<&Fields> {
        match &self.state {
            State::Valid(f) => Ok(f),
            State::Invalid { .. } => Err(Error::InvalidConfiguration),
        }
    }

    fn fields_mut(&mut self) -> Result<&mut Fields> {
        match &mut self.state {
            State::Valid(f) => Ok(f),
            State::Invalid { .. } => Err(Error::InvalidConfiguration),
        }
    }

    /// Recompose the 8-byte record from field state.
    pub fn to_bytes(&self) -> Result<[u8; RECORD_LEN]> {
        let f = self.fields()?;
        Ok([
            f.mirror,
            f.rfui0,
            f.mirror_page,
            f.auth0,
            f.access,
            f.vctid,
            f.rfui1,
            f.rfui2,
        ])
    }

    /// First configuration page (MIRROR, RFUI, MIRROR_PAGE, AUTH0).
    pub fn page_a(&self) -> Result<PageData> {
        let b = self.to_bytes()?;
        Ok(PageData::from_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Second configuration page (ACCESS, VCTID, RFUI, RFUI).
    pub fn page_b(&self) -> Result<PageData> {
        let b = self.to_bytes()?;
        Ok(PageData::from_bytes([b[4], b[5], b[6], b[7]]))
    }

    // --- accessors ---

    pub fn mirror_source(&self) -> Result<MirrorSource> {
        let m = self.fields()?.mirror;
        Ok(MirrorSource::from_bits(
            test_bit(m, MIRROR_UID_BIT),
            test_bit(m, MIRROR_COUNTER_BIT),
        ))
    }

    /// Byte within the mirror page where the ASCII text starts (0..=3).
    pub fn mirror_byte(&self) -> Result<u8> {
        Ok(get_field(self.fields()?.mirror, MIRROR_BYTE_SHIFT, 2))
    }

    pub fn mirror_page(&self) -> Result<u8> {
        Ok(self.fields()?.mirror_page)
    }

    pub fn strong_modulation(&self) -> Result<bool> {
        Ok(test_bit(self.fields()?.mirror, STRG_MOD_EN_BIT))
    }

    pub fn auth0(&self) -> Result<u8> {
        Ok(self.fields()?.auth0)
    }

    pub fn protection(&self) -> Result<ProtectionMode> {
        Ok(if test_bit(self.fields()?.access, PROT_BIT) {
            ProtectionMode::ReadWrite
        } else {
            ProtectionMode::WriteOnly
        })
    }

    pub fn config_locked(&self) -> Result<bool> {
        Ok(test_bit(self.fields()?.access, CFGLCK_BIT))
    }

    pub fn nfc_counter_enabled(&self) -> Result<bool> {
        Ok(test_bit(self.fields()?.access, NFC_CNT_EN_BIT))
    }

    pub fn nfc_counter_password_protected(&self) -> Result<bool> {
        Ok(test_bit(self.fields()?.access, NFC_CNT_PWD_PROT_BIT))
    }

    pub fn auth_limit(&self) -> Result<AuthLimit> {
        Ok(AuthLimit::from_bits(get_field(
            self.fields()?.access,
            0,
            AUTHLIM_WIDTH,
        )))
    }

    /// AUTH0 at or below the tag's last page means some page needs the
    /// password. Beyond it protection is effectively off.
    pub fn is_auth_protected(&self, last_page: u16) -> Result<bool> {
        Ok(u16::from(self.fields()?.auth0) <= last_page)
    }

    // --- mutators ---

    pub fn set_auth0(&mut self, page: u8) -> Result<()> {
        self.fields_mut()?.auth0 = page;
        Ok(())
    }

    pub fn disable_authentication(&mut self) -> Result<()> {
        self.set_auth0(AUTH0_DISABLED)
    }

    pub fn set_protection(&mut self, mode: ProtectionMode) -> Result<()> {
        let f = self.fields_mut()?;
        f.access = with_bit(f.access, PROT_BIT, mode == ProtectionMode::ReadWrite);
        Ok(())
    }

    pub fn set_nfc_counter_enabled(&mut self, enabled: bool) -> Result<()> {
        let f = self.fields_mut()?;
        f.access = with_bit(f.access, NFC_CNT_EN_BIT, enabled);
        Ok(())
    }

    pub fn set_nfc_counter_password_protected(&mut self, protected: bool) -> Result<()> {
        let f = self.fields_mut()?;
        f.access = with_bit(f.access, NFC_CNT_PWD_PROT_BIT, protected);
        Ok(())
    }

    pub fn set_auth_limit(&mut self, limit: AuthLimit) -> Result<()> {
        let f = self.fields_mut()?;
        f.access = with_field(f.access, 0, AUTHLIM_WIDTH, limit.bits());
        Ok(())
    }

    /// Configure ASCII mirroring.
    ///
    /// `offset` is the start byte within `start_page`. The whole mirrored
    /// text must fit in user memory, i.e. end at or before
    /// `last_user_page`. `MirrorSource::None` clears mirroring and resets
    /// page and offset to 0; the other arguments are ignored then.
    pub fn set_ascii_mirroring(
        &mut self,
        source: MirrorSource,
        offset: u8,
        start_page: u16,
        last_user_page: u16,
    ) -> Result<()> {
        let f = self.fields_mut()?;

        if source == MirrorSource::None {
            f.mirror = with_bit(f.mirror, MIRROR_UID_BIT, false);
            f.mirror = with_bit(f.mirror, MIRROR_COUNTER_BIT, false);
            f.mirror = with_field(f.mirror, MIRROR_BYTE_SHIFT, 2, 0);
            f.mirror_page = 0;
            return Ok(());
        }

        if offset > 3 {
            return Err(Error::InvalidArgument(format!(
                "mirror byte offset must be 0..=3, got {}",
                offset
            )));
        }
        if start_page < FIRST_USER_PAGE {
            return Err(Error::InvalidArgument(format!(
                "mirror page must be at least {}, got {}",
                FIRST_USER_PAGE, start_page
            )));
        }
        let start = usize::from(start_page) * BYTES_PER_PAGE + usize::from(offset);
        let end = start + source.mirrored_len();
        let limit = (usize::from(last_user_page) + 1) * BYTES_PER_PAGE;
        if end > limit || start_page > u16::from(u8::MAX) {
            return Err(Error::InvalidArgument(format!(
                "{} mirror at page {} byte {} runs past last user page {}",
                source, start_page, offset, last_user_page
            )));
        }

        f.mirror = with_bit(f.mirror, MIRROR_UID_BIT, source.uid());
        f.mirror = with_bit(f.mirror, MIRROR_COUNTER_BIT, source.counter());
        f.mirror = with_field(f.mirror, MIRROR_BYTE_SHIFT, 2, offset);
        f.mirror_page = start_page as u8;
        Ok(())
    }
}
