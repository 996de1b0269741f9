// libntag/src/types.rs

use crate::Error;
use std::convert::TryFrom;

/// Tag UID - Newtype Pattern (4, 7 or 10 bytes; NTAG21x uses 7)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uid(Vec<u8>);

impl Uid {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        match bytes.len() {
            4 | 7 | 10 => Ok(Self(bytes.to_vec())),
            n => Err(Error::InvalidLength {
                expected: 7,
                actual: n,
            }),
        }
    }
}

/// Page payload (4 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageData([u8; 4]);

impl PageData {
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Copy up to four bytes, zero-filling the unused tail.
    pub fn padded(bytes: &[u8]) -> Self {
        let mut arr = [0u8; 4];
        let n = bytes.len().min(4);
        arr[..n].copy_from_slice(&bytes[..n]);
        Self(arr)
    }
}

impl TryFrom<&[u8]> for PageData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 4 {
            return Err(Error::InvalidArgument(format!(
                "page payload must be 4 bytes, got {}",
                bytes.len()
            )));
        }
        let mut arr = [0u8; 4];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// PWD (4 バイト)
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Password([u8; 4]);

impl Password {
    /// Factory default password
    pub const DEFAULT: Self = Self([0xFF, 0xFF, 0xFF, 0xFF]);

    pub const fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

// Keep secrets out of logs.
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(****)")
    }
}

/// PACK (2 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pack([u8; 2]);

impl Pack {
    /// Factory default acknowledge
    pub const DEFAULT: Self = Self([0x00, 0x00]);

    pub const fn new(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.0)
    }

    /// PACK page layout: two PACK bytes followed by two RFUI bytes.
    pub fn to_page(&self) -> PageData {
        PageData::padded(&self.0)
    }
}

impl TryFrom<&[u8]> for Pack {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 2 {
            return Err(Error::InvalidLength {
                expected: 2,
                actual: bytes.len(),
            });
        }
        Ok(Self([bytes[0], bytes[1]]))
    }
}

/// Password plus the PACK the tag is expected to answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials {
    pub password: Password,
    pub pack: Pack,
}

impl Credentials {
    pub const DEFAULT: Self = Self {
        password: Password::DEFAULT,
        pack: Pack::DEFAULT,
    };

    pub const fn new(password: Password, pack: Pack) -> Self {
        Self { password, pack }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// ATQA as reported by the reader (LSB first, 2 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Atqa([u8; 2]);

impl Atqa {
    pub const fn new(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }
}

/// SAK (1 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sak(u8);

impl Sak {
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}
