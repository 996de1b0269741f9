// libntag/src/identify/version.rs

use crate::constants::VERSION_MIN_LEN;
use crate::protocol::parser;
use crate::Result;

/// NXP semiconductors vendor id
pub const VENDOR_NXP: u8 = 0x04;

/// Decoded GET_VERSION payload.
///
/// NTAG21x and Ultralight EV1 answer with 8 bytes led by a fixed 0x00
/// header. DESFire-class tags answer vendor first and continue over
/// several rounds; only the hardware block at the front is decoded here.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VersionInfo {
    pub vendor_id: u8,
    pub product_type: u8,
    pub product_subtype: u8,
    pub major_version: u8,
    pub minor_version: u8,
    pub storage_size: u8,
    pub protocol_type: u8,
    raw: Vec<u8>,
}

impl VersionInfo {
    /// Parse an assembled (marker-free) version payload.
    pub fn parse(data: &[u8]) -> Result<Self> {
        parser::ensure_len(data, VERSION_MIN_LEN)?;
        let off = if data.len() == VERSION_MIN_LEN && data[0] == 0x00 {
            1
        } else {
            0
        };
        let hw: [u8; 7] = parser::array_at(data, off)?;
        Ok(Self {
            vendor_id: hw[0],
            product_type: hw[1],
            product_subtype: hw[2],
            major_version: hw[3],
            minor_version: hw[4],
            storage_size: hw[5],
            protocol_type: hw[6],
            raw: data.to_vec(),
        })
    }

    /// Bytes the version was parsed from.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn is_nxp(&self) -> bool {
        self.vendor_id == VENDOR_NXP
    }

    /// Lower bound of the storage size: 2^(code >> 1) bytes. `None` when
    /// the code does not fit a `u32`.
    pub fn storage_size_bytes(&self) -> Option<u32> {
        1u32.checked_shl(u32::from(self.storage_size >> 1))
    }

    /// Bit 0 of the storage code clear means the size is exactly
    /// `storage_size_bytes()`; set means it lies between that and the next
    /// power of two.
    pub fn storage_size_is_exact(&self) -> bool {
        self.storage_size & 0x01 == 0
    }
}
