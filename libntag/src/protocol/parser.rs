// libntag/src/protocol/parser.rs

use crate::constants::ACK;
use crate::protocol::NakKind;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Ensure the slice has exactly `len` bytes.
pub fn ensure_exact_len(data: &[u8], len: usize) -> Result<()> {
    if data.len() != len {
        return Err(Error::InvalidLength {
            expected: len,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Copy a fixed-size array out of `data` starting at `start`.
pub fn array_at<const N: usize>(data: &[u8], start: usize) -> Result<[u8; N]> {
    ensure_len(data, start + N)?;
    let mut arr = [0u8; N];
    arr.copy_from_slice(&data[start..start + N]);
    Ok(arr)
}

/// A data-returning command answered with a single non-ACK byte was
/// refused by the tag. Surface that as a classified NAK before any length
/// check so the caller sees the real reason.
pub fn reject_nak(data: &[u8]) -> Result<()> {
    if let [b] = data {
        if *b != ACK {
            return Err(Error::ProtocolNak(NakKind::from_byte(*b)));
        }
    }
    Ok(())
}
