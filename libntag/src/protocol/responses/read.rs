// libntag/src/protocol/responses/read.rs

use crate::constants::{BYTES_PER_PAGE, READ_RESPONSE_LEN};
use crate::protocol::parser;
use crate::{Error, Result};

/// Decode a READ response: always 16 bytes (4 pages), even when the
/// addressed page is near the end of memory and the tag rolls over.
pub fn decode_read(data: &[u8]) -> Result<Vec<u8>> {
    parser::reject_nak(data)?;
    parser::ensure_exact_len(data, READ_RESPONSE_LEN)?;
    Ok(data.to_vec())
}

/// Number of bytes a FAST_READ over `start..=end` must return. Pages are
/// masked to one byte, as on the wire.
pub fn fast_read_len(start: u16, end: u16) -> Result<usize> {
    let (start, end) = (start & 0xff, end & 0xff);
    if start > end {
        return Err(Error::InvalidArgument(format!(
            "fast read start page {} is after end page {}",
            start, end
        )));
    }
    Ok((end - start + 1) as usize * BYTES_PER_PAGE)
}

/// Decode a FAST_READ response covering the closed range `start..=end`.
pub fn decode_fast_read(start: u16, end: u16, data: &[u8]) -> Result<Vec<u8>> {
    parser::reject_nak(data)?;
    let expected = fast_read_len(start, end)?;
    parser::ensure_exact_len(data, expected)?;
    Ok(data.to_vec())
}
