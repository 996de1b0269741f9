// libntag/src/protocol/commands/read.rs

use crate::constants::{CMD_FAST_READ, CMD_READ};
use crate::{Error, Result};

/// Encode READ (0x30). The tag answers with 4 pages starting at `page`,
/// rolling over to page 0 past the end of memory.
pub fn encode_read(page: u16) -> Vec<u8> {
    vec![CMD_READ, (page & 0xff) as u8]
}

/// Encode FAST_READ (0x3A) for the closed range `start..=end`.
pub fn encode_fast_read(start: u16, end: u16) -> Result<Vec<u8>> {
    let start = (start & 0xff) as u8;
    let end = (end & 0xff) as u8;
    if start > end {
        return Err(Error::InvalidArgument(format!(
            "fast read range {} > {}",
            start, end
        )));
    }
    Ok(vec![CMD_FAST_READ, start, end])
}
