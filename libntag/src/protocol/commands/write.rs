// libntag/src/protocol/commands/write.rs

use crate::constants::CMD_WRITE;
use crate::types::PageData;

/// Encode WRITE (0xA2)
/// Layout: command_code(1) + page(1) + data(4)
pub fn encode_write(page: u16, data: PageData) -> Vec<u8> {
    let mut buf = Vec::with_capacity(6);
    buf.push(CMD_WRITE);
    buf.push((page & 0xff) as u8);
    buf.extend_from_slice(data.as_bytes());
    buf
}
