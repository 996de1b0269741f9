// libntag/src/protocol/commands/counter.rs

use crate::constants::{CMD_INCR_CNT, CMD_READ_CNT};

/// Encode READ_CNT (0x39). NTAG21x exposes its NFC counter at index 2,
/// Ultralight EV1 has counters 0..=2.
pub fn encode_read_counter(counter: u16) -> Vec<u8> {
    vec![CMD_READ_CNT, (counter & 0xff) as u8]
}

/// Encode INCR_CNT (0xA5) with an increment of one. The increment is a
/// 24-bit little-endian value followed by a byte the tag ignores.
pub fn encode_increase_counter(counter: u16) -> Vec<u8> {
    vec![CMD_INCR_CNT, (counter & 0xff) as u8, 0x01, 0x00, 0x00, 0x00]
}
