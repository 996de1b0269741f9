// libntag/src/protocol/responses/counter.rs

use crate::constants::COUNTER_LEN;
use crate::protocol::parser;
use crate::Result;

/// Decode a READ_CNT response (3 バイト, little endian).
pub fn decode_counter(data: &[u8]) -> Result<[u8; COUNTER_LEN]> {
    parser::reject_nak(data)?;
    parser::ensure_exact_len(data, COUNTER_LEN)?;
    parser::array_at(data, 0)
}

/// Interpret a 24-bit little-endian counter.
pub fn counter_value(raw: &[u8; COUNTER_LEN]) -> u32 {
    u32::from(raw[0]) | (u32::from(raw[1]) << 8) | (u32::from(raw[2]) << 16)
}
