// libntag/src/protocol/responses/write.rs

use crate::protocol::nak::decode_write_ack;
use crate::protocol::parser;
use crate::{Error, Result};

/// Decode the acknowledge returned by WRITE and INCR_CNT. Exactly one
/// byte is expected; only ACK counts as success.
pub fn decode_ack(data: &[u8]) -> Result<()> {
    parser::ensure_exact_len(data, 1)?;
    decode_write_ack(data[0]).map_err(Error::ProtocolNak)
}
