// libntag/src/protocol/responses/version.rs

use crate::constants::CONTINUATION_MARKER;
use crate::protocol::parser;
use crate::Result;

/// One round of GET_VERSION / GET_MORE_DATA output.
///
/// When the first byte is the continuation marker the marker is stripped
/// and `more` is set. A single-byte reply that is not the marker is a NAK.
pub fn decode_version_chunk(data: &[u8]) -> Result<(bool, Vec<u8>)> {
    parser::ensure_len(data, 1)?;
    if data[0] == CONTINUATION_MARKER {
        return Ok((true, data[1..].to_vec()));
    }
    parser::reject_nak(data)?;
    Ok((false, data.to_vec()))
}

/// One GET_MORE_DATA round. It is only sent after the tag asked for
/// continuation, so every byte after an optional marker is payload, even a
/// lone final byte.
pub fn decode_more_data_chunk(data: &[u8]) -> Result<(bool, Vec<u8>)> {
    parser::ensure_len(data, 1)?;
    match data.split_first() {
        Some((&CONTINUATION_MARKER, rest)) => Ok((true, rest.to_vec())),
        _ => Ok((false, data.to_vec())),
    }
}
