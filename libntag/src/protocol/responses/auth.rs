// libntag/src/protocol/responses/auth.rs

use crate::constants::{PACK_LEN, SIGNATURE_LEN};
use crate::protocol::parser;
use crate::types::Pack;
use crate::Result;

/// Decode the PACK returned by a successful PWD_AUTH.
pub fn decode_pack(data: &[u8]) -> Result<Pack> {
    parser::reject_nak(data)?;
    parser::ensure_exact_len(data, PACK_LEN)?;
    Ok(Pack::new(parser::array_at(data, 0)?))
}

/// Decode a READ_SIG response (32 バイト).
pub fn decode_signature(data: &[u8]) -> Result<[u8; SIGNATURE_LEN]> {
    parser::reject_nak(data)?;
    parser::ensure_exact_len(data, SIGNATURE_LEN)?;
    parser::array_at(data, 0)
}
