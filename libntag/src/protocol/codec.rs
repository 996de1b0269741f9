// libntag/src/protocol/codec.rs
//! Pure encode/decode entry points. Nothing here performs I/O.

use crate::Result;

use super::commands::Command;
use super::responses::Response;

/// Encode a Command into the exact bytes handed to the transceiver.
pub fn encode_command(cmd: &Command) -> Result<Vec<u8>> {
    cmd.encode()
}

/// Decode the raw bytes a transceiver returned for `cmd`.
pub fn decode_response(cmd: &Command, raw: &[u8]) -> Result<Response> {
    Response::decode(cmd, raw)
}
