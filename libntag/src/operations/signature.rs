// libntag/src/operations/signature.rs

use crate::operations::{execute, unexpected};
use crate::protocol::{Command, Response};
use crate::signature::{verify_originality, OriginalitySignature};
use crate::transport::Transceiver;
use crate::Result;

/// READ_SIG: the 32-byte originality signature.
pub fn read_signature(transceiver: &mut dyn Transceiver) -> Result<OriginalitySignature> {
    let cmd = Command::ReadSignature;
    match execute(transceiver, &cmd)? {
        Response::Signature(raw) => Ok(OriginalitySignature::from_bytes(raw)),
        other => Err(unexpected(&cmd, &other)),
    }
}

/// Read the signature and check it against `uid` with the vendor key.
/// Only the exchange can fail; a bad signature is `Ok(false)`.
pub fn verify_tag(transceiver: &mut dyn Transceiver, uid: &[u8]) -> Result<bool> {
    let signature = read_signature(transceiver)?;
    Ok(verify_originality(uid, &signature))
}
