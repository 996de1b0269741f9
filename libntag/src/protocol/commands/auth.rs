// libntag/src/protocol/commands/auth.rs

use crate::constants::{CMD_PWD_AUTH, CMD_READ_SIG};
use crate::types::Password;

/// Encode PWD_AUTH (0x1B)
pub fn encode_pwd_auth(password: &Password) -> Vec<u8> {
    let mut buf = Vec::with_capacity(5);
    buf.push(CMD_PWD_AUTH);
    buf.extend_from_slice(password.as_bytes());
    buf
}

/// Encode READ_SIG (0x3C). The address byte is RFU and fixed to zero.
pub fn encode_read_signature() -> Vec<u8> {
    vec![CMD_READ_SIG, 0x00]
}
