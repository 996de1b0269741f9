// libntag/src/operations/mod.rs
//! Multi-exchange operations built from codec calls. Every function takes
//! the transceiver explicitly; the session handle delegates here.

pub mod auth;
pub mod configuration;
pub mod counter;
pub mod read;
pub mod signature;
pub mod version;
pub mod write;

pub use auth::{authenticate, PasswordChange, PasswordChangeState};
pub use configuration::{
    config_page_of, read_configuration, require_ntag21x, update_configuration, write_configuration,
};
pub use counter::{increase_counter, read_counter, read_counter_int};
pub use read::{fast_read, fast_read_window, read_full_memory, read_page, read_range};
pub use signature::{read_signature, verify_tag};
pub use version::get_version;
pub use write::{write_bulk, write_page};

use log::{trace, warn};

use crate::protocol::{codec, Command, Response};
use crate::transport::Transceiver;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// One command/response exchange: encode, transceive, decode.
pub fn execute(transceiver: &mut dyn Transceiver, cmd: &Command) -> Result<Response> {
    let bytes = codec::encode_command(cmd)?;
    trace!(">> {}", bytes_to_hex_spaced(&bytes));

    let raw = transceiver.transceive(&bytes).map_err(|e| {
        warn!("exchange {:#04x} failed: {}", cmd.opcode(), e);
        Error::Transport(e)
    })?;
    trace!("<< {}", bytes_to_hex_spaced(&raw));

    codec::decode_response(cmd, &raw).map_err(|e| {
        if let Error::ProtocolNak(kind) = &e {
            warn!("command {:#04x} refused: {}", cmd.opcode(), kind);
        }
        e
    })
}

pub(crate) fn unexpected(cmd: &Command, resp: &Response) -> Error {
    Error::UnexpectedResponse(format!(
        "{} response to command {:#04x}",
        resp.kind(),
        cmd.opcode()
    ))
}
