// libntag/src/protocol/responses/mod.rs

pub mod auth;
pub mod counter;
pub mod read;
pub mod version;
pub mod write;

pub use auth::{decode_pack, decode_signature};
pub use counter::{counter_value, decode_counter};
pub use read::{decode_fast_read, decode_read, fast_read_len};
pub use version::{decode_more_data_chunk, decode_version_chunk};
pub use write::decode_ack;

use crate::constants::{COUNTER_LEN, SIGNATURE_LEN};
use crate::protocol::commands::Command;
use crate::types::Pack;
use crate::Result;

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// WRITE / INCR_CNT acknowledged
    Ack,
    /// Raw page bytes from READ or FAST_READ
    Pages(Vec<u8>),
    /// One version round; `more` means the tag set the continuation marker
    /// (already stripped from `data`)
    Version { more: bool, data: Vec<u8> },
    Counter([u8; COUNTER_LEN]),
    Signature([u8; SIGNATURE_LEN]),
    Pack(Pack),
}

impl Response {
    /// Decode a raw response for the command that produced it.
    ///
    /// Lengths are checked exactly per command. A single non-ACK byte in
    /// place of a data response is reported as `Error::ProtocolNak`.
    pub fn decode(cmd: &Command, data: &[u8]) -> Result<Self> {
        match cmd {
            Command::ReadPage { .. } => Ok(Self::Pages(decode_read(data)?)),
            Command::FastRead { start, end } => {
                Ok(Self::Pages(decode_fast_read(*start, *end, data)?))
            }
            Command::WritePage { .. } | Command::IncreaseCounter { .. } => {
                decode_ack(data)?;
                Ok(Self::Ack)
            }
            Command::GetVersion => {
                let (more, data) = decode_version_chunk(data)?;
                Ok(Self::Version { more, data })
            }
            Command::GetMoreData => {
                let (more, data) = decode_more_data_chunk(data)?;
                Ok(Self::Version { more, data })
            }
            Command::ReadCounter { .. } => Ok(Self::Counter(decode_counter(data)?)),
            Command::ReadSignature => Ok(Self::Signature(decode_signature(data)?)),
            Command::PasswordAuthenticate { .. } => Ok(Self::Pack(decode_pack(data)?)),
        }
    }

    /// Counter value when this is a counter response.
    pub fn counter(&self) -> Option<u32> {
        match self {
            Self::Counter(raw) => Some(counter_value(raw)),
            _ => None,
        }
    }

    /// Short name used in error messages when a caller gets the wrong variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Ack => "ack",
            Self::Pages(_) => "pages",
            Self::Version { .. } => "version",
            Self::Counter(_) => "counter",
            Self::Signature(_) => "signature",
            Self::Pack(_) => "pack",
        }
    }
}
