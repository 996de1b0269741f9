// libntag/src/protocol/commands/mod.rs

pub mod auth;
pub mod counter;
pub mod read;
pub mod version;
pub mod write;

pub use auth::{encode_pwd_auth, encode_read_signature};
pub use counter::{encode_increase_counter, encode_read_counter};
pub use read::{encode_fast_read, encode_read};
pub use version::{encode_get_more_data, encode_get_version};
pub use write::encode_write;

use crate::constants::*;
use crate::protocol::parser;
use crate::types::{PageData, Password};
use crate::{Error, Result};

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
///
/// Page and counter indices are wider than the wire byte; encoding masks
/// them to their low 8 bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ReadPage { page: u16 },
    FastRead { start: u16, end: u16 },
    /// `data` must be exactly 4 bytes; anything else fails to encode.
    WritePage { page: u16, data: Vec<u8> },
    GetVersion,
    GetMoreData,
    ReadCounter { counter: u16 },
    IncreaseCounter { counter: u16 },
    ReadSignature,
    PasswordAuthenticate { password: Password },
}

impl Command {
    /// Return the opcode sent as the first wire byte.
    pub fn opcode(&self) -> u8 {
        match self {
            Self::ReadPage { .. } => CMD_READ,
            Self::FastRead { .. } => CMD_FAST_READ,
            Self::WritePage { .. } => CMD_WRITE,
            Self::GetVersion => CMD_GET_VERSION,
            Self::GetMoreData => CMD_GET_MORE_DATA,
            Self::ReadCounter { .. } => CMD_READ_CNT,
            Self::IncreaseCounter { .. } => CMD_INCR_CNT,
            Self::ReadSignature => CMD_READ_SIG,
            Self::PasswordAuthenticate { .. } => CMD_PWD_AUTH,
        }
    }

    /// Fixed wire length of the encoded command.
    pub fn wire_len(&self) -> usize {
        match self {
            Self::GetVersion | Self::GetMoreData => 1,
            Self::ReadPage { .. } | Self::ReadCounter { .. } | Self::ReadSignature => 2,
            Self::FastRead { .. } => 3,
            Self::PasswordAuthenticate { .. } => 5,
            Self::WritePage { .. } | Self::IncreaseCounter { .. } => 6,
        }
    }

    /// Encode the command into its wire bytes (opcode + params).
    pub fn encode(&self) -> Result<Vec<u8>> {
        match self {
            Self::ReadPage { page } => Ok(encode_read(*page)),
            Self::FastRead { start, end } => encode_fast_read(*start, *end),
            Self::WritePage { page, data } => {
                let data = PageData::try_from(&data[..])?;
                Ok(encode_write(*page, data))
            }
            Self::GetVersion => Ok(encode_get_version()),
            Self::GetMoreData => Ok(encode_get_more_data()),
            Self::ReadCounter { counter } => Ok(encode_read_counter(*counter)),
            Self::IncreaseCounter { counter } => Ok(encode_increase_counter(*counter)),
            Self::ReadSignature => Ok(encode_read_signature()),
            Self::PasswordAuthenticate { password } => Ok(encode_pwd_auth(password)),
        }
    }

    /// Parse wire bytes back into a Command. This is what a tag does with
    /// the bytes; the crate uses it for simulation and diagnostics.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let opcode = parser::byte_at(bytes, 0)?;
        let cmd = match opcode {
            CMD_READ => {
                parser::ensure_exact_len(bytes, 2)?;
                Self::ReadPage {
                    page: bytes[1] as u16,
                }
            }
            CMD_FAST_READ => {
                parser::ensure_exact_len(bytes, 3)?;
                Self::FastRead {
                    start: bytes[1] as u16,
                    end: bytes[2] as u16,
                }
            }
            CMD_WRITE => {
                parser::ensure_exact_len(bytes, 6)?;
                Self::WritePage {
                    page: bytes[1] as u16,
                    data: bytes[2..6].to_vec(),
                }
            }
            CMD_GET_VERSION => {
                parser::ensure_exact_len(bytes, 1)?;
                Self::GetVersion
            }
            CMD_GET_MORE_DATA => {
                parser::ensure_exact_len(bytes, 1)?;
                Self::GetMoreData
            }
            CMD_READ_CNT => {
                parser::ensure_exact_len(bytes, 2)?;
                Self::ReadCounter {
                    counter: bytes[1] as u16,
                }
            }
            CMD_INCR_CNT => {
                parser::ensure_exact_len(bytes, 6)?;
                Self::IncreaseCounter {
                    counter: bytes[1] as u16,
                }
            }
            CMD_READ_SIG => {
                parser::ensure_exact_len(bytes, 2)?;
                Self::ReadSignature
            }
            CMD_PWD_AUTH => {
                parser::ensure_exact_len(bytes, 5)?;
                let pwd: [u8; 4] = parser::array_at(bytes, 1)?;
                Self::PasswordAuthenticate {
                    password: Password::new(pwd),
                }
            }
            other => {
                return Err(Error::UnexpectedResponse(format!(
                    "unknown opcode {:#04x}",
                    other
                )));
            }
        };
        Ok(cmd)
    }
}
