// libntag/src/protocol/mod.rs

pub mod codec;
pub mod commands;
pub mod nak;
pub mod parser;
pub mod responses;

pub use codec::{decode_response, encode_command};
pub use commands::*;
pub use nak::{decode_write_ack, describe_ack, NakKind};
pub use responses::*;
