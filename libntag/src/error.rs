// libntag/src/error.rs

use thiserror::Error;

use crate::operations::PasswordChangeState;
use crate::protocol::NakKind;

/// Failure reported by a [`crate::transport::Transceiver`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("tag lost")]
    TagLost,

    #[error("exchange timed out")]
    Timeout,

    #[error("link error: {0}")]
    Link(String),
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    #[error("tag rejected command: {0}")]
    ProtocolNak(NakKind),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid response length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("tag identification failed")]
    IdentificationFailed,

    #[error("authentication failed: expected PACK {expected}, got {actual}")]
    AuthenticationFailed { expected: String, actual: String },

    #[error("configuration record is invalid")]
    InvalidConfiguration,

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("signature verification error: {0}")]
    CryptoVerificationFailed(String),

    #[error("read aborted after {} bytes: {source}", .partial.len())]
    IncompleteRead {
        partial: Vec<u8>,
        #[source]
        source: Box<Error>,
    },

    #[error("password change stopped at {reached}: {source}")]
    PasswordChange {
        reached: PasswordChangeState,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Transport failures may succeed when the caller re-presents the tag.
    /// Everything else needs a different request.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Transport(_) => true,
            Error::IncompleteRead { source, .. } | Error::PasswordChange { source, .. } => {
                source.is_retryable()
            }
            _ => false,
        }
    }

    /// Bytes assembled before a multi-round read failed, if any.
    pub fn partial_data(&self) -> Option<&[u8]> {
        match self {
            Error::IncompleteRead { partial, .. } => Some(partial),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
