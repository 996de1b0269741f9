// libntag/src/operations/version.rs

use log::debug;

use crate::constants::VERSION_MIN_LEN;
use crate::identify::describe_version_rejection;
use crate::operations::{execute, unexpected};
use crate::protocol::{Command, Response};
use crate::transport::Transceiver;
use crate::utils::bytes_to_hex;
use crate::{Error, Result};

/// Upper bound on GET_MORE_DATA rounds; real tags need at most three.
pub const MAX_VERSION_ROUNDS: usize = 8;

/// GET_VERSION with continuation. Markers are stripped and rounds are
/// concatenated in order. Any failure aborts without a partial result.
pub fn get_version(transceiver: &mut dyn Transceiver) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut cmd = Command::GetVersion;

    for _ in 0..MAX_VERSION_ROUNDS {
        let (more, data) = match execute(transceiver, &cmd)? {
            Response::Version { more, data } => (more, data),
            other => return Err(unexpected(&cmd, &other)),
        };
        out.extend_from_slice(&data);
        if !more {
            if out.len() < VERSION_MIN_LEN {
                debug!(
                    "short version data {}: {}",
                    bytes_to_hex(&out),
                    describe_version_rejection(&out)
                );
                return Err(Error::InvalidLength {
                    expected: VERSION_MIN_LEN,
                    actual: out.len(),
                });
            }
            return Ok(out);
        }
        cmd = Command::GetMoreData;
    }

    Err(Error::UnexpectedResponse(format!(
        "version data still continuing after {} rounds",
        MAX_VERSION_ROUNDS
    )))
}
