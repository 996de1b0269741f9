// libntag/src/protocol/commands/version.rs

use crate::constants::{CMD_GET_MORE_DATA, CMD_GET_VERSION};

/// Encode GET_VERSION (0x60)
pub fn encode_get_version() -> Vec<u8> {
    vec![CMD_GET_VERSION]
}

/// Encode the continuation request (0xAF) sent while the tag keeps
/// prefixing its answers with the continuation marker.
pub fn encode_get_more_data() -> Vec<u8> {
    vec![CMD_GET_MORE_DATA]
}
