// libntag/src/constants.rs
//! Common protocol constants used across the crate

/// READ: returns 16 bytes (4 pages) starting at the addressed page
pub const CMD_READ: u8 = 0x30;
/// FAST_READ: returns every page in a closed start..=end range
pub const CMD_FAST_READ: u8 = 0x3A;
/// WRITE: writes one 4-byte page
pub const CMD_WRITE: u8 = 0xA2;
pub const CMD_GET_VERSION: u8 = 0x60;
/// Also the continuation marker the tag prefixes to incomplete version data
pub const CMD_GET_MORE_DATA: u8 = 0xAF;
pub const CMD_READ_CNT: u8 = 0x39;
pub const CMD_INCR_CNT: u8 = 0xA5;
pub const CMD_READ_SIG: u8 = 0x3C;
pub const CMD_PWD_AUTH: u8 = 0x1B;

/// Leading byte of a version response that has more data waiting
pub const CONTINUATION_MARKER: u8 = 0xAF;

/// Acknowledge returned by the tag for WRITE and INCR_CNT
pub const ACK: u8 = 0x0A;

/// NAK codes defined for NTAG21x / Ultralight EV1
pub const NAK_INVALID_ARGUMENT: u8 = 0x00;
pub const NAK_PARITY_CRC_ERROR: u8 = 0x01;
pub const NAK_AUTH_COUNTER_OVERFLOW: u8 = 0x04;
pub const NAK_EEPROM_WRITE_ERROR: u8 = 0x05;
/// Host-side sentinel for a failed exchange, never sent by a tag
pub const NAK_TRANSPORT_FAILURE: u8 = 0xFF;

/// Bytes per page on every supported tag
pub const BYTES_PER_PAGE: usize = 4;

/// READ always returns this many bytes
pub const READ_RESPONSE_LEN: usize = 16;

/// Length of a counter value (24-bit, little endian)
pub const COUNTER_LEN: usize = 3;

/// Length of the originality signature
pub const SIGNATURE_LEN: usize = 32;

/// Length of the PACK returned by PWD_AUTH
pub const PACK_LEN: usize = 2;

/// Minimum assembled version payload
pub const VERSION_MIN_LEN: usize = 8;

/// Bytes per exchange kept free for the link layer (CRC) when sizing
/// FAST_READ windows
pub const FAST_READ_OVERHEAD: usize = 2;

/// Largest payload accepted by a bulk write (10 pages)
pub const MAX_BULK_WRITE_LEN: usize = 40;

/// First page of user memory on every supported tag
pub const FIRST_USER_PAGE: u16 = 4;

/// AUTH0 value that disables password protection on every subtype
pub const AUTH0_DISABLED: u8 = 0xFF;

/// Mirrored text lengths: UID as hex ASCII, counter as hex ASCII and both
/// joined by the `x` separator
pub const MIRROR_UID_LEN: usize = 14;
pub const MIRROR_COUNTER_LEN: usize = 6;
pub const MIRROR_BOTH_LEN: usize = 21;

/// Sentinel returned by integer counter reads when no value is available
pub const COUNTER_UNAVAILABLE: i32 = -1;
