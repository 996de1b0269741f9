// libntag/src/protocol/nak.rs

use derive_more::Display;

use crate::constants::{
    ACK, NAK_AUTH_COUNTER_OVERFLOW, NAK_EEPROM_WRITE_ERROR, NAK_INVALID_ARGUMENT,
    NAK_PARITY_CRC_ERROR, NAK_TRANSPORT_FAILURE,
};

/// Classified negative acknowledge.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NakKind {
    #[display(fmt = "NAK invalid argument")]
    InvalidArgument,
    #[display(fmt = "NAK parity or CRC error")]
    ParityOrCrc,
    #[display(fmt = "NAK invalid authentication counter overflow")]
    AuthCounterOverflow,
    #[display(fmt = "NAK EEPROM write error")]
    EepromWrite,
    #[display(fmt = "NAK transport failure")]
    TransportFailure,
    #[display(fmt = "NAK unknown error ({:#04x})", _0)]
    Unknown(u8),
}

impl NakKind {
    /// Classify any byte other than ACK. Total over 0..=255; ACK itself
    /// lands in `Unknown` so callers must check for ACK first.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            NAK_INVALID_ARGUMENT => Self::InvalidArgument,
            NAK_PARITY_CRC_ERROR => Self::ParityOrCrc,
            NAK_AUTH_COUNTER_OVERFLOW => Self::AuthCounterOverflow,
            NAK_EEPROM_WRITE_ERROR => Self::EepromWrite,
            NAK_TRANSPORT_FAILURE => Self::TransportFailure,
            other => Self::Unknown(other),
        }
    }

    /// Wire value of this NAK.
    pub fn code(&self) -> u8 {
        match self {
            Self::InvalidArgument => NAK_INVALID_ARGUMENT,
            Self::ParityOrCrc => NAK_PARITY_CRC_ERROR,
            Self::AuthCounterOverflow => NAK_AUTH_COUNTER_OVERFLOW,
            Self::EepromWrite => NAK_EEPROM_WRITE_ERROR,
            Self::TransportFailure => NAK_TRANSPORT_FAILURE,
            Self::Unknown(b) => *b,
        }
    }
}

/// Interpret the single acknowledge byte returned for WRITE / INCR_CNT.
pub fn decode_write_ack(byte: u8) -> Result<(), NakKind> {
    if byte == ACK {
        Ok(())
    } else {
        Err(NakKind::from_byte(byte))
    }
}

/// Human readable form of an acknowledge byte, ACK included.
pub fn describe_ack(byte: u8) -> String {
    match decode_write_ack(byte) {
        Ok(()) => "ACK".to_string(),
        Err(kind) => kind.to_string(),
    }
}
