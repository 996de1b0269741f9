//! Hex rendering for logs, reports and test fixtures.

use std::fmt::Write;

use crate::{Error, Result};

/// `&[0x04, 0xe1]` -> `"04e1"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        let _ = write!(s, "{:02x}", b);
        s
    })
}

/// `&[0x04, 0xe1]` -> `"04 e1"`, used for trace output of exchanges.
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse hex digits, ignoring whitespace so fixtures can be grouped.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let digits: Vec<u8> = s.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err(Error::InvalidArgument(format!(
            "odd number of hex digits in {:?}",
            s
        )));
    }
    digits
        .chunks(2)
        .map(|pair| {
            let text = std::str::from_utf8(pair).unwrap_or("??");
            u8::from_str_radix(text, 16)
                .map_err(|_| Error::InvalidArgument(format!("bad hex pair {:?}", text)))
        })
        .collect()
}
