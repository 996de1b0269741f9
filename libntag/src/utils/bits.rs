//! Bit helpers for the packed configuration bytes.

/// True when bit `n` (0 = LSB) of `byte` is set.
pub fn test_bit(byte: u8, n: u8) -> bool {
    byte & (1 << n) != 0
}

/// Return `byte` with bit `n` forced to `on`.
pub fn with_bit(byte: u8, n: u8, on: bool) -> u8 {
    if on { byte | (1 << n) } else { byte & !(1 << n) }
}

/// Extract `width` bits starting at `shift`.
pub fn get_field(byte: u8, shift: u8, width: u8) -> u8 {
    (byte >> shift) & mask(width)
}

/// Replace `width` bits starting at `shift` with the low bits of `value`.
pub fn with_field(byte: u8, shift: u8, width: u8, value: u8) -> u8 {
    let m = mask(width) << shift;
    (byte & !m) | ((value << shift) & m)
}

fn mask(width: u8) -> u8 {
    ((1u16 << width) - 1) as u8
}
