// fixtures.rs: commonly used UIDs, keys and signatures

use libntag::signature::{OriginalitySignature, PublicKey};

pub const UID: [u8; 7] = [0x04, 0xE1, 0x0C, 0x9A, 0x8B, 0x6C, 0x80];
pub const OTHER_UID: [u8; 7] = [0x04, 0xC2, 0x6B, 0xE2, 0xFF, 0x3C, 0x80];

/// Uncompressed secp128r1 key generated for these tests (private key
/// 0x0123456789abcdef0fedcba987654321).
pub const TEST_PUBLIC_KEY: &str =
    "04 04c07d662784d53bfd6d7d6be2347e26 5958fa91cf463ef21c274892ece1bdf4";

/// Valid signatures over `UID` with the test key (two nonces)
pub const UID_SIGNATURES: [&str; 2] = [
    "7feb2d17f8f9556ec9772dc6cac697176481ff76b95b9e7b23e9a0a469a84c68",
    "e961938590a659293c2a590ac083d716985dc7d40e772efc08353f52bc8f3e9b",
];

/// Valid signatures over `OTHER_UID` with the test key
pub const OTHER_UID_SIGNATURES: [&str; 2] = [
    "7feb2d17f8f9556ec9772dc6cac69717a05f15a5f127ac7130563bafd94bd6de",
    "e961938590a659293c2a590ac083d7162424bac0dee378ba96e05ce05b8ed57b",
];

pub fn bytes(hex_str: &str) -> Vec<u8> {
    hex::decode(hex_str.replace(' ', "")).unwrap()
}

pub fn signature(hex_str: &str) -> OriginalitySignature {
    OriginalitySignature::try_from(&bytes(hex_str)[..]).unwrap()
}

pub fn signature_array(hex_str: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&bytes(hex_str));
    out
}

pub fn test_key() -> PublicKey {
    PublicKey::from_sec1(&bytes(TEST_PUBLIC_KEY)).unwrap()
}
