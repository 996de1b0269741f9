// libntag/src/signature/mod.rs
//! Originality signature check (ECDSA over secp128r1, message = UID, no
//! hash).

use std::fmt;

use log::{debug, warn};
use openssl::bn::{BigNum, BigNumContext};
use openssl::ec::{EcGroup, EcKey, PointConversionForm};
use openssl::ecdsa::EcdsaSig;
use openssl::error::ErrorStack;
use openssl::nid::Nid;
use openssl::pkey::Public;

use crate::constants::SIGNATURE_LEN;
use crate::{Error, Result};

/// Size of r, s and each point coordinate on secp128r1
pub const FIELD_LEN: usize = 16;

/// NXP public key for NTAG21x / Ultralight EV1 originality signatures
/// (uncompressed SEC1).
pub const NXP_PUBLIC_KEY: [u8; 1 + 2 * FIELD_LEN] = [
    0x04, 0x49, 0x4E, 0x1A, 0x38, 0x6D, 0x3D, 0x3C, 0xFE, 0x3D, 0xC1, 0x0E, 0x5D, 0xE6, 0x8A,
    0x49, 0x9B, 0x1C, 0x20, 0x2D, 0xB5, 0xB1, 0x32, 0x39, 0x3E, 0x89, 0xED, 0x19, 0xFE, 0x5B,
    0xE8, 0xBC, 0x61,
];

fn crypto(e: ErrorStack) -> Error {
    Error::CryptoVerificationFailed(e.to_string())
}

fn secp128r1() -> Result<EcGroup> {
    EcGroup::from_curve_name(Nid::SECP128R1).map_err(crypto)
}

/// Raw READ_SIG output: r ‖ s, both 16-byte big endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OriginalitySignature([u8; SIGNATURE_LEN]);

impl OriginalitySignature {
    pub const fn from_bytes(bytes: [u8; SIGNATURE_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.0
    }

    pub fn r(&self) -> &[u8] {
        &self.0[..FIELD_LEN]
    }

    pub fn s(&self) -> &[u8] {
        &self.0[FIELD_LEN..]
    }

    fn to_ecdsa(&self) -> Result<EcdsaSig> {
        let r = BigNum::from_slice(self.r()).map_err(crypto)?;
        let s = BigNum::from_slice(self.s()).map_err(crypto)?;
        EcdsaSig::from_private_components(r, s).map_err(crypto)
    }

    /// DER `SEQUENCE { r, s }`, the form other ECDSA tooling expects.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        self.to_ecdsa()?.to_der().map_err(crypto)
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.0)
    }
}

impl TryFrom<&[u8]> for OriginalitySignature {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> std::result::Result<Self, Self::Error> {
        let arr: [u8; SIGNATURE_LEN] = crate::protocol::parser::array_at(bytes, 0)?;
        crate::protocol::parser::ensure_exact_len(bytes, SIGNATURE_LEN)?;
        Ok(Self(arr))
    }
}

/// A secp128r1 public key whose point has been checked to lie on the curve.
#[derive(Clone)]
pub struct PublicKey(EcKey<Public>);

impl PublicKey {
    /// Parse an uncompressed SEC1 point (0x04 ‖ X ‖ Y) and check that it
    /// lies on secp128r1.
    pub fn from_sec1(bytes: &[u8]) -> Result<Self> {
        crate::protocol::parser::ensure_exact_len(bytes, 1 + 2 * FIELD_LEN)?;
        if bytes[0] != 0x04 {
            return Err(Error::InvalidArgument(format!(
                "only uncompressed points are supported, got prefix {:#04x}",
                bytes[0]
            )));
        }
        let group = secp128r1()?;
        let x = BigNum::from_slice(&bytes[1..1 + FIELD_LEN]).map_err(crypto)?;
        let y = BigNum::from_slice(&bytes[1 + FIELD_LEN..]).map_err(crypto)?;
        let key = EcKey::from_public_key_affine_coordinates(&group, &x, &y)
            .map_err(|e| Error::InvalidArgument(format!("point is not on secp128r1: {}", e)))?;
        Ok(Self(key))
    }

    /// The vendor key.
    pub fn nxp() -> Result<Self> {
        Self::from_sec1(&NXP_PUBLIC_KEY)
    }

    /// Uncompressed SEC1 encoding of the point.
    pub fn to_sec1(&self) -> Result<Vec<u8>> {
        let mut ctx = BigNumContext::new().map_err(crypto)?;
        self.0
            .public_key()
            .to_bytes(self.0.group(), PointConversionForm::UNCOMPRESSED, &mut ctx)
            .map_err(crypto)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_sec1() {
            Ok(bytes) => write!(f, "PublicKey({})", crate::utils::bytes_to_hex(&bytes)),
            Err(_) => f.write_str("PublicKey(?)"),
        }
    }
}

impl From<PublicKey> for EcKey<Public> {
    fn from(key: PublicKey) -> Self {
        key.0
    }
}

/// Raw ECDSA check. OpenSSL truncates the message to the order's bit
/// length and does no hashing. `Ok(false)` is an honest mismatch, `Err`
/// means the check itself could not run.
fn try_verify(key: &PublicKey, message: &[u8], sig: &OriginalitySignature) -> Result<bool> {
    sig.to_ecdsa()?.verify(message, &key.0).map_err(crypto)
}

/// Verify `signature` over `message` with `key`. Never fails: anything
/// that stops the check is logged and reported as `false`.
pub fn verify_with_key(key: &PublicKey, message: &[u8], signature: &OriginalitySignature) -> bool {
    match try_verify(key, message, signature) {
        Ok(true) => true,
        Ok(false) => {
            debug!(
                "originality signature does not match message {}",
                crate::utils::bytes_to_hex(message)
            );
            false
        }
        Err(e) => {
            warn!("originality signature check could not run: {}", e);
            false
        }
    }
}

/// Verify a tag's originality signature against the NXP key.
pub fn verify_originality(uid: &[u8], signature: &OriginalitySignature) -> bool {
    match PublicKey::nxp() {
        Ok(key) => verify_with_key(&key, uid, signature),
        Err(e) => {
            warn!("vendor key unavailable: {}", e);
            false
        }
    }
}
