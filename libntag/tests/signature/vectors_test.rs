#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{
    OTHER_UID, OTHER_UID_SIGNATURES, UID, UID_SIGNATURES, signature, test_key,
};
use libntag::signature::{verify_originality, verify_with_key, OriginalitySignature, PublicKey};

#[test]
fn known_good_signatures_verify() {
    common::helpers::init_logger();
    let key = test_key();
    for hex in UID_SIGNATURES {
        assert!(verify_with_key(&key, &UID, &signature(hex)), "{}", hex);
    }
    for hex in OTHER_UID_SIGNATURES {
        assert!(verify_with_key(&key, &OTHER_UID, &signature(hex)), "{}", hex);
    }
}

#[test]
fn signature_for_another_uid_is_rejected() {
    let key = test_key();
    assert!(!verify_with_key(&key, &OTHER_UID, &signature(UID_SIGNATURES[0])));
    assert!(!verify_with_key(&key, &UID, &signature(OTHER_UID_SIGNATURES[1])));
}

#[test]
fn wrong_key_is_rejected() {
    let sig = signature(UID_SIGNATURES[0]);
    assert!(!verify_originality(&UID, &sig));
    assert!(!verify_with_key(&PublicKey::nxp().unwrap(), &UID, &sig));
}

#[test]
fn flipped_signature_bits_are_rejected() {
    let key = test_key();
    let good = signature(UID_SIGNATURES[1]);
    for bit in (0..256).step_by(7) {
        let mut raw = *good.as_bytes();
        raw[bit / 8] ^= 0x80 >> (bit % 8);
        let bad = OriginalitySignature::from_bytes(raw);
        assert!(!verify_with_key(&key, &UID, &bad), "bit {}", bit);
    }
}

#[test]
fn flipped_uid_bits_are_rejected() {
    let key = test_key();
    let good = signature(UID_SIGNATURES[0]);
    for bit in (0..56).step_by(3) {
        let mut uid = UID;
        uid[bit / 8] ^= 0x80 >> (bit % 8);
        assert!(!verify_with_key(&key, &uid, &good), "bit {}", bit);
    }
}

#[test]
fn der_form_of_a_signature() -> anyhow::Result<()> {
    let sig = signature(UID_SIGNATURES[1]);
    let der = sig.to_der()?;
    // r and s both have the top bit set, so each integer gets a 0x00 pad
    assert_eq!(&der[..4], &[0x30, 0x26, 0x02, 0x11]);
    assert_eq!(der[4], 0x00);
    assert_eq!(&der[5..21], sig.r());
    assert_eq!(&der[21..24], &[0x02, 0x11, 0x00]);
    assert_eq!(&der[24..], sig.s());
    Ok(())
}

#[test]
fn openssl_signed_uid_verifies() -> anyhow::Result<()> {
    use openssl::bn::BigNumContext;
    use openssl::ec::{EcGroup, EcKey, PointConversionForm};
    use openssl::ecdsa::EcdsaSig;
    use openssl::nid::Nid;

    let uid = [0x04, 0x51, 0x5C, 0xFA, 0x6F, 0x37, 0x80];
    let group = EcGroup::from_curve_name(Nid::SECP128R1)?;
    let private = EcKey::generate(&group)?;
    let mut ctx = BigNumContext::new()?;
    let sec1 = private
        .public_key()
        .to_bytes(&group, PointConversionForm::UNCOMPRESSED, &mut ctx)?;
    let key = PublicKey::from_sec1(&sec1)?;

    for _ in 0..4 {
        let raw = EcdsaSig::sign(&uid, &private)?;
        let mut bytes = raw.r().to_vec_padded(16)?;
        bytes.extend(raw.s().to_vec_padded(16)?);
        let sig = OriginalitySignature::try_from(&bytes[..])?;

        assert!(verify_with_key(&key, &uid, &sig));
        assert!(!verify_with_key(&key, &UID, &sig));
        assert!(!verify_originality(&uid, &sig));
    }
    Ok(())
}
