#[path = "../common/mod.rs"]
mod common;

use libntag::configuration::{MirrorSource, ProtectionMode};
use libntag::test_support::SimulatedTag;
use libntag::Error;

#[test]
fn uid_mirroring_on_ntag215() {
    let (sim, mut tag) = common::helpers::identified(SimulatedTag::ntag215(&common::fixtures::UID));
    let rec = tag.set_ascii_mirroring(MirrorSource::Uid, 0, 4).unwrap();
    assert_eq!(rec.mirror_source().unwrap(), MirrorSource::Uid);
    assert_eq!(sim.borrow().page(131), [0x44, 0x00, 0x04, 0xFF]);
    assert_eq!(sim.borrow().page(132), [0x00, 0x05, 0x00, 0x00]);

    tag.set_ascii_mirroring(MirrorSource::None, 0, 0).unwrap();
    assert_eq!(sim.borrow().page(131), [0x04, 0x00, 0x00, 0xFF]);
}

#[test]
fn mirroring_past_user_memory_writes_nothing() {
    let (sim, mut tag) = common::helpers::identified(SimulatedTag::ntag213(&common::fixtures::UID));
    assert!(matches!(
        tag.set_ascii_mirroring(MirrorSource::Both, 0, 38),
        Err(Error::InvalidArgument(_))
    ));
    assert_eq!(common::helpers::count_opcode(&sim, 0xA2), 0);
}

#[test]
fn nfc_counter_switches() {
    let (sim, mut tag) = common::helpers::identified(SimulatedTag::ntag216(&common::fixtures::UID));
    tag.set_nfc_counter_enabled(true).unwrap();
    assert_eq!(sim.borrow().page(228)[0], 0x10);
    tag.set_nfc_counter_password_protected(true).unwrap();
    assert_eq!(sim.borrow().page(228)[0], 0x18);
    tag.set_nfc_counter_enabled(false).unwrap();
    assert_eq!(sim.borrow().page(228)[0], 0x08);
}

#[test]
fn ntag_only_features_refused_on_ultralight() {
    let (sim, mut tag) = common::helpers::identified(SimulatedTag::mf0ul11(&common::fixtures::UID));
    assert!(matches!(
        tag.set_nfc_counter_enabled(true),
        Err(Error::UnsupportedOperation(_))
    ));
    assert!(matches!(
        tag.set_ascii_mirroring(MirrorSource::Uid, 0, 4),
        Err(Error::UnsupportedOperation(_))
    ));
    // only the identification exchange went out
    assert_eq!(sim.borrow().exchanges(), 1);
}

#[test]
fn auth0_and_protection() -> anyhow::Result<()> {
    let (sim, mut tag) = common::helpers::identified(SimulatedTag::mf0ul11(&common::fixtures::UID));
    assert!(!tag.is_auth_protected()?);

    tag.set_auth0(0x10)?;
    tag.set_protection(ProtectionMode::ReadWrite)?;
    assert!(tag.is_auth_protected()?);
    assert_eq!(sim.borrow().page(16), [0x04, 0x00, 0x00, 0x10]);
    assert_eq!(sim.borrow().page(17)[0], 0x80);

    let rec = tag.read_configuration()?;
    assert_eq!(rec.protection()?, ProtectionMode::ReadWrite);

    tag.disable_authentication()?;
    assert!(!tag.is_auth_protected()?);
    Ok(())
}
