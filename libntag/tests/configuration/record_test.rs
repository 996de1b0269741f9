use libntag::configuration::{AuthLimit, ConfigurationRecord, MirrorSource, ProtectionMode};
use proptest::prelude::*;

#[test]
fn authlim_every_value() {
    for bits in 0u8..=7 {
        let rec = ConfigurationRecord::from_bytes(&[0x04, 0, 0, 0xFF, 0x80 | bits, 0x05, 0, 0]);
        let limit = rec.auth_limit().unwrap();
        assert_eq!(limit.bits(), bits);
        assert_eq!(limit == AuthLimit::Unlimited, bits == 0);
        let line = format!("AUTHLIM           {}", limit);
        assert!(rec.report().unwrap().contains(&line), "{}", line);
        // neighbouring PROT bit is untouched
        assert_eq!(rec.protection().unwrap(), ProtectionMode::ReadWrite);
    }
}

#[test]
fn mirror_must_end_inside_user_memory() {
    // NTAG215: user pages end at 129, i.e. byte 520
    let mut rec = ConfigurationRecord::factory_default();
    rec.set_ascii_mirroring(MirrorSource::Both, 3, 124, 129).unwrap();
    assert_eq!(rec.mirror_page().unwrap(), 124);
    assert_eq!(rec.mirror_byte().unwrap(), 3);
    assert_eq!(rec.mirror_source().unwrap(), MirrorSource::Both);

    assert!(rec.set_ascii_mirroring(MirrorSource::Both, 0, 125, 129).is_err());
    assert!(rec.set_ascii_mirroring(MirrorSource::Uid, 0, 3, 129).is_err());
    assert!(rec.set_ascii_mirroring(MirrorSource::Uid, 4, 10, 129).is_err());
    // failed calls leave the record as it was
    assert_eq!(rec.mirror_page().unwrap(), 124);

    rec.set_ascii_mirroring(MirrorSource::None, 0, 0, 129).unwrap();
    assert_eq!(rec.mirror_source().unwrap(), MirrorSource::None);
    assert_eq!(rec.mirror_page().unwrap(), 0);
    assert_eq!(rec.mirror_byte().unwrap(), 0);
    assert!(rec.strong_modulation().unwrap());
}

#[test]
fn invalid_record_displays_as_invalid() {
    let rec = ConfigurationRecord::from_bytes(&[0u8; 9]);
    assert_eq!(rec.to_string(), "Configuration record: invalid\n");
}

fn bytes_of(rec: &ConfigurationRecord) -> [u8; 8] {
    rec.to_bytes().unwrap()
}

// Bytes that may differ from the input, as (index, mask).
fn assert_only_changed(before: &[u8; 8], after: &[u8; 8], index: usize, mask: u8) {
    for i in 0..8 {
        let keep = if i == index { !mask } else { 0xFF };
        assert_eq!(before[i] & keep, after[i] & keep, "byte {} changed", i);
    }
}

proptest! {
    #[test]
    fn any_eight_bytes_round_trip(raw in prop::array::uniform8(any::<u8>())) {
        let rec = ConfigurationRecord::from_bytes(&raw);
        prop_assert_eq!(rec.to_bytes().unwrap(), raw);
    }

    #[test]
    fn single_mutators_touch_only_their_field(
        raw in prop::array::uniform8(any::<u8>()),
        auth0 in any::<u8>(),
        flag in any::<bool>(),
        limit in 0u8..=7,
    ) {
        let base = ConfigurationRecord::from_bytes(&raw);

        let mut r = base.clone();
        r.set_auth0(auth0).unwrap();
        assert_only_changed(&raw, &bytes_of(&r), 3, 0xFF);
        prop_assert_eq!(r.auth0().unwrap(), auth0);

        let mut r = base.clone();
        let mode = if flag { ProtectionMode::ReadWrite } else { ProtectionMode::WriteOnly };
        r.set_protection(mode).unwrap();
        assert_only_changed(&raw, &bytes_of(&r), 4, 0x80);
        prop_assert_eq!(r.protection().unwrap(), mode);

        let mut r = base.clone();
        r.set_nfc_counter_enabled(flag).unwrap();
        assert_only_changed(&raw, &bytes_of(&r), 4, 0x10);
        prop_assert_eq!(r.nfc_counter_enabled().unwrap(), flag);

        let mut r = base.clone();
        r.set_nfc_counter_password_protected(flag).unwrap();
        assert_only_changed(&raw, &bytes_of(&r), 4, 0x08);
        prop_assert_eq!(r.nfc_counter_password_protected().unwrap(), flag);

        let mut r = base.clone();
        r.set_auth_limit(AuthLimit::new(limit).unwrap()).unwrap();
        assert_only_changed(&raw, &bytes_of(&r), 4, 0x07);
        prop_assert_eq!(r.auth_limit().unwrap().bits(), limit);

        let mut r = base;
        r.disable_authentication().unwrap();
        assert_only_changed(&raw, &bytes_of(&r), 3, 0xFF);
        prop_assert!(!r.is_auth_protected(230).unwrap());
    }
}
