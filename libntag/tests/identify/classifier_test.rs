use libntag::identify::{classify, classify_version, Capabilities, TagFamily, VersionInfo};
use libntag::types::{Atqa, Sak};
use proptest::prelude::*;

fn version(storage: u8, product_type: u8) -> VersionInfo {
    VersionInfo::parse(&[0x00, 0x04, product_type, 0x01, 0x01, 0x00, storage, 0x03]).unwrap()
}

#[test]
fn page_based_table() {
    // (type, storage, name, user bytes, last user page, last page, config page)
    let table = [
        (0x04, 0x0F, "NTAG213", 144, 39, 44, 41),
        (0x04, 0x11, "NTAG215", 504, 129, 134, 131),
        (0x04, 0x13, "NTAG216", 888, 225, 230, 227),
        (0x03, 0x0B, "MF0UL11", 48, 15, 19, 16),
        (0x03, 0x0E, "MF0UL21", 128, 35, 40, 37),
    ];
    for (ty, storage, name, bytes, last_user, last, config) in table {
        let p = classify_version(&version(storage, ty)).unwrap();
        assert_eq!(p.name, name);
        assert_eq!(p.memory.user_memory_bytes, bytes, "{}", name);
        assert_eq!(p.memory.first_user_page, 4, "{}", name);
        assert_eq!(p.memory.last_user_page, last_user, "{}", name);
        assert_eq!(p.memory.last_page, last, "{}", name);
        assert_eq!(p.memory.config_page, config, "{}", name);
        assert_eq!(p.memory.pwd_page(), last - 1, "{}", name);
        assert_eq!(p.capabilities, Capabilities::PAGED, "{}", name);
        assert_eq!(
            p.counters,
            if ty == 0x04 { 1 } else { 3 },
            "{}",
            name
        );
    }
}

#[test]
fn desfire_sizes() {
    for (storage, bytes) in [(0x16u8, 2048u32), (0x18, 4096), (0x1A, 8192), (0x1C, 16384), (0x1E, 32768)] {
        let raw = [0x04, 0x01, 0x01, 0x33, 0x00, storage, 0x05, 0x04, 0x01, 0x01, 0x03, 0x00];
        let p = classify_version(&VersionInfo::parse(&raw).unwrap()).unwrap();
        assert_eq!(p.family, TagFamily::Desfire);
        assert!(p.name.starts_with("DESFire EV3"), "{}", p.name);
        assert_eq!(p.memory.user_memory_bytes, bytes);
        assert_eq!(p.capabilities, Capabilities::NONE);
    }
}

#[test]
fn fallback_is_only_used_when_version_fails() {
    let atqa = Some(Atqa::new([0x44, 0x00]));
    let sak = Some(Sak::new(0x00));
    let v = [0x00, 0x04, 0x04, 0x02, 0x01, 0x00, 0x0F, 0x03];
    assert!(!classify(Some(&v[..]), atqa, sak).unwrap().is_fallback());

    let unknown_type = [0x00, 0x04, 0x77, 0x02, 0x01, 0x00, 0x0F, 0x03];
    let p = classify(Some(&unknown_type[..]), atqa, sak).unwrap();
    assert!(p.is_fallback());
    assert_eq!(p.family, TagFamily::Ntag21x);

    assert!(classify(None, Some(Atqa::new([0x04, 0x00])), Some(Sak::new(0x08))).is_err());
}

proptest! {
    #[test]
    fn classify_never_panics(v in prop::collection::vec(any::<u8>(), 0..40), a0 in any::<u8>(), s in any::<u8>()) {
        use std::panic::{catch_unwind, AssertUnwindSafe};
        let res = catch_unwind(AssertUnwindSafe(|| {
            classify(Some(&v[..]), Some(Atqa::new([a0, 0x00])), Some(Sak::new(s)))
        }));
        prop_assert!(res.is_ok());
    }

    // Unknown storage codes never invent capabilities.
    #[test]
    fn unknown_subtypes_have_no_capabilities(storage in any::<u8>()) {
        prop_assume!(![0x0B, 0x0E, 0x0F, 0x11, 0x13].contains(&storage));
        for ty in [0x03u8, 0x04] {
            let p = classify_version(&version(storage, ty)).unwrap();
            prop_assert_eq!(p.capabilities, Capabilities::NONE);
            prop_assert_eq!(p.memory.user_memory_bytes, 0);
        }
    }
}
