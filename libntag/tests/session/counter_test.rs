#[path = "../common/mod.rs"]
mod common;

use libntag::test_support::SimulatedTag;

#[test]
fn read_and_increase_nfc_counter() {
    let sim = SimulatedTag::ntag215(&common::fixtures::UID).with_counter(2, 0x01_2345);
    let (sim, mut tag) = common::helpers::identified(sim);
    assert_eq!(tag.read_counter(2).unwrap(), 0x01_2345);
    tag.increase_counter(2).unwrap();
    assert_eq!(tag.read_counter_int(2), 0x01_2346);
    assert_eq!(sim.borrow().counter(2), 0x01_2346);
}

#[test]
fn bad_counter_index_reads_as_sentinel() {
    let (_sim, mut tag) = common::helpers::identified(SimulatedTag::ntag215(&common::fixtures::UID));
    assert_eq!(tag.read_counter_int(7), -1);
}

#[test]
fn lost_tag_reads_as_sentinel_not_zero() {
    let sim = SimulatedTag::ntag215(&common::fixtures::UID).fail_after(1);
    let (_sim, mut tag) = common::helpers::identified(sim);
    assert_eq!(tag.read_counter_int(2), -1);
}
