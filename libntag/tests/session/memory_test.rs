#[path = "../common/mod.rs"]
mod common;

use libntag::operations::{fast_read_window, read_full_memory};
use libntag::test_support::SimulatedTag;
use libntag::transport::Transceiver;
use libntag::{Error, TransportError};
use proptest::prelude::*;

#[test]
fn full_ntag215_dump_takes_three_fast_reads() {
    let (sim, mut tag) = common::helpers::identified(SimulatedTag::ntag215(&common::fixtures::UID));
    let dump = tag.read_full_memory().unwrap();
    assert_eq!(dump.len(), 540);
    assert_eq!(&dump[..3], &common::fixtures::UID[..3]);

    let sim = sim.borrow();
    let reads: Vec<&Vec<u8>> = sim.log.iter().filter(|c| c[0] == 0x3A).collect();
    assert_eq!(
        reads,
        vec![
            &vec![0x3A, 0, 61],
            &vec![0x3A, 62, 123],
            &vec![0x3A, 124, 134],
        ]
    );
}

#[test]
fn small_frames_mean_more_chunks() {
    let sim = SimulatedTag::ntag213(&common::fixtures::UID).with_max_len(64);
    let (sim, mut tag) = common::helpers::identified(sim);
    assert_eq!(tag.read_full_memory().unwrap().len(), 45 * 4);
    // 45 pages, 15 per exchange
    assert_eq!(common::helpers::count_opcode(&sim, 0x3A), 3);
}

#[test]
fn lost_tag_mid_dump_keeps_partial_data() {
    // identify + one chunk, then the tag leaves
    let sim = SimulatedTag::ntag215(&common::fixtures::UID).fail_after(2);
    let (_sim, mut tag) = common::helpers::identified(sim);
    let err = tag.read_full_memory().unwrap_err();
    assert_eq!(err.partial_data().map(<[u8]>::len), Some(62 * 4));
    assert!(err.is_retryable());
    assert!(matches!(err, Error::IncompleteRead { .. }));
}

#[test]
fn user_memory_covers_user_pages_only() {
    let (_sim, mut tag) = common::helpers::identified(SimulatedTag::ntag213(&common::fixtures::UID));
    assert_eq!(tag.read_user_memory().unwrap().len(), 144);
}

#[test]
fn bulk_write_lands_in_consecutive_pages() {
    let (sim, mut tag) = common::helpers::identified(SimulatedTag::ntag213(&common::fixtures::UID));
    tag.write_bulk(4, b"hello, tag!").unwrap();
    let sim = sim.borrow();
    assert_eq!(&sim.page(4), b"hell");
    assert_eq!(&sim.page(5), b"o, t");
    assert_eq!(&sim.page(6), &[b'a', b'g', b'!', 0x00]);
    assert_eq!(sim.page(7), [0, 0, 0, 0]);
}

#[test]
fn bulk_write_over_forty_bytes_sends_nothing() {
    let (sim, mut tag) = common::helpers::identified(SimulatedTag::ntag213(&common::fixtures::UID));
    assert!(matches!(
        tag.write_bulk(4, &[0x55; 41]),
        Err(Error::InvalidArgument(_))
    ));
    assert_eq!(sim.borrow().exchanges(), 1);
}

#[test]
fn write_past_last_page_is_refused() {
    let (_sim, mut tag) = common::helpers::identified(SimulatedTag::ntag213(&common::fixtures::UID));
    assert!(matches!(
        tag.write_page(45, &[1, 2, 3, 4]),
        Err(Error::ProtocolNak(_))
    ));
}

/// Answers every FAST_READ with zeroed pages and keeps the requested ranges.
struct ZeroPages {
    max_len: usize,
    ranges: Vec<(u8, u8)>,
}

impl Transceiver for ZeroPages {
    fn transceive(&mut self, command: &[u8]) -> Result<Vec<u8>, TransportError> {
        match command {
            [0x3A, start, end] if start <= end => {
                self.ranges.push((*start, *end));
                Ok(vec![0; (usize::from(*end - *start) + 1) * 4])
            }
            other => Err(TransportError::Link(format!("unexpected command {:02x?}", other))),
        }
    }

    fn max_transceive_length(&self) -> usize {
        self.max_len
    }
}

proptest! {
    #[test]
    fn full_read_chunk_count_matches_window(max_len in 6usize..1100, last_page in 0u16..=255) {
        let window = usize::from(fast_read_window(max_len).unwrap());
        let mut t = ZeroPages { max_len, ranges: Vec::new() };

        let dump = read_full_memory(&mut t, last_page).unwrap();

        let pages = usize::from(last_page) + 1;
        prop_assert_eq!(dump.len(), pages * 4);
        prop_assert_eq!(t.ranges.len(), pages.div_ceil(window));
        prop_assert_eq!(t.ranges[0].0, 0);
        prop_assert_eq!(t.ranges.last().map(|r| u16::from(r.1)), Some(last_page));
        for pair in t.ranges.windows(2) {
            prop_assert_eq!(u16::from(pair[1].0), u16::from(pair[0].1) + 1);
        }
        for (start, end) in &t.ranges {
            prop_assert!(usize::from(end - start) < window);
        }
    }
}
