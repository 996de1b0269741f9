// helpers.rs: logger setup and small session builders

use std::cell::RefCell;
use std::rc::Rc;

use libntag::session::{Identified, Tag, TagBuilder};
use libntag::test_support::SimulatedTag;
use libntag::types::Uid;

/// Route `log` output through the test harness. Safe to call repeatedly.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Identify a simulated tag, keeping a handle to inspect it afterwards.
pub fn identified(sim: SimulatedTag) -> (Rc<RefCell<SimulatedTag>>, Tag<Identified>) {
    init_logger();
    let shared = Rc::new(RefCell::new(sim));
    let tag = TagBuilder::new()
        .with_transceiver(Box::new(shared.clone()))
        .with_uid(Uid::try_from(&super::fixtures::UID[..]).unwrap())
        .build()
        .unwrap()
        .identify()
        .unwrap();
    (shared, tag)
}

/// Commands with `opcode` the simulated tag has seen.
pub fn count_opcode(sim: &Rc<RefCell<SimulatedTag>>, opcode: u8) -> usize {
    sim.borrow()
        .log
        .iter()
        .filter(|c| c.first() == Some(&opcode))
        .count()
}
