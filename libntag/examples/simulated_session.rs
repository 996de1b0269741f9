// Walk through a session against the in-memory tag: identify, dump memory,
// print the configuration record and check the originality signature.
//
// Run with `RUST_LOG=debug` to see the exchanges.

use libntag::prelude::*;
use libntag::test_support::SimulatedTag;

fn main() -> Result<()> {
    env_logger::init();

    let uid = [0x04, 0xE1, 0x0C, 0x9A, 0x8B, 0x6C, 0x80];
    let sim = SimulatedTag::ntag215(&uid).with_counter(2, 42);

    let mut tag = TagBuilder::new()
        .with_transceiver(Box::new(sim))
        .with_uid(Uid::try_from(&uid[..])?)
        .with_atqa(Atqa::new([0x44, 0x00]))
        .with_sak(Sak::new(0x00))
        .build()?
        .identify()?;

    println!("Tag: {}", tag.profile());

    let dump = tag.read_full_memory()?;
    for (page, chunk) in dump.chunks(4).enumerate().take(8) {
        println!("  page {:3}: {}", page, bytes_to_hex_spaced(chunk));
    }
    println!("  ... {} bytes in total", dump.len());

    print!("{}", tag.read_configuration()?);
    println!("NFC counter: {}", tag.read_counter_int(2));

    let genuine = tag.verify_originality()?;
    println!("Originality signature: {}", if genuine { "valid" } else { "not NXP" });
    Ok(())
}
