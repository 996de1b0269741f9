// libntag/src/operations/counter.rs

use log::warn;

use crate::constants::COUNTER_UNAVAILABLE;
use crate::operations::{execute, unexpected};
use crate::protocol::{Command, Response};
use crate::transport::Transceiver;
use crate::Result;

/// READ_CNT: 24-bit little endian counter value.
pub fn read_counter(transceiver: &mut dyn Transceiver, counter: u16) -> Result<u32> {
    let cmd = Command::ReadCounter { counter };
    let resp = execute(transceiver, &cmd)?;
    resp.counter().ok_or_else(|| unexpected(&cmd, &resp))
}

/// Like [`read_counter`] but collapses every failure into
/// `COUNTER_UNAVAILABLE` (-1) so a lost tag never reads as zero.
pub fn read_counter_int(transceiver: &mut dyn Transceiver, counter: u16) -> i32 {
    match read_counter(transceiver, counter) {
        Ok(v) => v as i32,
        Err(e) => {
            warn!("counter {} unavailable: {}", counter, e);
            COUNTER_UNAVAILABLE
        }
    }
}

/// INCR_CNT by one.
pub fn increase_counter(transceiver: &mut dyn Transceiver, counter: u16) -> Result<()> {
    let cmd = Command::IncreaseCounter { counter };
    match execute(transceiver, &cmd)? {
        Response::Ack => Ok(()),
        other => Err(unexpected(&cmd, &other)),
    }
}
