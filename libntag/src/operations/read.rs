// libntag/src/operations/read.rs

use log::{debug, warn};

use crate::constants::{BYTES_PER_PAGE, FAST_READ_OVERHEAD};
use crate::operations::{execute, unexpected};
use crate::protocol::{Command, Response};
use crate::transport::Transceiver;
use crate::{Error, Result};

fn pages(transceiver: &mut dyn Transceiver, cmd: Command) -> Result<Vec<u8>> {
    match execute(transceiver, &cmd)? {
        Response::Pages(data) => Ok(data),
        other => Err(unexpected(&cmd, &other)),
    }
}

/// READ: 16 bytes starting at `page`.
pub fn read_page(transceiver: &mut dyn Transceiver, page: u16) -> Result<Vec<u8>> {
    pages(transceiver, Command::ReadPage { page })
}

/// FAST_READ over the closed range `start..=end` in one exchange.
pub fn fast_read(transceiver: &mut dyn Transceiver, start: u16, end: u16) -> Result<Vec<u8>> {
    pages(transceiver, Command::FastRead { start, end })
}

/// Pages one FAST_READ may request so the reply fits a single exchange of
/// `max_transceive_length` bytes.
pub fn fast_read_window(max_transceive_length: usize) -> Result<u16> {
    let window = max_transceive_length.saturating_sub(FAST_READ_OVERHEAD) / BYTES_PER_PAGE;
    if window == 0 {
        return Err(Error::InvalidArgument(format!(
            "max transceive length {} leaves no room for a page",
            max_transceive_length
        )));
    }
    Ok(window.min(usize::from(u8::MAX) + 1) as u16)
}

/// Chunked FAST_READ over `start..=end`. The last chunk shrinks to the
/// pages left so nothing past `end` is requested.
///
/// A failed chunk aborts the read with `Error::IncompleteRead` carrying
/// the bytes assembled so far.
pub fn read_range(transceiver: &mut dyn Transceiver, start: u16, end: u16) -> Result<Vec<u8>> {
    if start > end || end > u16::from(u8::MAX) {
        return Err(Error::InvalidArgument(format!(
            "cannot read page range {}..={}",
            start, end
        )));
    }
    let window = fast_read_window(transceiver.max_transceive_length())?;
    let total = usize::from(end - start + 1) * BYTES_PER_PAGE;
    let mut out = Vec::with_capacity(total);

    let mut page = start;
    while page <= end {
        let last = end.min(page + window - 1);
        debug!("fast read pages {}..={}", page, last);
        match fast_read(transceiver, page, last) {
            Ok(chunk) => out.extend_from_slice(&chunk),
            Err(e) => {
                warn!(
                    "read aborted at pages {}..={} after {} bytes: {}",
                    page,
                    last,
                    out.len(),
                    e
                );
                return Err(Error::IncompleteRead {
                    partial: out,
                    source: Box::new(e),
                });
            }
        }
        page = last + 1;
    }
    Ok(out)
}

/// Every page from 0 through `last_page`.
pub fn read_full_memory(transceiver: &mut dyn Transceiver, last_page: u16) -> Result<Vec<u8>> {
    read_range(transceiver, 0, last_page)
}
