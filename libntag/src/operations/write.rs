// libntag/src/operations/write.rs

use log::warn;

use crate::constants::{BYTES_PER_PAGE, MAX_BULK_WRITE_LEN};
use crate::operations::{execute, unexpected};
use crate::protocol::{Command, Response};
use crate::transport::Transceiver;
use crate::types::PageData;
use crate::{Error, Result};

/// WRITE one page. `data` must be exactly 4 bytes.
pub fn write_page(transceiver: &mut dyn Transceiver, page: u16, data: &[u8]) -> Result<()> {
    let cmd = Command::WritePage {
        page,
        data: data.to_vec(),
    };
    match execute(transceiver, &cmd)? {
        Response::Ack => Ok(()),
        other => Err(unexpected(&cmd, &other)),
    }
}

/// Write up to 40 bytes as consecutive pages from `start_page`. The last
/// page is zero-filled past the payload. Stops at the first page the tag
/// does not acknowledge; earlier pages stay written.
pub fn write_bulk(transceiver: &mut dyn Transceiver, start_page: u16, data: &[u8]) -> Result<()> {
    if data.len() > MAX_BULK_WRITE_LEN {
        return Err(Error::InvalidArgument(format!(
            "bulk write takes at most {} bytes, got {}",
            MAX_BULK_WRITE_LEN,
            data.len()
        )));
    }
    let pages = data.len().div_ceil(BYTES_PER_PAGE);
    if pages > 0 && usize::from(start_page) + pages - 1 > usize::from(u8::MAX) {
        return Err(Error::InvalidArgument(format!(
            "bulk write of {} pages from page {} runs past page {}",
            pages,
            start_page,
            u8::MAX
        )));
    }
    for (page, chunk) in (start_page..).zip(data.chunks(BYTES_PER_PAGE)) {
        let payload = PageData::padded(chunk);
        if let Err(e) = write_page(transceiver, page, payload.as_bytes()) {
            warn!("bulk write stopped at page {}: {}", page, e);
            return Err(e);
        }
    }
    Ok(())
}
