//! Test support helpers intended for use by unit and integration tests.
//!
//! `MockTransceiver` helpers replay scripted replies. `SimulatedTag`
//! answers the command set from an in-memory page image, so multi-step
//! operations can be exercised end to end without a reader.
#![allow(dead_code)]

use std::collections::VecDeque;

use log::trace;

use crate::constants::{
    ACK, BYTES_PER_PAGE, CONTINUATION_MARKER, NAK_INVALID_ARGUMENT, READ_RESPONSE_LEN,
    SIGNATURE_LEN,
};
use crate::error::TransportError;
use crate::protocol::Command;
use crate::session::{Tag, Unidentified};
use crate::transport::{MockTransceiver, Transceiver};
use crate::types::{Credentials, Uid};

/// Build a MockTransceiver pre-seeded with the given replies and return
/// it boxed as a Transceiver trait object.
#[doc(hidden)]
pub fn boxed_mock_with_responses(max_len: usize, responses: Vec<Vec<u8>>) -> Box<dyn Transceiver> {
    let mut mock = MockTransceiver::new(max_len);
    for resp in responses {
        mock.push_response(resp);
    }
    Box::new(mock)
}

/// Convenience: an unidentified session over a seeded mock.
#[doc(hidden)]
pub fn mock_tag(uid: &[u8], max_len: usize, responses: Vec<Vec<u8>>) -> crate::Result<Tag<Unidentified>> {
    let uid = Uid::try_from(uid)?;
    Ok(Tag::new(boxed_mock_with_responses(max_len, responses), uid))
}

/// GET_VERSION payloads of common tags.
#[doc(hidden)]
pub mod versions {
    pub const NTAG213: [u8; 8] = [0x00, 0x04, 0x04, 0x02, 0x01, 0x00, 0x0F, 0x03];
    pub const NTAG215: [u8; 8] = [0x00, 0x04, 0x04, 0x02, 0x01, 0x00, 0x11, 0x03];
    pub const NTAG216: [u8; 8] = [0x00, 0x04, 0x04, 0x02, 0x01, 0x00, 0x13, 0x03];
    pub const MF0UL11: [u8; 8] = [0x00, 0x04, 0x03, 0x01, 0x01, 0x00, 0x0B, 0x03];
    pub const MF0UL21: [u8; 8] = [0x00, 0x04, 0x03, 0x01, 0x01, 0x00, 0x0E, 0x03];
}

/// In-memory tag speaking the NTAG21x / Ultralight EV1 command set.
///
/// PWD and PACK pages read back as zeros like on real silicon. Access
/// conditions are not enforced.
#[doc(hidden)]
#[derive(Debug, Clone)]
pub struct SimulatedTag {
    memory: Vec<u8>,
    version: Vec<u8>,
    version_chunk: Option<usize>,
    pending_version: VecDeque<Vec<u8>>,
    signature: [u8; SIGNATURE_LEN],
    counters: [u32; 3],
    credentials: Credentials,
    authenticated: bool,
    max_len: usize,
    fail_after: Option<usize>,
    exchanges: usize,
    /// Every command received, in order
    pub log: Vec<Vec<u8>>,
}

impl SimulatedTag {
    /// Blank tag with pages `0..=last_page`. UID and BCC bytes fill pages
    /// 0..=2; the two configuration pages at `config_page` get factory
    /// defaults (AUTH0 0xFF, everything else off).
    pub fn new(uid: &[u8; 7], version: &[u8], last_page: u16, config_page: u16) -> Self {
        let mut memory = vec![0u8; (usize::from(last_page) + 1) * BYTES_PER_PAGE];
        let bcc0 = 0x88 ^ uid[0] ^ uid[1] ^ uid[2];
        let bcc1 = uid[3] ^ uid[4] ^ uid[5] ^ uid[6];
        memory[..3].copy_from_slice(&uid[..3]);
        memory[3] = bcc0;
        memory[4..8].copy_from_slice(&uid[3..]);
        memory[8] = bcc1;
        memory[9] = 0x48;

        let cfg = usize::from(config_page) * BYTES_PER_PAGE;
        if cfg + 8 <= memory.len() {
            memory[cfg..cfg + 8].copy_from_slice(&[0x04, 0x00, 0x00, 0xFF, 0x00, 0x05, 0x00, 0x00]);
        }

        Self {
            memory,
            version: version.to_vec(),
            version_chunk: None,
            pending_version: VecDeque::new(),
            signature: [0u8; SIGNATURE_LEN],
            counters: [0; 3],
            credentials: Credentials::DEFAULT,
            authenticated: false,
            max_len: 253,
            fail_after: None,
            exchanges: 0,
            log: Vec::new(),
        }
    }

    pub fn ntag213(uid: &[u8; 7]) -> Self {
        Self::new(uid, &versions::NTAG213, 44, 41)
    }

    pub fn ntag215(uid: &[u8; 7]) -> Self {
        Self::new(uid, &versions::NTAG215, 134, 131)
    }

    pub fn ntag216(uid: &[u8; 7]) -> Self {
        Self::new(uid, &versions::NTAG216, 230, 227)
    }

    pub fn mf0ul11(uid: &[u8; 7]) -> Self {
        Self::new(uid, &versions::MF0UL11, 19, 16)
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Deliver version data in chunks of `n` bytes behind the
    /// continuation marker.
    pub fn with_version_chunks(mut self, n: usize) -> Self {
        self.version_chunk = Some(n.max(1));
        self
    }

    pub fn with_signature(mut self, signature: [u8; SIGNATURE_LEN]) -> Self {
        self.signature = signature;
        self
    }

    pub fn with_counter(mut self, counter: usize, value: u32) -> Self {
        if let Some(c) = self.counters.get_mut(counter) {
            *c = value & 0xFF_FFFF;
        }
        self
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Lose the tag after `n` successful exchanges.
    pub fn fail_after(mut self, n: usize) -> Self {
        self.fail_after = Some(n);
        self
    }

    pub fn last_page(&self) -> u16 {
        (self.memory.len() / BYTES_PER_PAGE - 1) as u16
    }

    pub fn page(&self, page: u16) -> [u8; 4] {
        let at = usize::from(page) * BYTES_PER_PAGE;
        let mut out = [0u8; 4];
        out.copy_from_slice(&self.memory[at..at + BYTES_PER_PAGE]);
        out
    }

    pub fn memory(&self) -> &[u8] {
        &self.memory
    }

    pub fn credentials(&self) -> Credentials {
        self.credentials
    }

    pub fn counter(&self, counter: usize) -> u32 {
        self.counters[counter]
    }

    pub fn exchanges(&self) -> usize {
        self.exchanges
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    fn is_secret(&self, page: u16) -> bool {
        let last = self.last_page();
        page == last || page + 1 == last
    }

    fn read_pages(&self, start: u16, count: u16) -> Vec<u8> {
        let pages = self.last_page() + 1;
        let mut out = Vec::with_capacity(usize::from(count) * BYTES_PER_PAGE);
        for i in 0..count {
            // READ wraps to page 0 past the end
            let p = (start + i) % pages;
            if self.is_secret(p) {
                out.extend_from_slice(&[0u8; 4]);
            } else {
                out.extend_from_slice(&self.page(p));
            }
        }
        out
    }

    fn next_version_chunk(&mut self) -> Vec<u8> {
        match self.pending_version.pop_front() {
            Some(chunk) if !self.pending_version.is_empty() => {
                let mut out = vec![CONTINUATION_MARKER];
                out.extend_from_slice(&chunk);
                out
            }
            Some(chunk) => chunk,
            None => vec![NAK_INVALID_ARGUMENT],
        }
    }

    fn answer(&mut self, cmd: Command) -> std::result::Result<Vec<u8>, TransportError> {
        let nak = vec![NAK_INVALID_ARGUMENT];
        let last = self.last_page();
        let reply = match cmd {
            Command::GetVersion => match self.version_chunk {
                None => self.version.clone(),
                Some(n) => {
                    self.pending_version = self.version.chunks(n).map(|c| c.to_vec()).collect();
                    self.next_version_chunk()
                }
            },
            Command::GetMoreData => self.next_version_chunk(),
            Command::ReadPage { page } if page <= last => {
                self.read_pages(page, (READ_RESPONSE_LEN / BYTES_PER_PAGE) as u16)
            }
            Command::FastRead { start, end } if start <= end && end <= last => {
                let data = self.read_pages(start, end - start + 1);
                if data.len() > self.max_len {
                    return Err(TransportError::Link(format!(
                        "{} byte frame exceeds {}",
                        data.len(),
                        self.max_len
                    )));
                }
                data
            }
            Command::WritePage { page, data } if (2..=last).contains(&page) => {
                let at = usize::from(page) * BYTES_PER_PAGE;
                self.memory[at..at + BYTES_PER_PAGE].copy_from_slice(&data);
                if page + 1 == last {
                    let mut pwd = [0u8; 4];
                    pwd.copy_from_slice(&data);
                    self.credentials.password = crate::types::Password::new(pwd);
                } else if page == last {
                    self.credentials.pack = crate::types::Pack::new([data[0], data[1]]);
                }
                vec![ACK]
            }
            Command::ReadCounter { counter } if counter < 3 => {
                let v = self.counters[usize::from(counter)];
                v.to_le_bytes()[..3].to_vec()
            }
            Command::IncreaseCounter { counter } if counter < 3 => {
                let c = &mut self.counters[usize::from(counter)];
                if *c >= 0xFF_FFFF {
                    return Ok(nak);
                }
                *c += 1;
                vec![ACK]
            }
            Command::ReadSignature => self.signature.to_vec(),
            Command::PasswordAuthenticate { password } => {
                if password == self.credentials.password {
                    self.authenticated = true;
                    self.credentials.pack.as_bytes().to_vec()
                } else {
                    self.authenticated = false;
                    nak
                }
            }
            _ => nak,
        };
        Ok(reply)
    }
}

impl Transceiver for SimulatedTag {
    fn transceive(&mut self, command: &[u8]) -> std::result::Result<Vec<u8>, TransportError> {
        self.log.push(command.to_vec());
        if let Some(n) = self.fail_after {
            if self.exchanges >= n {
                return Err(TransportError::TagLost);
            }
        }
        self.exchanges += 1;

        let reply = match Command::parse(command) {
            Ok(cmd) => self.answer(cmd)?,
            Err(_) => vec![NAK_INVALID_ARGUMENT],
        };
        trace!("simulated tag answered {} bytes", reply.len());
        Ok(reply)
    }

    fn max_transceive_length(&self) -> usize {
        self.max_len
    }
}
