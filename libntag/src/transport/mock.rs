// libntag/src/transport/mock.rs

use std::collections::VecDeque;

use crate::error::TransportError;
use crate::transport::traits::Transceiver;

/// Mock transceiver for unit tests. It records sent commands and returns
/// queued replies in order.
#[derive(Debug, Default)]
pub struct MockTransceiver {
    pub sent: Vec<Vec<u8>>,
    pub responses: VecDeque<std::result::Result<Vec<u8>, TransportError>>,
    pub max_len: usize,
}

impl MockTransceiver {
    pub fn new(max_len: usize) -> Self {
        Self {
            sent: Vec::new(),
            responses: VecDeque::new(),
            max_len,
        }
    }

    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push_back(Ok(resp));
    }

    /// Queue a transport failure for the next exchange.
    pub fn push_error(&mut self, err: TransportError) {
        self.responses.push_back(Err(err));
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    /// Commands sent so far whose opcode is `opcode`.
    pub fn sent_with_opcode(&self, opcode: u8) -> usize {
        self.sent
            .iter()
            .filter(|c| c.first() == Some(&opcode))
            .count()
    }
}

impl Transceiver for MockTransceiver {
    fn transceive(&mut self, command: &[u8]) -> std::result::Result<Vec<u8>, TransportError> {
        self.sent.push(command.to_vec());
        self.responses.pop_front().unwrap_or(Err(TransportError::Timeout))
    }

    fn max_transceive_length(&self) -> usize {
        self.max_len
    }
}
