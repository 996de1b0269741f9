// libntag/src/transport/traits.rs

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::TransportError;

/// Transceiver abstracts the physical link away from protocol logic.
///
/// One call is one command/response exchange with the tag in the field.
/// Implementations own radio state; the engine never polls or reconnects.
pub trait Transceiver {
    /// Send `command` to the tag and return its raw reply.
    fn transceive(&mut self, command: &[u8]) -> std::result::Result<Vec<u8>, TransportError>;

    /// Largest reply the link can carry in one exchange, link overhead
    /// included. Used to size FAST_READ windows.
    fn max_transceive_length(&self) -> usize;
}

impl<T: Transceiver + ?Sized> Transceiver for Box<T> {
    fn transceive(&mut self, command: &[u8]) -> std::result::Result<Vec<u8>, TransportError> {
        (**self).transceive(command)
    }

    fn max_transceive_length(&self) -> usize {
        (**self).max_transceive_length()
    }
}

/// Shared handle, so a test can keep inspecting a transceiver that a
/// session owns.
impl<T: Transceiver + ?Sized> Transceiver for Rc<RefCell<T>> {
    fn transceive(&mut self, command: &[u8]) -> std::result::Result<Vec<u8>, TransportError> {
        self.borrow_mut().transceive(command)
    }

    fn max_transceive_length(&self) -> usize {
        self.borrow().max_transceive_length()
    }
}
