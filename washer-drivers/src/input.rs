//! Raw input adapter
//!
//! Turns a parallel [`InputPort`] into the byte-wide [`RawInput`] the
//! sampler expects. Boards whose buttons pull low can flip those lines so
//! that the byte reads the same on every board.

use core::convert::Infallible;

use washer_core::traits::RawInput;
use washer_hal::InputPort;

use crate::infallible;

/// Low byte of an input port
pub struct PortInput<P> {
    port: P,
    invert: u8,
}

impl<P: InputPort<Error = Infallible>> PortInput<P> {
    pub fn new(port: P) -> Self {
        Self { port, invert: 0 }
    }

    /// Flip the lines in `mask` on every read
    pub fn inverted(mut self, mask: u8) -> Self {
        self.invert = mask;
        self
    }
}

impl<P: InputPort<Error = Infallible>> RawInput for PortInput<P> {
    fn read(&mut self) -> u8 {
        let word = infallible(self.port.read());
        (word as u8) ^ self.invert
    }
}
