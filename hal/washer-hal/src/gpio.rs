//! Pin banks
//!
//! Builds parallel ports out of individual `embedded-hal` digital pins.
//! Pin `n` of the array maps to bit `n` of the port word.

use embedded_hal::digital::{InputPin, OutputPin, PinState};

use crate::port::{InputPort, OutputPort};

/// Parallel input port made of `N` input pins
pub struct InputBank<P, const N: usize> {
    pins: [P; N],
}

impl<P: InputPin, const N: usize> InputBank<P, N> {
    const FITS_WORD: () = assert!(N <= 32, "a port holds at most 32 lines");

    /// Create a bank from pins ordered by bit position
    pub fn new(pins: [P; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::FITS_WORD;
        Self { pins }
    }

    /// Give the pins back
    pub fn release(self) -> [P; N] {
        self.pins
    }
}

impl<P: InputPin, const N: usize> InputPort for InputBank<P, N> {
    type Error = P::Error;

    fn read(&mut self) -> Result<u32, Self::Error> {
        let mut value = 0u32;
        for (bit, pin) in self.pins.iter_mut().enumerate() {
            if pin.is_high()? {
                value |= 1 << bit;
            }
        }
        Ok(value)
    }
}

/// Parallel output port made of `N` output pins
pub struct OutputBank<P, const N: usize> {
    pins: [P; N],
    /// Last word written
    latched: u32,
}

impl<P: OutputPin, const N: usize> OutputBank<P, N> {
    const FITS_WORD: () = assert!(N <= 32, "a port holds at most 32 lines");

    /// Create a bank from pins ordered by bit position
    ///
    /// The pins are not touched until the first write; `value()` reports 0
    /// until then.
    pub fn new(pins: [P; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::FITS_WORD;
        Self { pins, latched: 0 }
    }

    /// Give the pins back
    pub fn release(self) -> [P; N] {
        self.pins
    }
}

impl<P: OutputPin, const N: usize> OutputPort for OutputBank<P, N> {
    type Error = P::Error;

    fn width(&self) -> u8 {
        N as u8
    }

    fn write(&mut self, value: u32) -> Result<(), Self::Error> {
        for (bit, pin) in self.pins.iter_mut().enumerate() {
            pin.set_state(PinState::from(value & (1 << bit) != 0))?;
        }
        self.latched = value & self.full_mask();
        Ok(())
    }

    fn value(&self) -> u32 {
        self.latched
    }
}
