//! Parallel port abstractions
//!
//! A port packs several digital lines into one word, bit `n` being line `n`.
//! Ports are at most 32 lines wide.

/// Parallel digital input
///
/// Implementations sample all lines and return them as one word. No
/// filtering happens on this side; debouncing belongs to the caller.
pub trait InputPort {
    /// Error raised by the underlying pins
    type Error;

    /// Sample every line of the port
    fn read(&mut self) -> Result<u32, Self::Error>;
}

/// Parallel digital output
///
/// The port remembers the last word written so that single lines can be
/// changed with read-modify-write without reading back the hardware.
pub trait OutputPort {
    /// Error raised by the underlying pins
    type Error;

    /// Number of lines driven by this port
    fn width(&self) -> u8;

    /// Drive every line of the port
    fn write(&mut self, value: u32) -> Result<(), Self::Error>;

    /// Last word written to the port
    fn value(&self) -> u32;

    /// Drive the lines in `mask` high, leaving the others untouched
    fn set_bits(&mut self, mask: u32) -> Result<(), Self::Error> {
        let value = self.value() | mask;
        self.write(value)
    }

    /// Drive the lines in `mask` low, leaving the others untouched
    fn clear_bits(&mut self, mask: u32) -> Result<(), Self::Error> {
        let value = self.value() & !mask;
        self.write(value)
    }

    /// Mask covering every line of the port
    fn full_mask(&self) -> u32 {
        match self.width() {
            0 => 0,
            w if w >= 32 => u32::MAX,
            w => (1u32 << w) - 1,
        }
    }
}
