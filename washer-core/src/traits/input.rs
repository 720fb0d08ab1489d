//! Raw input trait

/// Raw digital input port
///
/// Returns the current level of every monitored line (door, floater,
/// thermostat, buttons) packed into one byte. No edge detection or
/// debouncing happens on this side.
pub trait RawInput {
    /// Sample the port
    fn read(&mut self) -> u8;
}

impl<F: FnMut() -> u8> RawInput for F {
    fn read(&mut self) -> u8 {
        self()
    }
}
