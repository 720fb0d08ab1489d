//! Status display trait

/// Number of characters on the status line
pub const LINE_WIDTH: usize = 16;

/// Single-line text display
///
/// The machine shows one status line: the name of the current state.
/// Backends truncate text longer than their line.
pub trait TextDisplay {
    /// Clear the line
    fn clear(&mut self);

    /// Replace the line with `text`
    fn write_line(&mut self, text: &str);
}
