//! Buffered status line
//!
//! [`LineBuffer`] keeps the text of the status line in RAM. The firmware
//! picks up changes with [`LineBuffer::take_update`] and forwards them to
//! whatever actually shows them (LCD, RTT log).

use heapless::String;
use washer_core::traits::{TextDisplay, LINE_WIDTH};

/// One status line held in memory
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    text: String<LINE_WIDTH>,
    dirty: bool,
}

impl LineBuffer {
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            dirty: false,
        }
    }

    /// Current line content
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Line changed since the last [`take_update`](Self::take_update)
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Return the line if it changed, and mark it as seen
    pub fn take_update(&mut self) -> Option<&str> {
        if core::mem::take(&mut self.dirty) {
            Some(self.text.as_str())
        } else {
            None
        }
    }
}

impl TextDisplay for LineBuffer {
    fn clear(&mut self) {
        self.text.clear();
        self.dirty = true;
    }

    fn write_line(&mut self, text: &str) {
        self.text.clear();
        for ch in text.chars() {
            if self.text.push(ch).is_err() {
                #[cfg(feature = "defmt")]
                defmt::warn!("status line truncated: {=str}", text);
                break;
            }
        }
        self.dirty = true;
    }
}
