//! Hardware backend implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in washer-core on top of the ports defined in washer-hal:
//!
//! - Actuator backends, one per board layout (low-active byte port,
//!   LED-mapped word port)
//! - Raw input adapter for parallel input ports
//! - Buffered status line display

#![no_std]
#![deny(unsafe_code)]

pub mod actuator;
pub mod display;
pub mod input;

pub use actuator::{GpioByteActuators, LedWordActuators, PortActuators, PortWidthError};
pub use display::LineBuffer;
pub use input::PortInput;

use core::convert::Infallible;

/// Unwrap the result of a port that cannot fail
pub(crate) fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
