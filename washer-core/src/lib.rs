//! Board-agnostic control kernel for the washing machine firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Countdown timer advanced by an external tick source
//! - Input sampler turning raw port levels into debounced events
//! - State machine for the wash cycle
//! - Hardware abstraction traits (actuators, display, raw input)
//! - Cycle timing configuration
//!
//! The driver loop owns every piece and threads them through each call:
//!
//! ```ignore
//! let mut controller = Controller::new(CycleTimings::default());
//! controller.init(&mut actuators, &mut timer);
//!
//! loop {
//!     let event = sampler.poll(&timer);
//!     controller.handle_event(event, &mut actuators, &mut timer);
//! }
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod input;
pub mod state;
pub mod timer;
pub mod traits;
