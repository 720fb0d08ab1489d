//! Washer Hardware Abstraction Layer
//!
//! The control kernel sees the machine through two parallel ports: a raw
//! input word (switches and sensors) and an output word (actuator lines).
//! This crate defines those port traits and builds them from individual
//! `embedded-hal` digital pins, so any chip HAL that implements
//! `embedded-hal` 1.0 can back the washer.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  washer-core (events, timer, FSM)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  washer-drivers (actuator backends)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  washer-hal (this crate - ports)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  embedded-hal pins (embassy-stm32, ...) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`port::InputPort`] - Parallel digital input
//! - [`port::OutputPort`] - Parallel digital output

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod port;

// Re-export key types at crate root for convenience
pub use gpio::{InputBank, OutputBank};
pub use port::{InputPort, OutputPort};
