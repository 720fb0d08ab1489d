//! State machine for the wash cycle
//!
//! Defines the authoritative runtime behavior of the machine.
//! The state machine is explicit, finite, and deterministic.

pub mod controller;
pub mod events;
pub mod machine;

pub use controller::Controller;
pub use events::{Event, WaterLevel};
pub use machine::State;
