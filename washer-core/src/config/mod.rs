//! Configuration types
//!
//! Cycle durations are fixed at build time. The firmware deserializes them
//! from `machine.toml` in its build script and bakes them in as constants.

pub mod timings;

pub use timings::*;
