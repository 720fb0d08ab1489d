//! Hardware abstraction traits
//!
//! These traits define the interface between the control kernel and
//! board-specific implementations.

pub mod actuator;
pub mod display;
pub mod input;

pub use actuator::{ActuatorSnapshot, Actuators, MotorDirection, MotorSpeed};
pub use display::{TextDisplay, LINE_WIDTH};
pub use input::RawInput;
