//! Actuator backends
//!
//! Every board drives the actuators through one parallel output port; the
//! boards differ only in port width, active level and bit assignment. A
//! [`PortLayout`] captures those differences and [`PortActuators`] does the
//! read-modify-write work once for all of them.
//!
//! # Usage
//!
//! ```ignore
//! let port = OutputBank::new(pins);
//! let mut actuators = GpioByteActuators::new(port, LineBuffer::new())?;
//!
//! actuators.lock_door();
//! actuators.motor_on(MotorDirection::Left, MotorSpeed::Fast);
//! ```

pub mod byte_port;
pub mod led_port;

pub use byte_port::GpioByteLayout;
pub use led_port::LedWordLayout;

use core::convert::Infallible;
use core::marker::PhantomData;

use washer_core::traits::{
    ActuatorSnapshot, Actuators, MotorDirection, MotorSpeed, TextDisplay,
};
use washer_hal::OutputPort;

use crate::infallible;

/// Port is too narrow for the layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PortWidthError {
    /// Lines the layout needs
    pub required: u8,
    /// Lines the port has
    pub actual: u8,
}

/// Bit assignment of one board's actuator port
///
/// Masks are expressed in "asserted" terms: a set bit in a mask means the
/// line is driven to its active level, whatever the electrical polarity.
pub trait PortLayout {
    /// Lines the layout uses
    const WIDTH: u8;
    /// Outputs are active when the line is low
    const ACTIVE_LOW: bool;

    const DOOR_LOCK: u32;
    const VALVE: u32;
    const HEATER: u32;
    const PUMP: u32;
    /// Every line involved in motor control
    const MOTOR: u32;

    /// Lines to assert for a direction/speed combination
    fn motor_lines(direction: MotorDirection, speed: MotorSpeed) -> u32;

    /// Decode the asserted motor lines
    fn decode_motor(asserted: u32) -> Option<(MotorDirection, MotorSpeed)>;

    /// Mask covering every line of the layout
    fn full_mask() -> u32 {
        if Self::WIDTH >= 32 {
            u32::MAX
        } else {
            (1u32 << Self::WIDTH) - 1
        }
    }

    /// Port word that leaves every actuator inactive
    fn inactive_word() -> u32 {
        if Self::ACTIVE_LOW {
            Self::full_mask()
        } else {
            0
        }
    }
}

/// Actuators driven through a parallel output port
pub struct PortActuators<P, D, L> {
    port: P,
    display: D,
    _layout: PhantomData<L>,
}

/// Lab board GPIO byte, low-active
pub type GpioByteActuators<P, D> = PortActuators<P, D, GpioByteLayout>;

/// Lab board LED word, high-active
pub type LedWordActuators<P, D> = PortActuators<P, D, LedWordLayout>;

impl<P, D, L> PortActuators<P, D, L>
where
    P: OutputPort<Error = Infallible>,
    D: TextDisplay,
    L: PortLayout,
{
    /// Take over the port and drive every actuator inactive
    pub fn new(mut port: P, mut display: D) -> Result<Self, PortWidthError> {
        if port.width() < L::WIDTH {
            return Err(PortWidthError {
                required: L::WIDTH,
                actual: port.width(),
            });
        }

        let word = (port.value() & !L::full_mask()) | L::inactive_word();
        infallible(port.write(word));
        display.clear();

        Ok(Self {
            port,
            display,
            _layout: PhantomData,
        })
    }

    /// Access the output port
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Mutable access to the display
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Lines currently at their active level
    fn asserted(&self) -> u32 {
        let word = self.port.value() & L::full_mask();
        if L::ACTIVE_LOW {
            !word & L::full_mask()
        } else {
            word
        }
    }

    /// Replace the lines in `mask` with `lines`, in one port write
    fn drive(&mut self, mask: u32, lines: u32) {
        let asserted = (self.asserted() & !mask) | (lines & mask);
        let word = if L::ACTIVE_LOW {
            !asserted & L::full_mask()
        } else {
            asserted
        };
        // Keep lines outside the layout as they are
        let word = (self.port.value() & !L::full_mask()) | word;
        infallible(self.port.write(word));
    }

    fn assert_lines(&mut self, mask: u32) {
        self.drive(mask, mask);
    }

    fn release_lines(&mut self, mask: u32) {
        self.drive(mask, 0);
    }
}

impl<P, D, L> Actuators for PortActuators<P, D, L>
where
    P: OutputPort<Error = Infallible>,
    D: TextDisplay,
    L: PortLayout,
{
    fn lock_door(&mut self) {
        self.assert_lines(L::DOOR_LOCK);
    }

    fn unlock_door(&mut self) {
        self.release_lines(L::DOOR_LOCK);
    }

    fn open_valve(&mut self) {
        self.assert_lines(L::VALVE);
    }

    fn close_valve(&mut self) {
        self.release_lines(L::VALVE);
    }

    fn heater_on(&mut self) {
        self.assert_lines(L::HEATER);
    }

    fn heater_off(&mut self) {
        self.release_lines(L::HEATER);
    }

    fn motor_on(&mut self, direction: MotorDirection, speed: MotorSpeed) {
        // Old combination is released in the same write
        self.drive(L::MOTOR, L::motor_lines(direction, speed));
    }

    fn motor_off(&mut self) {
        self.release_lines(L::MOTOR);
    }

    fn pump_on(&mut self) {
        self.assert_lines(L::PUMP);
    }

    fn pump_off(&mut self) {
        self.release_lines(L::PUMP);
    }

    fn display(&mut self, text: &str) {
        self.display.write_line(text);
    }

    fn outputs(&self) -> ActuatorSnapshot {
        let asserted = self.asserted();
        ActuatorSnapshot {
            door_locked: asserted & L::DOOR_LOCK != 0,
            valve_open: asserted & L::VALVE != 0,
            heater_on: asserted & L::HEATER != 0,
            pump_on: asserted & L::PUMP != 0,
            motor: L::decode_motor(asserted & L::MOTOR),
        }
    }
}
