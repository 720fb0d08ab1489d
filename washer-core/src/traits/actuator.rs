//! Actuator trait
//!
//! One implementation exists per physical target (port width, active level,
//! bit layout). The state machine is written once against this trait.

/// Drum rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorDirection {
    Left,
    Right,
}

/// Drum rotation speed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorSpeed {
    /// Washing speed
    Slow,
    /// Spin-dry speed
    Fast,
}

/// Actuator outputs of the machine
///
/// Every call is fire-and-forget: when it returns, the physical output has
/// taken the requested level. Implementations must never leave a mixed
/// pattern visible, e.g. two motor speeds at once.
pub trait Actuators {
    /// Lock the door
    fn lock_door(&mut self);

    /// Unlock the door
    fn unlock_door(&mut self);

    /// Open the water inlet valve
    fn open_valve(&mut self);

    /// Close the water inlet valve
    fn close_valve(&mut self);

    /// Turn the heater on
    fn heater_on(&mut self);

    /// Turn the heater off
    fn heater_off(&mut self);

    /// Run the drum motor
    ///
    /// Any previous direction/speed combination is replaced.
    fn motor_on(&mut self, direction: MotorDirection, speed: MotorSpeed);

    /// Stop the drum motor
    fn motor_off(&mut self);

    /// Turn the drain pump on
    fn pump_on(&mut self);

    /// Turn the drain pump off
    fn pump_off(&mut self);

    /// Show a status line
    fn display(&mut self, text: &str);

    /// Current output levels
    fn outputs(&self) -> ActuatorSnapshot;

    /// Drive every actuator to its safe level
    fn all_off(&mut self) {
        self.heater_off();
        self.close_valve();
        self.motor_off();
        self.pump_off();
        self.unlock_door();
    }
}

/// Decoded output levels of all actuators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActuatorSnapshot {
    pub door_locked: bool,
    pub valve_open: bool,
    pub heater_on: bool,
    pub pump_on: bool,
    /// `None` when the motor is off
    pub motor: Option<(MotorDirection, MotorSpeed)>,
}

impl ActuatorSnapshot {
    /// Everything off, door unlocked, valve closed
    pub const SAFE: Self = Self {
        door_locked: false,
        valve_open: false,
        heater_on: false,
        pump_on: false,
        motor: None,
    };

    /// Check if every actuator is at its safe level
    pub fn is_safe(&self) -> bool {
        *self == Self::SAFE
    }
}
