//! State machine definition
//!
//! All actuator behavior is a function of the current state and an event.
//! The transition logic itself lives in [`Controller`](super::Controller).

/// Machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Door open, nothing running
    DoorOpen,
    /// Door closed, waiting for a program button
    Idle,
    /// Door locked, inlet valve open until the floater reports full
    FillWater,
    /// Heater on until the thermostat trips
    HeatWater,
    /// Drum turning right at washing speed
    RotateRight,
    /// Drum turning left at washing speed
    RotateLeft,
    /// Pump draining until the floater reports empty
    EmptyWater,
    /// Drum turning left at spin speed
    SpinDry,
    /// Pump draining after a stop or a finished cycle
    ShutDown,
}

impl State {
    /// Every state, in cycle order
    pub const ALL: [State; 9] = [
        State::DoorOpen,
        State::Idle,
        State::FillWater,
        State::HeatWater,
        State::RotateRight,
        State::RotateLeft,
        State::EmptyWater,
        State::SpinDry,
        State::ShutDown,
    ];

    /// Status line text, padded to the display width
    pub fn label(&self) -> &'static str {
        match self {
            State::DoorOpen => "DOOR_OPEN       ",
            State::Idle => "IDLE            ",
            State::FillWater => "FILL_WATER      ",
            State::HeatWater => "HEAT_WATER      ",
            State::RotateRight => "ROTATE_RIGHT    ",
            State::RotateLeft => "ROTATE_LEFT     ",
            State::EmptyWater => "EMPTY_WATER     ",
            State::SpinDry => "SPIN_DRY        ",
            State::ShutDown => "SHUT_DOWN       ",
        }
    }

    /// Check if a wash or spin cycle is in progress
    ///
    /// These are the states the stop button aborts.
    pub fn is_cycle_active(&self) -> bool {
        matches!(
            self,
            State::FillWater
                | State::HeatWater
                | State::RotateRight
                | State::RotateLeft
                | State::EmptyWater
                | State::SpinDry
        )
    }
}
