//! Wash cycle controller
//!
//! Owns the current state and the latched water level. The driver loop
//! passes the actuators and the shared timer into every call, so the
//! controller holds no reference to hardware.

use super::events::{Event, WaterLevel};
use super::machine::State;
use crate::config::CycleTimings;
use crate::timer::CountdownTimer;
use crate::traits::{Actuators, MotorDirection, MotorSpeed};

/// Wash cycle state machine
#[derive(Debug, Clone)]
pub struct Controller {
    /// Current machine state
    state: State,
    /// Level reported by the last floater event
    water_level: WaterLevel,
    /// Phase durations
    timings: CycleTimings,
}

impl Controller {
    /// Create a controller in the door-open state
    ///
    /// Call [`init`](Self::init) before the first event to bring the
    /// actuators into the matching configuration.
    pub fn new(timings: CycleTimings) -> Self {
        Self {
            state: State::DoorOpen,
            water_level: WaterLevel::Low,
            timings,
        }
    }

    /// Reset to the safe door-open configuration
    ///
    /// Drives every actuator off regardless of what the outputs were before
    /// power-on, stops the timer and shows the door-open text.
    pub fn init<A: Actuators>(&mut self, out: &mut A, timer: &mut CountdownTimer) {
        out.all_off();
        timer.stop();

        self.state = State::DoorOpen;
        out.display(self.state.label());

        #[cfg(feature = "defmt")]
        defmt::info!("Washer initialized in {}", self.state);
    }

    /// Get current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Get latched water level
    pub fn water_level(&self) -> WaterLevel {
        self.water_level
    }

    /// Get configured phase durations
    pub fn timings(&self) -> &CycleTimings {
        &self.timings
    }

    /// Process one event
    ///
    /// Unknown (state, event) pairs leave state and outputs untouched.
    pub fn handle_event<A: Actuators>(
        &mut self,
        event: Event,
        out: &mut A,
        timer: &mut CountdownTimer,
    ) {
        if let Some(level) = event.water_level() {
            self.water_level = level;
        }

        if event == Event::ButtonStop && self.state.is_cycle_active() {
            self.shut_down(out, timer);
            return;
        }

        use Event::*;
        use State::*;

        let full = self.water_level == WaterLevel::High;
        let empty = self.water_level == WaterLevel::Low;

        match (self.state, event) {
            (DoorOpen, DoorClosed) => self.enter(Idle, event, out),

            (Idle, DoorOpened) => self.enter(DoorOpen, event, out),
            (Idle, ButtonWash) => {
                out.lock_door();
                out.open_valve();
                self.enter(FillWater, event, out);
            }
            (Idle, ButtonSpin) => {
                out.pump_on();
                self.enter(EmptyWater, event, out);
            }

            // Level guards: any event re-checks the latched level
            (FillWater, _) if full => {
                out.close_valve();
                out.heater_on();
                self.enter(HeatWater, event, out);
            }

            (HeatWater, TemperatureHot) => {
                out.heater_off();
                out.motor_on(MotorDirection::Right, MotorSpeed::Slow);
                timer.start(self.timings.rotate_ms);
                self.enter(RotateRight, event, out);
            }

            (RotateRight, TimeOut) => {
                out.motor_off();
                out.motor_on(MotorDirection::Left, MotorSpeed::Slow);
                timer.start(self.timings.rotate_ms);
                self.enter(RotateLeft, event, out);
            }

            (RotateLeft, TimeOut) => {
                out.motor_off();
                out.pump_on();
                self.enter(EmptyWater, event, out);
            }

            (EmptyWater, _) if empty => {
                out.pump_off();
                out.motor_on(MotorDirection::Left, MotorSpeed::Fast);
                timer.start(self.timings.spin_ms);
                self.enter(SpinDry, event, out);
            }

            (SpinDry, TimeOut) => {
                out.motor_off();
                out.close_valve();
                out.pump_on();
                self.enter(ShutDown, event, out);
            }

            // Stop while already shutting down changes nothing
            (ShutDown, ButtonStop) => {}
            (ShutDown, _) if empty => {
                out.pump_off();
                out.unlock_door();
                self.enter(Idle, event, out);
            }

            _ => {}
        }
    }

    /// Abort the running cycle and drain the drum
    fn shut_down<A: Actuators>(&mut self, out: &mut A, timer: &mut CountdownTimer) {
        timer.stop();
        out.motor_off();
        out.heater_off();
        out.close_valve();
        out.pump_on();

        #[cfg(feature = "defmt")]
        defmt::info!("Stop pressed in {}, shutting down", self.state);

        self.enter(State::ShutDown, Event::ButtonStop, out);
    }

    fn enter<A: Actuators>(&mut self, next: State, _event: Event, out: &mut A) {
        #[cfg(feature = "defmt")]
        defmt::debug!("{} -> {} on {}", self.state, next, _event);

        self.state = next;
        out.display(next.label());
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(CycleTimings::default())
    }
}
