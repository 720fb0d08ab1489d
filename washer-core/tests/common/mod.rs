//! Shared test fixtures

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;
use std::string::String;

use washer_core::traits::{ActuatorSnapshot, Actuators, MotorDirection, MotorSpeed};

/// Actuator mock recording output levels and the status line
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    pub outputs: ActuatorSnapshot,
    pub text: String,
    pub calls: usize,
}

impl Actuators for Recorder {
    fn lock_door(&mut self) {
        self.calls += 1;
        self.outputs.door_locked = true;
    }
    fn unlock_door(&mut self) {
        self.calls += 1;
        self.outputs.door_locked = false;
    }
    fn open_valve(&mut self) {
        self.calls += 1;
        self.outputs.valve_open = true;
    }
    fn close_valve(&mut self) {
        self.calls += 1;
        self.outputs.valve_open = false;
    }
    fn heater_on(&mut self) {
        self.calls += 1;
        self.outputs.heater_on = true;
    }
    fn heater_off(&mut self) {
        self.calls += 1;
        self.outputs.heater_on = false;
    }
    fn motor_on(&mut self, direction: MotorDirection, speed: MotorSpeed) {
        self.calls += 1;
        self.outputs.motor = Some((direction, speed));
    }
    fn motor_off(&mut self) {
        self.calls += 1;
        self.outputs.motor = None;
    }
    fn pump_on(&mut self) {
        self.calls += 1;
        self.outputs.pump_on = true;
    }
    fn pump_off(&mut self) {
        self.calls += 1;
        self.outputs.pump_on = false;
    }
    fn display(&mut self, text: &str) {
        self.calls += 1;
        self.text = text.into();
    }
    fn outputs(&self) -> ActuatorSnapshot {
        self.outputs
    }
}

/// Raw input whose level the test sets between polls
///
/// Clones share the same level, so one copy can live inside the sampler
/// while the test keeps another.
#[derive(Debug, Default, Clone)]
pub struct Panel {
    level: Rc<Cell<u8>>,
}

impl Panel {
    pub fn set(&self, bits: u8) {
        self.level.set(self.level.get() | bits);
    }

    pub fn clear(&self, bits: u8) {
        self.level.set(self.level.get() & !bits);
    }

    pub fn level(&self) -> u8 {
        self.level.get()
    }
}

impl washer_core::traits::RawInput for Panel {
    fn read(&mut self) -> u8 {
        self.level.get()
    }
}
