//! Full poll loop scenarios: raw input -> sampler -> controller -> actuators

mod common;

use common::{Panel, Recorder};
use washer_core::config::CycleTimings;
use washer_core::input::{InputMap, InputSampler};
use washer_core::state::{Controller, Event, State};
use washer_core::timer::CountdownTimer;
use washer_core::traits::{Actuators, MotorDirection, MotorSpeed};

const STOP: u8 = 0x01;
const SPIN: u8 = 0x02;
const WASH: u8 = 0x04;
const DOOR: u8 = 0x08;
const FLOATER: u8 = 0x10;
const THERMOSTAT: u8 = 0x20;

const TIMINGS: CycleTimings = CycleTimings {
    rotate_ms: 40,
    spin_ms: 50,
    poll_interval_ms: 1,
};

struct Machine {
    panel: Panel,
    sampler: InputSampler<Panel>,
    controller: Controller,
    out: Recorder,
    timer: CountdownTimer,
}

impl Machine {
    /// Power on with the door open and the drum empty
    fn power_on() -> Self {
        let panel = Panel::default();
        panel.set(DOOR);

        let mut machine = Self {
            sampler: InputSampler::new(panel.clone(), InputMap::default()),
            panel,
            controller: Controller::new(TIMINGS),
            out: Recorder::default(),
            timer: CountdownTimer::new(),
        };
        machine
            .controller
            .init(&mut machine.out, &mut machine.timer);
        machine
    }

    /// One iteration of the driver loop
    fn step(&mut self) -> Event {
        let event = self.sampler.poll(&self.timer);
        self.controller
            .handle_event(event, &mut self.out, &mut self.timer);
        event
    }

    /// Let `ticks` timer ticks elapse, polling once per tick
    fn run(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.timer.tick();
            self.step();
        }
    }

    fn press(&mut self, button: u8) -> Event {
        self.panel.set(button);
        let event = self.step();
        self.panel.clear(button);
        self.step();
        event
    }

    fn state(&self) -> State {
        self.controller.state()
    }
}

#[test]
fn full_wash_cycle() {
    let mut m = Machine::power_on();
    assert_eq!(m.state(), State::DoorOpen);
    assert_eq!(m.out.text, State::DoorOpen.label());

    // Door still open, drum empty: nothing to report
    assert_eq!(m.step(), Event::NoEvent);
    assert_eq!(m.state(), State::DoorOpen);

    m.panel.clear(DOOR);
    assert_eq!(m.step(), Event::DoorClosed);
    assert_eq!(m.state(), State::Idle);

    assert_eq!(m.press(WASH), Event::ButtonWash);
    assert_eq!(m.state(), State::FillWater);
    assert!(m.out.outputs.door_locked);
    assert!(m.out.outputs.valve_open);

    m.panel.set(FLOATER);
    assert_eq!(m.step(), Event::FloaterHigh);
    assert_eq!(m.state(), State::HeatWater);
    assert!(!m.out.outputs.valve_open);
    assert!(m.out.outputs.heater_on);

    m.panel.set(THERMOSTAT);
    assert_eq!(m.step(), Event::TemperatureHot);
    assert_eq!(m.state(), State::RotateRight);
    assert!(!m.out.outputs.heater_on);
    assert_eq!(
        m.out.outputs.motor,
        Some((MotorDirection::Right, MotorSpeed::Slow))
    );
    assert_eq!(m.timer.remaining(), TIMINGS.rotate_ms);

    m.run(TIMINGS.rotate_ms - 1);
    assert_eq!(m.state(), State::RotateRight);
    m.run(1);
    assert_eq!(m.state(), State::RotateLeft);
    assert_eq!(
        m.out.outputs.motor,
        Some((MotorDirection::Left, MotorSpeed::Slow))
    );

    m.run(TIMINGS.rotate_ms);
    assert_eq!(m.state(), State::EmptyWater);
    assert_eq!(m.out.outputs.motor, None);
    assert!(m.out.outputs.pump_on);

    // Expired rotate timer keeps reporting timeouts; draining ignores them
    assert_eq!(m.step(), Event::TimeOut);
    assert_eq!(m.state(), State::EmptyWater);

    m.panel.clear(FLOATER | THERMOSTAT);
    assert_eq!(m.step(), Event::FloaterLow);
    assert_eq!(m.state(), State::SpinDry);
    assert!(!m.out.outputs.pump_on);
    assert_eq!(
        m.out.outputs.motor,
        Some((MotorDirection::Left, MotorSpeed::Fast))
    );

    m.run(TIMINGS.spin_ms);
    // Shut-down is left on the next poll because the drum is already empty
    assert_eq!(m.state(), State::ShutDown);
    m.step();
    assert_eq!(m.state(), State::Idle);
    assert!(m.out.outputs().is_safe());
    assert_eq!(m.out.text, State::Idle.label());
}

#[test]
fn stop_and_door_in_same_poll() {
    let mut m = Machine::power_on();
    m.panel.clear(DOOR);
    m.step();
    m.press(WASH);
    m.panel.set(FLOATER);
    m.step();
    m.panel.set(THERMOSTAT);
    m.step();
    assert_eq!(m.state(), State::RotateRight);

    m.panel.set(STOP | DOOR);
    assert_eq!(m.step(), Event::ButtonStop);
    assert_eq!(m.state(), State::ShutDown);
    assert!(!m.timer.is_running());

    let outputs = m.out.outputs();
    assert_eq!(outputs.motor, None);
    assert!(!outputs.heater_on);
    assert!(!outputs.valve_open);
    assert!(outputs.pump_on);
}

#[test]
fn spin_only_cycle() {
    let mut m = Machine::power_on();
    m.panel.clear(DOOR);
    m.step();
    assert_eq!(m.state(), State::Idle);

    assert_eq!(m.press(SPIN), Event::ButtonSpin);
    // Drum was already empty: spin starts on the release poll
    assert_eq!(m.state(), State::SpinDry);

    m.run(TIMINGS.spin_ms + 1);
    assert_eq!(m.state(), State::Idle);
    assert!(m.out.outputs().is_safe());
}

#[test]
fn stop_and_floater_in_same_poll() {
    let mut m = Machine::power_on();
    m.panel.clear(DOOR);
    m.step();
    m.press(WASH);
    assert_eq!(m.state(), State::FillWater);

    m.panel.set(STOP | FLOATER);
    assert_eq!(m.step(), Event::ButtonStop);
    assert_eq!(m.state(), State::ShutDown);

    // The floater edge lost to stop and is reported next
    assert_eq!(m.step(), Event::FloaterHigh);
    for _ in 0..5 {
        m.step();
    }
    assert_eq!(m.state(), State::ShutDown);
    assert!(m.out.outputs.door_locked);
    assert!(m.out.outputs.pump_on);

    m.panel.clear(STOP | FLOATER);
    assert_eq!(m.step(), Event::FloaterLow);
    assert_eq!(m.state(), State::Idle);
    assert!(m.out.outputs().is_safe());
}

#[test]
fn full_drum_at_power_on_blocks_spin() {
    let mut m = Machine::power_on();
    m.panel.clear(DOOR);
    m.panel.set(FLOATER);

    assert_eq!(m.step(), Event::DoorClosed);
    assert_eq!(m.step(), Event::FloaterHigh);
    assert_eq!(m.state(), State::Idle);

    assert_eq!(m.press(SPIN), Event::ButtonSpin);
    m.run(10);
    assert_eq!(m.state(), State::EmptyWater);
    assert!(m.out.outputs.pump_on);
    assert_eq!(m.out.outputs.motor, None);

    m.panel.clear(FLOATER);
    assert_eq!(m.step(), Event::FloaterLow);
    assert_eq!(m.state(), State::SpinDry);
}

#[test]
fn bouncing_button_is_filtered() {
    let mut m = Machine::power_on();
    m.panel.clear(DOOR);
    m.step();
    assert_eq!(m.state(), State::Idle);

    // Two steady reads, five polls of bounce, then the button is held
    let panel = m.panel.clone();
    let mut reads = 0u32;
    let bouncing = move || {
        reads += 1;
        match reads {
            1..=2 => panel.level(),
            3..=12 if reads % 2 == 1 => panel.level() | WASH,
            3..=12 => panel.level(),
            _ => panel.level() | WASH,
        }
    };
    let mut sampler = InputSampler::new(bouncing, InputMap::default());

    let mut poll = |m: &mut Machine| {
        let event = sampler.poll(&m.timer);
        m.controller.handle_event(event, &mut m.out, &mut m.timer);
        event
    };

    // A fresh sampler sees the closed door once; the controller is already idle
    assert_eq!(poll(&mut m), Event::DoorClosed);
    assert_eq!(m.state(), State::Idle);

    for _ in 0..5 {
        assert_eq!(poll(&mut m), Event::NoEvent);
    }
    assert_eq!(m.state(), State::Idle);

    // Settled: one press relative to the last stable sample
    assert_eq!(poll(&mut m), Event::ButtonWash);
    assert_eq!(m.state(), State::FillWater);
    for _ in 0..5 {
        assert_eq!(poll(&mut m), Event::NoEvent);
    }
    assert_eq!(m.state(), State::FillWater);
}
