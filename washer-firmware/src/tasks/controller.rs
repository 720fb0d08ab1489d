//! Main controller task
//!
//! Polls the inputs and feeds the resulting event to the state machine
//! every `POLL_INTERVAL_MS`. Status line changes go to the RTT log.

use defmt::*;
use embassy_stm32::gpio::{Input, Output};
use embassy_time::{Duration, Ticker};

use washer_core::config::CycleTimings;
use washer_core::input::{InputMap, InputSampler};
use washer_core::state::{Controller, Event};
use washer_drivers::{GpioByteActuators, LineBuffer, PortInput};
use washer_hal::{InputBank, OutputBank};

use crate::channels::TIMER;
use crate::timings::{POLL_INTERVAL_MS, ROTATE_MS, SPIN_MS};

/// Actuator byte on PD0..PD7
pub type BoardActuators = GpioByteActuators<OutputBank<Output<'static>, 8>, LineBuffer>;

/// DIP switches on PE0..PE5
pub type BoardInput = PortInput<InputBank<Input<'static>, 6>>;

/// Controller task - main poll loop
#[embassy_executor::task]
pub async fn controller_task(mut actuators: BoardActuators, input: BoardInput) {
    info!("Controller task started");

    let mut controller = Controller::new(CycleTimings {
        rotate_ms: ROTATE_MS,
        spin_ms: SPIN_MS,
        poll_interval_ms: POLL_INTERVAL_MS,
    });
    let mut sampler = InputSampler::new(input, InputMap::default());

    TIMER.lock(|timer| controller.init(&mut actuators, &mut timer.borrow_mut()));
    report_status(&mut actuators);

    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS as u64));

    loop {
        ticker.next().await;

        let event = TIMER.lock(|timer| {
            let mut timer = timer.borrow_mut();
            let event = sampler.poll(&timer);
            controller.handle_event(event, &mut actuators, &mut timer);
            event
        });

        if event != Event::NoEvent {
            debug!("{} -> {}", event, controller.state());
        }
        report_status(&mut actuators);
    }
}

/// Log the status line if it changed
fn report_status(actuators: &mut BoardActuators) {
    if let Some(text) = actuators.display_mut().take_update() {
        info!("Status: {=str}", text);
    }
}
