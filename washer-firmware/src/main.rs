//! Washer - Washing Machine Control Firmware
//!
//! Firmware for the STM32F429 lab board. Two tasks share the cycle timer:
//! the tick task advances it every millisecond and the controller task
//! samples the inputs and runs the state machine every poll interval.
//!
//! Board wiring:
//!
//! | Port | Pins    | Function                                        |
//! |------|---------|-------------------------------------------------|
//! | PE   | 0..5    | STOP, SPIN, WASH, door, floater, thermostat     |
//! | PD   | 0..7    | actuator byte, low-active (door lock on PD7)    |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use {defmt_rtt as _, panic_probe as _};

use washer_drivers::{GpioByteActuators, LineBuffer, PortInput};
use washer_hal::{InputBank, OutputBank};

mod channels;
mod tasks;

/// Cycle timings from machine.toml
mod timings {
    include!(concat!(env!("OUT_DIR"), "/timings.rs"));
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Washer firmware starting...");

    let p = embassy_stm32::init(Default::default());
    info!("Peripherals initialized");

    info!(
        "Timings: rotate={}ms spin={}ms poll={}ms",
        timings::ROTATE_MS,
        timings::SPIN_MS,
        timings::POLL_INTERVAL_MS
    );

    // DIP switches read high when on
    let inputs = InputBank::new([
        Input::new(p.PE0, Pull::Down),
        Input::new(p.PE1, Pull::Down),
        Input::new(p.PE2, Pull::Down),
        Input::new(p.PE3, Pull::Down),
        Input::new(p.PE4, Pull::Down),
        Input::new(p.PE5, Pull::Down),
    ]);

    // Start released; the backend writes the inactive word again on takeover
    let outputs = OutputBank::new([
        Output::new(p.PD0, Level::High, Speed::Low),
        Output::new(p.PD1, Level::High, Speed::Low),
        Output::new(p.PD2, Level::High, Speed::Low),
        Output::new(p.PD3, Level::High, Speed::Low),
        Output::new(p.PD4, Level::High, Speed::Low),
        Output::new(p.PD5, Level::High, Speed::Low),
        Output::new(p.PD6, Level::High, Speed::Low),
        Output::new(p.PD7, Level::High, Speed::Low),
    ]);

    let actuators = match GpioByteActuators::new(outputs, LineBuffer::new()) {
        Ok(actuators) => actuators,
        Err(e) => defmt::panic!("Actuator port rejected: {}", e),
    };

    unwrap!(spawner.spawn(tasks::tick_task()));
    unwrap!(spawner.spawn(tasks::controller_task(
        actuators,
        PortInput::new(inputs)
    )));

    info!("All tasks spawned");
}
