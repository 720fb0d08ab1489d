//! Lab board GPIO byte layout
//!
//! Eight low-active lines on GPIO port P1. Writing `0xFF` switches
//! everything off.
//!
//! | Bit | Line         | Active (low) means   |
//! |-----|--------------|----------------------|
//! | 7   | door lock    | door locked          |
//! | 6   | valve        | valve open           |
//! | 5   | heater       | heater on            |
//! | 4   | pump         | pump on              |
//! | 3   | motor slow   | motor at wash speed  |
//! | 2   | motor fast   | motor at spin speed  |
//! | 1   | motor right  | turning right        |
//!
//! The direction line only matters while one of the speed lines is
//! active; left is the released direction line.

use washer_core::traits::{MotorDirection, MotorSpeed};

use super::PortLayout;

/// Lab board GPIO byte, low-active
pub struct GpioByteLayout;

impl GpioByteLayout {
    const MOTOR_SLOW: u32 = 0x08;
    const MOTOR_FAST: u32 = 0x04;
    const MOTOR_RIGHT: u32 = 0x02;
}

impl PortLayout for GpioByteLayout {
    const WIDTH: u8 = 8;
    const ACTIVE_LOW: bool = true;

    const DOOR_LOCK: u32 = 0x80;
    const VALVE: u32 = 0x40;
    const HEATER: u32 = 0x20;
    const PUMP: u32 = 0x10;
    const MOTOR: u32 = Self::MOTOR_SLOW | Self::MOTOR_FAST | Self::MOTOR_RIGHT;

    fn motor_lines(direction: MotorDirection, speed: MotorSpeed) -> u32 {
        let speed = match speed {
            MotorSpeed::Slow => Self::MOTOR_SLOW,
            MotorSpeed::Fast => Self::MOTOR_FAST,
        };
        match direction {
            MotorDirection::Right => speed | Self::MOTOR_RIGHT,
            MotorDirection::Left => speed,
        }
    }

    fn decode_motor(asserted: u32) -> Option<(MotorDirection, MotorSpeed)> {
        let speed = if asserted & Self::MOTOR_SLOW != 0 {
            MotorSpeed::Slow
        } else if asserted & Self::MOTOR_FAST != 0 {
            MotorSpeed::Fast
        } else {
            return None;
        };

        let direction = if asserted & Self::MOTOR_RIGHT != 0 {
            MotorDirection::Right
        } else {
            MotorDirection::Left
        };

        Some((direction, speed))
    }
}
