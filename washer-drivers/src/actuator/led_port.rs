//! Lab board LED word layout
//!
//! 32 high-active LEDs, one nibble per actuator. Each motor
//! direction/speed combination has its own LED, so exactly one of the four
//! upper LEDs is lit while the drum turns.

use washer_core::traits::{MotorDirection, MotorSpeed};

use super::PortLayout;

/// Lab board LED word, high-active
pub struct LedWordLayout;

impl LedWordLayout {
    const RIGHT_SLOW: u32 = 0x0001_0000;
    const RIGHT_FAST: u32 = 0x0010_0000;
    const LEFT_SLOW: u32 = 0x0100_0000;
    const LEFT_FAST: u32 = 0x1000_0000;
}

impl PortLayout for LedWordLayout {
    const WIDTH: u8 = 32;
    const ACTIVE_LOW: bool = false;

    const DOOR_LOCK: u32 = 0x0000_0001;
    const VALVE: u32 = 0x0000_0010;
    const HEATER: u32 = 0x0000_0100;
    const PUMP: u32 = 0x0000_1000;
    /// Upper half of the word
    const MOTOR: u32 = 0xFFFF_0000;

    fn motor_lines(direction: MotorDirection, speed: MotorSpeed) -> u32 {
        match (direction, speed) {
            (MotorDirection::Right, MotorSpeed::Slow) => Self::RIGHT_SLOW,
            (MotorDirection::Right, MotorSpeed::Fast) => Self::RIGHT_FAST,
            (MotorDirection::Left, MotorSpeed::Slow) => Self::LEFT_SLOW,
            (MotorDirection::Left, MotorSpeed::Fast) => Self::LEFT_FAST,
        }
    }

    fn decode_motor(asserted: u32) -> Option<(MotorDirection, MotorSpeed)> {
        [
            (Self::RIGHT_SLOW, MotorDirection::Right, MotorSpeed::Slow),
            (Self::RIGHT_FAST, MotorDirection::Right, MotorSpeed::Fast),
            (Self::LEFT_SLOW, MotorDirection::Left, MotorSpeed::Slow),
            (Self::LEFT_FAST, MotorDirection::Left, MotorSpeed::Fast),
        ]
        .into_iter()
        .find(|&(mask, _, _)| asserted & mask != 0)
        .map(|(_, direction, speed)| (direction, speed))
    }
}
