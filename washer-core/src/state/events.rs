//! Events that trigger state transitions

/// Events produced by the input sampler, one per poll cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Nothing changed this cycle
    NoEvent,
    /// Running countdown reached zero
    TimeOut,

    // Door switch
    /// Door switch went open
    DoorOpened,
    /// Door switch went closed
    DoorClosed,

    // Front panel buttons
    /// Start a wash cycle
    ButtonWash,
    /// Start a drain-and-spin cycle
    ButtonSpin,
    /// Abort the running cycle
    ButtonStop,

    // Sensors
    /// Floater reports a full drum
    FloaterHigh,
    /// Floater reports an empty drum
    FloaterLow,
    /// Thermostat reached washing temperature
    TemperatureHot,
}

impl Event {
    /// Every event, in declaration order
    pub const ALL: [Event; 10] = [
        Event::NoEvent,
        Event::TimeOut,
        Event::DoorOpened,
        Event::DoorClosed,
        Event::ButtonWash,
        Event::ButtonSpin,
        Event::ButtonStop,
        Event::FloaterHigh,
        Event::FloaterLow,
        Event::TemperatureHot,
    ];

    /// Water level reported by this event, if it is a floater event
    pub fn water_level(&self) -> Option<WaterLevel> {
        match self {
            Event::FloaterHigh => Some(WaterLevel::High),
            Event::FloaterLow => Some(WaterLevel::Low),
            _ => None,
        }
    }
}

/// Water level latched from the last floater event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WaterLevel {
    /// Drum full
    High,
    /// Drum empty
    #[default]
    Low,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floater_events_carry_level() {
        assert_eq!(Event::FloaterHigh.water_level(), Some(WaterLevel::High));
        assert_eq!(Event::FloaterLow.water_level(), Some(WaterLevel::Low));
        assert_eq!(Event::TemperatureHot.water_level(), None);
    }

    #[test]
    fn test_all_events_are_distinct() {
        for (i, a) in Event::ALL.iter().enumerate() {
            for b in &Event::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
