//! Edge detection and event priority

use crate::state::Event;

/// Bit assignment of the raw input port
///
/// Each field is the mask of one input line. A set bit means: button
/// pressed, door open, drum full, water hot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputMap {
    pub button_stop: u8,
    pub button_spin: u8,
    pub button_wash: u8,
    pub door: u8,
    pub floater: u8,
    pub thermostat: u8,
}

impl Default for InputMap {
    /// DIP switch layout of the lab board (S0..S5)
    fn default() -> Self {
        Self {
            button_stop: 0x01,
            button_spin: 0x02,
            button_wash: 0x04,
            door: 0x08,
            floater: 0x10,
            thermostat: 0x20,
        }
    }
}

impl InputMap {
    /// Mask covering every monitored line
    pub fn mask(&self) -> u8 {
        self.button_stop
            | self.button_spin
            | self.button_wash
            | self.door
            | self.floater
            | self.thermostat
    }
}

/// Rising and falling edges between two stable samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Edges {
    /// Bits that went 0 -> 1
    pub rising: u8,
    /// Bits that went 1 -> 0
    pub falling: u8,
}

impl Edges {
    /// Compute the edges from `previous` to `current`
    pub fn between(previous: u8, current: u8) -> Self {
        Self {
            rising: !previous & current,
            falling: !current & previous,
        }
    }

    /// Append `later` edges to edges still pending from earlier cycles
    ///
    /// A pending edge whose line has since gone back cancels out together
    /// with the reversing edge.
    pub fn then(self, later: Edges) -> Self {
        let undone_rising = self.rising & later.falling;
        let undone_falling = self.falling & later.rising;
        Self {
            rising: (self.rising & !undone_rising) | (later.rising & !undone_falling),
            falling: (self.falling & !undone_falling) | (later.falling & !undone_rising),
        }
    }

    /// Keep only the edges that map to an event
    pub fn reportable(self, map: &InputMap) -> Self {
        Self {
            rising: self.rising & map.mask(),
            falling: self.falling & (map.door | map.floater),
        }
    }
}

#[derive(Clone, Copy)]
enum Edge {
    Rising,
    Falling,
}

/// Map edges and the timer condition to the highest-priority event
///
/// Buttons come first so that stop preempts anything else that changed in
/// the same cycle. The timer is checked last.
pub fn classify(mut edges: Edges, map: &InputMap, timer_expired: bool) -> Event {
    take_edge(&mut edges, map).unwrap_or_else(|| idle_event(timer_expired))
}

/// Remove the highest-priority edge from `edges` and return its event
pub(crate) fn take_edge(edges: &mut Edges, map: &InputMap) -> Option<Event> {
    let priority = [
        (Edge::Rising, map.button_stop, Event::ButtonStop),
        (Edge::Rising, map.button_wash, Event::ButtonWash),
        (Edge::Rising, map.button_spin, Event::ButtonSpin),
        (Edge::Rising, map.door, Event::DoorOpened),
        (Edge::Falling, map.door, Event::DoorClosed),
        (Edge::Rising, map.floater, Event::FloaterHigh),
        (Edge::Falling, map.floater, Event::FloaterLow),
        (Edge::Rising, map.thermostat, Event::TemperatureHot),
    ];

    priority.iter().find_map(|&(edge, mask, event)| {
        let bits = match edge {
            Edge::Rising => &mut edges.rising,
            Edge::Falling => &mut edges.falling,
        };
        if *bits & mask == 0 {
            return None;
        }
        *bits &= !mask;
        Some(event)
    })
}

/// Event for a cycle without edges
pub(crate) fn idle_event(timer_expired: bool) -> Event {
    if timer_expired {
        Event::TimeOut
    } else {
        Event::NoEvent
    }
}
