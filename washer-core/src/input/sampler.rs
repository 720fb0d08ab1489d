//! Debouncing input sampler
//!
//! The port is read twice per poll. Two different reads mean a line is
//! bouncing; the poll is discarded and the last stable sample is kept, so
//! the next agreeing poll computes its edges against a value that was
//! really on the wires.
//!
//! Only one event is reported per poll. Edges that lose the priority
//! contest stay pending and are reported by later polls, unless their line
//! goes back first.

use super::classifier::{idle_event, take_edge, Edges, InputMap};
use crate::state::Event;
use crate::timer::CountdownTimer;
use crate::traits::RawInput;

/// Turns a raw input port into one event per poll
pub struct InputSampler<I> {
    input: I,
    map: InputMap,
    /// Last stable sample, masked to the monitored lines
    previous: u8,
    /// Reportable edges not yet turned into an event
    pending: Edges,
}

impl<I: RawInput> InputSampler<I> {
    /// Create a sampler
    ///
    /// The stable sample starts with every monitored line set except the
    /// floater. Lines found low on the first stable poll show up as falling
    /// edges (a closed door reports [`Event::DoorClosed`]) and a drum that
    /// is already full reports [`Event::FloaterHigh`].
    pub fn new(input: I, map: InputMap) -> Self {
        Self {
            input,
            map,
            previous: map.mask() & !map.floater,
            pending: Edges::default(),
        }
    }

    /// Read the port and classify the result
    ///
    /// Returns [`Event::NoEvent`] when the port is unstable this cycle, even
    /// if the timer has expired; the timeout surfaces on the next stable poll.
    pub fn poll(&mut self, timer: &CountdownTimer) -> Event {
        let Some(edges) = self.sample() else {
            return Event::NoEvent;
        };

        let mut edges = self.pending.then(edges).reportable(&self.map);
        let event = take_edge(&mut edges, &self.map);
        self.pending = edges;

        event.unwrap_or_else(|| idle_event(timer.is_expired()))
    }

    /// Take one debounced sample
    fn sample(&mut self) -> Option<Edges> {
        let mask = self.map.mask();
        let first = self.input.read() & mask;
        let second = self.input.read() & mask;

        if first != second {
            #[cfg(feature = "defmt")]
            defmt::trace!("unstable input: {=u8:#04x} / {=u8:#04x}", first, second);
            return None;
        }

        let edges = Edges::between(self.previous, first);
        self.previous = first;
        Some(edges)
    }

    /// Last stable sample
    pub fn stable_sample(&self) -> u8 {
        self.previous
    }

    /// Edges still waiting to be reported
    pub fn pending(&self) -> Edges {
        self.pending
    }
}
