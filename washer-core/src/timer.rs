//! Countdown timer
//!
//! A single countdown register. The value is decremented by an external
//! periodic source calling [`CountdownTimer::tick`]; the control loop only
//! starts, stops and polls it.

/// Millisecond countdown timer
///
/// Expiry is a level condition: once a running timer reaches zero,
/// [`is_expired`](Self::is_expired) keeps returning `true` until the timer
/// is restarted or stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CountdownTimer {
    /// Ticks left before expiry
    remaining: u32,
    /// Whether the countdown is active
    running: bool,
}

impl CountdownTimer {
    /// Create a stopped timer
    pub const fn new() -> Self {
        Self {
            remaining: 0,
            running: false,
        }
    }

    /// Load the countdown and start it
    ///
    /// Restarting a running timer discards the old countdown.
    pub fn start(&mut self, ticks: u32) {
        self.remaining = ticks;
        self.running = true;
    }

    /// Stop the countdown
    ///
    /// The remaining value is meaningless afterwards.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advance the countdown by one tick
    ///
    /// Called from the periodic tick source, never from the control loop.
    pub fn tick(&mut self) {
        if self.running {
            self.remaining = self.remaining.saturating_sub(1);
        }
    }

    /// Ticks left before expiry
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Check if the countdown is active
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Check if a running countdown has reached zero
    pub fn is_expired(&self) -> bool {
        self.running && self.remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_timer_is_not_expired() {
        let timer = CountdownTimer::new();
        assert!(!timer.is_running());
        assert!(!timer.is_expired());
    }

    #[test]
    fn test_countdown_expires() {
        let mut timer = CountdownTimer::new();
        timer.start(3);

        timer.tick();
        timer.tick();
        assert_eq!(timer.remaining(), 1);
        assert!(!timer.is_expired());

        timer.tick();
        assert!(timer.is_expired());
    }

    #[test]
    fn test_expiry_is_a_level() {
        let mut timer = CountdownTimer::new();
        timer.start(1);
        timer.tick();

        // Stays expired and clamped at zero
        for _ in 0..10 {
            timer.tick();
            assert!(timer.is_expired());
            assert_eq!(timer.remaining(), 0);
        }
    }

    #[test]
    fn test_stop_clears_expiry() {
        let mut timer = CountdownTimer::new();
        timer.start(0);
        assert!(timer.is_expired());

        timer.stop();
        assert!(!timer.is_expired());
    }

    #[test]
    fn test_stopped_timer_does_not_count() {
        let mut timer = CountdownTimer::new();
        timer.start(5);
        timer.stop();
        timer.tick();
        assert_eq!(timer.remaining(), 5);
    }

    #[test]
    fn test_restart_reloads() {
        let mut timer = CountdownTimer::new();
        timer.start(2);
        timer.tick();
        timer.tick();
        assert!(timer.is_expired());

        timer.start(4);
        assert!(!timer.is_expired());
        assert_eq!(timer.remaining(), 4);
    }
}
