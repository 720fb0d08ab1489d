//! Cycle timing configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default duration of each rotation phase (ms)
pub const DEFAULT_ROTATE_MS: u32 = 4000;

/// Default duration of the spin-dry phase (ms)
pub const DEFAULT_SPIN_MS: u32 = 5000;

/// Default period of the poll loop (ms)
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 5;

/// Errors found while validating configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Rotation duration is zero
    ZeroRotateDuration,
    /// Spin duration is zero
    ZeroSpinDuration,
    /// Poll interval is zero
    ZeroPollInterval,
    /// Poll interval is not shorter than the cycle phases it has to observe
    PollSlowerThanCycle,
}

/// Durations used by the wash cycle
///
/// All values are in milliseconds, which is also the unit of one timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CycleTimings {
    /// Length of each rotation phase (right, then left)
    pub rotate_ms: u32,
    /// Length of the spin-dry phase
    pub spin_ms: u32,
    /// Period of the input poll loop
    pub poll_interval_ms: u32,
}

impl Default for CycleTimings {
    fn default() -> Self {
        Self {
            rotate_ms: DEFAULT_ROTATE_MS,
            spin_ms: DEFAULT_SPIN_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl CycleTimings {
    /// Check that the timings describe a runnable cycle
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rotate_ms == 0 {
            return Err(ConfigError::ZeroRotateDuration);
        }
        if self.spin_ms == 0 {
            return Err(ConfigError::ZeroSpinDuration);
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        if self.poll_interval_ms >= self.rotate_ms.min(self.spin_ms) {
            return Err(ConfigError::PollSlowerThanCycle);
        }
        Ok(())
    }
}
