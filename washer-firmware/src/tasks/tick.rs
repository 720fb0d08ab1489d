//! Tick task for the cycle timer
//!
//! Advances the shared countdown timer by one tick every millisecond.

use defmt::*;
use embassy_time::{Duration, Ticker};

use crate::channels::TIMER;

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u64 = 1;

/// Tick task - decrements the timer while it runs
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));

    loop {
        ticker.next().await;
        TIMER.lock(|timer| timer.borrow_mut().tick());
    }
}
