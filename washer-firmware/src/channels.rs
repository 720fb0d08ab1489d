//! State shared between tasks

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use washer_core::timer::CountdownTimer;

/// Cycle timer, ticked by the tick task and armed by the controller task
pub static TIMER: Mutex<CriticalSectionRawMutex, RefCell<CountdownTimer>> =
    Mutex::new(RefCell::new(CountdownTimer::new()));
