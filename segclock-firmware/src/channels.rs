//! Shared state between the two tasks
//!
//! The scan task runs on the interrupt executor and preempts the loop
//! task. Every access to [`TICK_CONTEXT`] is a critical section, which
//! masks the scan task's interrupt for its duration.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::signal::Signal;

use segclock_core::tick::TickContext;

use crate::config::CONFIG;

/// Tick-side state: multiplexer, committed image, debounce channels
pub static TICK_CONTEXT: Mutex<CriticalSectionRawMutex, RefCell<TickContext>> =
    Mutex::new(RefCell::new(TickContext::new(&CONFIG)));

/// Loop asks the scan task to quiesce the display and wait for button 1
pub static SLEEP_REQUEST: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Scan task reports the wake press
pub static WAKE: Signal<CriticalSectionRawMutex, ()> = Signal::new();
