//! RP2040-specific HAL for the clock firmware
//!
//! This crate provides RP2040 implementations of the `segclock-core`
//! hardware traits:
//!
//! - Multiplexed 7-segment display on twelve GPIO outputs
//! - Two active-low buttons with pull-ups, and the button 1 wake source
//! - Watchdog serviced by the loop

#![no_std]

pub mod buttons;
pub mod display;
pub mod watchdog;

pub use buttons::ButtonPins;
pub use display::SegmentDisplay;
pub use watchdog::LoopWatchdog;
