//! Board-agnostic core logic for the four digit LED clock
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (display port, buttons, RTC, watchdog)
//! - Display multiplexing, segment encoding and rendering
//! - Button debouncing and the per-mode edge protocol
//! - Keyboard mode state machine
//! - Idle tracking for the sleep/wake cycle
//! - Configuration type definitions
//!
//! State is split into two aggregates: [`tick::TickContext`] is written by
//! the periodic interrupt, [`clock::Clock`] by the cooperative loop.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod clock;
pub mod config;
pub mod display;
pub mod input;
pub mod power;
pub mod rtc;
pub mod state;
pub mod tick;
pub mod traits;
