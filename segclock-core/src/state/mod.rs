//! Keyboard mode state machine
//!
//! Pure transition and dispatch tables. The mutable side (edge detectors,
//! blink flags, the `change_mode` reset) lives in [`crate::clock::Clock`].

pub mod machine;

pub use machine::{BlinkPair, Edit, KeyboardMode, Press};
