//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in segclock-core for external peripherals:
//!
//! - Real-time clocks (DS3231 over I2C)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod rtc;
