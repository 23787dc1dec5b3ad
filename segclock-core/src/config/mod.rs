//! Configuration types
//!
//! Timing and brightness parameters, validated once at start-up.

pub mod types;

pub use types::*;
