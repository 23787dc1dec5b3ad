//! Idle tracking for the sleep/wake cycle

pub mod manager;

pub use manager::{PowerAction, PowerManager};
