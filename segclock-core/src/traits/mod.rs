//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod display;
pub mod input;
pub mod power;
pub mod rtc;

pub use display::DisplayPort;
pub use input::ButtonInputs;
pub use power::Watchdog;
pub use rtc::{RtcClock, RtcError};
