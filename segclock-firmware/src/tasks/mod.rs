//! Embassy async tasks
//!
//! The scan task is the periodic tick; the clock task is the cooperative
//! loop. They share state only through [`crate::channels`].

pub mod clock;
pub mod scan;

pub use clock::clock_task;
pub use scan::scan_task;
