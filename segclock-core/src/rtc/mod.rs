//! RTC data model
//!
//! The RTC itself is an external collaborator behind
//! [`RtcClock`](crate::traits::RtcClock). This module holds the snapshot it
//! reports, the calendar arithmetic shared by every driver and the
//! start-up check.

pub mod snapshot;
mod startup;

pub use snapshot::{RtcCommand, RtcSnapshot, UNINITIALIZED_MONTH};
pub use startup::ensure_initialized;
