//! Real-time clock trait

use crate::rtc::{RtcCommand, RtcSnapshot};

/// Errors that can occur talking to the RTC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RtcError {
    /// Bus transfer failed
    Bus,
    /// Device returned a value outside its register range
    InvalidData,
}

/// Trait for the external real-time clock
///
/// Reading never fails: a driver that cannot reach the device returns the
/// last snapshot it read successfully. Mutations are discrete steps, each
/// safe to issue once per qualifying button edge.
pub trait RtcClock {
    /// Read the current date and time
    fn read_snapshot(&mut self) -> RtcSnapshot;

    /// Advance the hour by one, wrapping within the current format
    fn increment_hour(&mut self) -> Result<(), RtcError>;

    /// Advance the minute by one, wrapping at 60
    fn increment_minute(&mut self) -> Result<(), RtcError>;

    /// Advance the day of month by one, wrapping at the month's length
    fn increment_day(&mut self) -> Result<(), RtcError>;

    /// Advance the month by one, wrapping at 12
    fn increment_month(&mut self) -> Result<(), RtcError>;

    /// Advance the two-digit year by one, wrapping at 99
    fn increment_year(&mut self) -> Result<(), RtcError>;

    /// Switch between 12 and 24 hour format, keeping the time of day
    fn toggle_hour_format(&mut self) -> Result<(), RtcError>;

    /// Load the factory date and time
    fn reset_to_default(&mut self) -> Result<(), RtcError>;

    /// Execute a mutation request produced by the state machine
    fn apply(&mut self, command: RtcCommand) -> Result<(), RtcError> {
        match command {
            RtcCommand::IncrementHour => self.increment_hour(),
            RtcCommand::IncrementMinute => self.increment_minute(),
            RtcCommand::IncrementDay => self.increment_day(),
            RtcCommand::IncrementMonth => self.increment_month(),
            RtcCommand::IncrementYear => self.increment_year(),
            RtcCommand::ToggleHourFormat => self.toggle_hour_format(),
        }
    }
}
