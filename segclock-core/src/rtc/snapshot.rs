//! RTC snapshot and mutation requests
//!
//! Calendar rules (month lengths, leap years, weekdays) come from
//! `chrono`; a snapshot only ever names dates in 2000-2099.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Month value reported by an RTC that has never been set
pub const UNINITIALIZED_MONTH: u8 = 0;

/// Discrete mutation requests issued by the keyboard state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RtcCommand {
    IncrementHour,
    IncrementMinute,
    IncrementDay,
    IncrementMonth,
    IncrementYear,
    ToggleHourFormat,
}

/// Date and time as read from the RTC, in plain decimal
///
/// In 24 hour mode `hours` is 0-23 and `pm` is ignored. In 12 hour mode
/// `hours` is 1-12 and `pm` selects the half of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RtcSnapshot {
    pub seconds: u8,
    pub minutes: u8,
    pub hours: u8,
    /// Day of week, Sunday = 1
    pub weekday: u8,
    pub day: u8,
    pub month: u8,
    /// Two digit year, 2000-2099
    pub year: u8,
    pub hour_12: bool,
    pub pm: bool,
}

impl RtcSnapshot {
    /// Factory date: Saturday 2000-01-01 00:00:00, 24 hour format
    pub const DEFAULT: Self = Self {
        seconds: 0,
        minutes: 0,
        hours: 0,
        weekday: 7,
        day: 1,
        month: 1,
        year: 0,
        hour_12: false,
        pm: false,
    };

    /// Snapshot carrying the "never set" sentinel
    pub const UNINITIALIZED: Self = Self {
        month: UNINITIALIZED_MONTH,
        ..Self::DEFAULT
    };

    /// Check for the "never set" sentinel
    pub fn is_uninitialized(&self) -> bool {
        self.month == UNINITIALIZED_MONTH
    }

    /// Hour of day in 0-23 regardless of format
    pub fn hours_24(&self) -> u8 {
        if !self.hour_12 {
            return self.hours;
        }
        match (self.hours, self.pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, false) => h,
            (h, true) => h + 12,
        }
    }

    /// Snapshot of `datetime`, with the hour shown in 12 or 24 hour form
    ///
    /// The century is dropped; years read back modulo 100.
    pub fn from_datetime(datetime: &NaiveDateTime, hour_12: bool) -> Self {
        let hours_24 = datetime.hour() as u8;
        let (hours, pm) = if hour_12 {
            let hours = match hours_24 % 12 {
                0 => 12,
                h => h,
            };
            (hours, hours_24 >= 12)
        } else {
            (hours_24, false)
        };

        Self {
            seconds: datetime.second() as u8,
            minutes: datetime.minute() as u8,
            hours,
            weekday: datetime.weekday().number_from_sunday() as u8,
            day: datetime.day() as u8,
            month: datetime.month() as u8,
            year: datetime.year().rem_euclid(100) as u8,
            hour_12,
            pm,
        }
    }

    /// Calendar date, if the snapshot names a real one
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2000 + self.year as i32, self.month as u32, self.day as u32)
    }

    /// Date and time in 24 hour form, if the snapshot names a real one
    pub fn to_datetime(&self) -> Option<NaiveDateTime> {
        self.date()?.and_hms_opt(
            self.hours_24() as u32,
            self.minutes as u32,
            self.seconds as u32,
        )
    }

    /// Result of applying `command` to this snapshot
    pub fn with_command(self, command: RtcCommand) -> Self {
        match command {
            RtcCommand::IncrementHour => self.next_hour(),
            RtcCommand::IncrementMinute => self.next_minute(),
            RtcCommand::IncrementDay => self.next_day(),
            RtcCommand::IncrementMonth => self.next_month(),
            RtcCommand::IncrementYear => self.next_year(),
            RtcCommand::ToggleHourFormat => self.toggled_format(),
        }
    }

    fn next_hour(mut self) -> Self {
        if self.hour_12 {
            match self.hours {
                11 => {
                    self.hours = 12;
                    self.pm = !self.pm;
                }
                h if h >= 12 => self.hours = 1,
                h => self.hours = h + 1,
            }
        } else {
            self.hours = if self.hours >= 23 { 0 } else { self.hours + 1 };
        }
        self
    }

    fn next_minute(mut self) -> Self {
        self.minutes = if self.minutes >= 59 { 0 } else { self.minutes + 1 };
        self
    }

    fn next_day(mut self) -> Self {
        let month = self.month as u32;
        self.day = match self.date().and_then(|date| date.succ_opt()) {
            Some(next) if next.month() == month => next.day() as u8,
            _ => 1,
        };
        self.with_weekday()
    }

    fn next_month(mut self) -> Self {
        self.month = if self.month >= 12 { 1 } else { self.month + 1 };
        self.clamp_day().with_weekday()
    }

    fn next_year(mut self) -> Self {
        self.year = if self.year >= 99 { 0 } else { self.year + 1 };
        self.clamp_day().with_weekday()
    }

    fn toggled_format(mut self) -> Self {
        let hours_24 = self.hours_24();
        if self.hour_12 {
            self.hour_12 = false;
            self.pm = false;
            self.hours = hours_24;
        } else {
            self.hour_12 = true;
            self.pm = hours_24 >= 12;
            self.hours = match hours_24 % 12 {
                0 => 12,
                h => h,
            };
        }
        self
    }

    /// Pull the day back to the last day of its month
    fn clamp_day(mut self) -> Self {
        while self.day > 28 && self.date().is_none() {
            self.day -= 1;
        }
        self
    }

    fn with_weekday(mut self) -> Self {
        if let Some(date) = self.date() {
            self.weekday = date.weekday().number_from_sunday() as u8;
        }
        self
    }
}

impl Default for RtcSnapshot {
    fn default() -> Self {
        Self::DEFAULT
    }
}
