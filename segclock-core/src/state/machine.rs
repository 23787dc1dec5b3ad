//! Keyboard mode definition
//!
//! Button 1 navigates between modes, button 2 edits the value of the
//! current setting mode. Holding both long from Normal opens the message.

use crate::display::DisplayMode;
use crate::rtc::RtcCommand;

/// Keyboard modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyboardMode {
    /// Time of day
    #[default]
    Normal,
    /// Editing the hour
    SetHour,
    /// Editing the minute
    SetMinute,
    /// Choosing 12 or 24 hour format
    SetHour1224,
    /// Month and day
    DateDisplay,
    /// Editing the month
    SetMonth,
    /// Editing the day
    SetDay,
    /// Year
    YearDisplay,
    /// Editing the year
    SetYear,
    /// Day of week
    WeekdayDisplay,
    /// Scrolling message, returns to Normal on its own
    MessageDisplay,
}

/// How button 1 completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Press {
    /// Pressed and released before the long threshold
    Short,
    /// Held past the long threshold
    Long,
}

/// Digit pair that blinks while a value is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkPair {
    /// Slots 0 and 1
    Left,
    /// Slots 2 and 3
    Right,
}

/// What button 2 does in a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edit {
    /// Button 2 has no action
    None,
    /// One step per press, repeating while held long
    Repeat(RtcCommand),
    /// One step per press
    Single(RtcCommand),
}

impl KeyboardMode {
    /// Mode reached by a completed button 1 press
    ///
    /// Short and long presses differ only where a display mode leads into
    /// its setting mode.
    pub fn next(self, press: Press) -> Self {
        use KeyboardMode::*;

        match (self, press) {
            (Normal, Press::Long) => SetHour,
            (Normal, Press::Short) => DateDisplay,
            (SetHour, _) => SetMinute,
            (SetMinute, _) => SetHour1224,
            (SetHour1224, _) => Normal,
            (DateDisplay, Press::Long) => SetMonth,
            (DateDisplay, Press::Short) => YearDisplay,
            (SetMonth, _) => SetDay,
            (SetDay, _) => DateDisplay,
            (YearDisplay, Press::Long) => SetYear,
            (YearDisplay, Press::Short) => WeekdayDisplay,
            (SetYear, _) => YearDisplay,
            (WeekdayDisplay, _) => Normal,
            (MessageDisplay, _) => Normal,
        }
    }

    /// Button 2 action in this mode
    pub fn edit(self) -> Edit {
        match self {
            KeyboardMode::SetHour => Edit::Repeat(RtcCommand::IncrementHour),
            KeyboardMode::SetMinute => Edit::Repeat(RtcCommand::IncrementMinute),
            KeyboardMode::SetHour1224 => Edit::Single(RtcCommand::ToggleHourFormat),
            KeyboardMode::SetMonth => Edit::Repeat(RtcCommand::IncrementMonth),
            KeyboardMode::SetDay => Edit::Repeat(RtcCommand::IncrementDay),
            KeyboardMode::SetYear => Edit::Repeat(RtcCommand::IncrementYear),
            _ => Edit::None,
        }
    }

    /// Pair blinking while this mode is active
    pub fn blink_pair(self) -> Option<BlinkPair> {
        match self {
            KeyboardMode::SetHour | KeyboardMode::SetMonth => Some(BlinkPair::Left),
            KeyboardMode::SetMinute | KeyboardMode::SetDay | KeyboardMode::SetYear => {
                Some(BlinkPair::Right)
            }
            _ => None,
        }
    }

    /// Display layout for this mode
    pub fn display_mode(self) -> DisplayMode {
        match self {
            KeyboardMode::Normal | KeyboardMode::SetHour | KeyboardMode::SetMinute => {
                DisplayMode::Normal
            }
            KeyboardMode::SetHour1224 => DisplayMode::SetHour1224,
            KeyboardMode::DateDisplay | KeyboardMode::SetMonth | KeyboardMode::SetDay => {
                DisplayMode::DateDisplay
            }
            KeyboardMode::YearDisplay | KeyboardMode::SetYear => DisplayMode::YearDisplay,
            KeyboardMode::WeekdayDisplay => DisplayMode::WeekdayDisplay,
            KeyboardMode::MessageDisplay => DisplayMode::MessageDisplay,
        }
    }
}
