//! Display rendering
//!
//! Rendering is a pure function of the display mode, the RTC snapshot,
//! the blink flags and the message scroll position.

use super::image::StagingImage;
use super::segments::Symbol;
use crate::rtc::RtcSnapshot;

/// What the display shows, derived from the keyboard mode each iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// Hours and minutes
    Normal,
    /// 12/24 hour format indicator
    SetHour1224,
    /// Month and day
    DateDisplay,
    /// Four digit year
    YearDisplay,
    /// Three letter day of week
    WeekdayDisplay,
    /// Scrolling message
    MessageDisplay,
}

/// Blink state of the two digit pairs
///
/// A set flag is the "off" half of the blink: the pair is suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkFlags {
    /// Left pair (slots 0 and 1)
    pub flash_01: bool,
    /// Right pair (slots 2 and 3)
    pub flash_23: bool,
}

/// Symbols scrolled across the display in message mode, "HELLo"
pub const MESSAGE: [Symbol; 5] = [Symbol::BigH, Symbol::E, Symbol::L, Symbol::L, Symbol::O];

/// Day of week mnemonics, Sunday first
const WEEKDAYS: [[Symbol; 3]; 7] = [
    [Symbol::Five, Symbol::U, Symbol::N],
    [Symbol::M, Symbol::O, Symbol::N],
    [Symbol::T, Symbol::U, Symbol::E],
    [Symbol::U, Symbol::E, Symbol::D],
    [Symbol::T, Symbol::H, Symbol::SmallU],
    [Symbol::F, Symbol::R, Symbol::I],
    [Symbol::Five, Symbol::A, Symbol::T],
];

/// Build the staging image for one loop iteration
pub fn render(mode: DisplayMode, rtc: &RtcSnapshot, blink: BlinkFlags, scroll: u8) -> StagingImage {
    let mut image = StagingImage::BLANK;

    match mode {
        DisplayMode::Normal => render_time(&mut image, rtc, blink),
        DisplayMode::DateDisplay => render_date(&mut image, rtc, blink),
        DisplayMode::YearDisplay => render_year(&mut image, rtc, blink),
        DisplayMode::WeekdayDisplay => render_weekday(&mut image, rtc),
        DisplayMode::SetHour1224 => render_hour_format(&mut image, rtc),
        DisplayMode::MessageDisplay => render_message(&mut image, scroll),
    }

    image
}

fn render_time(image: &mut StagingImage, rtc: &RtcSnapshot, blink: BlinkFlags) {
    let hours = rtc.hours;

    if !blink.flash_01 {
        let tens = hours / 10;
        // Leading zero is blanked; in 12 hour mode tens can only be 1
        if tens != 0 {
            image.fill(0, Symbol::digit(tens), false);
        }
        image.fill(1, Symbol::digit(hours % 10), false);
    }
    image.dot(1, rtc.seconds & 1 == 1);

    if !blink.flash_23 {
        image.fill(2, Symbol::digit(rtc.minutes / 10), false);
        image.fill(3, Symbol::digit(rtc.minutes % 10), false);
    }
    image.dot(3, rtc.hour_12 && rtc.pm);
}

fn render_date(image: &mut StagingImage, rtc: &RtcSnapshot, blink: BlinkFlags) {
    if !blink.flash_01 {
        image.fill(0, Symbol::digit(rtc.month / 10), false);
        image.fill(1, Symbol::digit(rtc.month % 10), false);
    }
    image.dot(1, true);

    if !blink.flash_23 {
        image.fill(2, Symbol::digit(rtc.day / 10), false);
        image.fill(3, Symbol::digit(rtc.day % 10), false);
    }
}

fn render_year(image: &mut StagingImage, rtc: &RtcSnapshot, blink: BlinkFlags) {
    image.fill(0, Symbol::Two, false);
    image.fill(1, Symbol::Zero, false);

    if !blink.flash_23 {
        image.fill(2, Symbol::digit(rtc.year / 10), false);
        image.fill(3, Symbol::digit(rtc.year % 10), false);
    }
}

fn render_weekday(image: &mut StagingImage, rtc: &RtcSnapshot) {
    let letters = match rtc.weekday {
        day @ 1..=7 => WEEKDAYS[(day - 1) as usize],
        code => [Symbol::Dash, Symbol::hex(code), Symbol::Dash],
    };

    for (slot, symbol) in letters.iter().enumerate() {
        image.fill(slot + 1, *symbol, false);
    }
}

fn render_hour_format(image: &mut StagingImage, rtc: &RtcSnapshot) {
    image.fill(0, Symbol::H, false);
    let (tens, units) = if rtc.hour_12 {
        (Symbol::One, Symbol::Two)
    } else {
        (Symbol::Two, Symbol::Four)
    };
    image.fill(2, tens, false);
    image.fill(3, units, false);
}

/// Slot `i` shows message index `scroll + i - 4`: at position 0 the
/// message sits just past the right edge and moves left one slot per step.
fn render_message(image: &mut StagingImage, scroll: u8) {
    for slot in 0..4usize {
        let index = (scroll as usize + slot).checked_sub(4);
        if let Some(symbol) = index.and_then(|i| MESSAGE.get(i)) {
            image.fill(slot, *symbol, false);
        }
    }
}
