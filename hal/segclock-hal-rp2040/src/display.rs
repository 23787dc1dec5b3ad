//! GPIO-driven multiplexed display
//!
//! Eight segment lines (active-low, common anode) are shared by four
//! digit-select lines (active-high, driving the anode transistors).

use embassy_rp::gpio::{AnyPin, Level, Output};
use embassy_rp::Peri;
use segclock_core::traits::DisplayPort;

/// Four digit 7-segment display on twelve GPIO lines
pub struct SegmentDisplay<'d> {
    /// Segment lines in bit order `a,b,c,d,e,f,g,dp`
    segments: [Output<'d>; 8],
    /// Digit-select lines, leftmost first
    digits: [Output<'d>; 4],
}

impl<'d> SegmentDisplay<'d> {
    /// Take the twelve lines, starting dark
    ///
    /// # Arguments
    /// - `segments`: segment pins for `a` through `g`, then the decimal point
    /// - `digits`: digit-select pins, leftmost digit first
    pub fn new(segments: [Peri<'d, AnyPin>; 8], digits: [Peri<'d, AnyPin>; 4]) -> Self {
        Self {
            segments: segments.map(|pin| Output::new(pin, Level::High)),
            digits: digits.map(|pin| Output::new(pin, Level::Low)),
        }
    }
}

impl DisplayPort for SegmentDisplay<'_> {
    fn deselect_all(&mut self) {
        for digit in &mut self.digits {
            digit.set_low();
        }
    }

    fn write_segments(&mut self, pattern: u8) {
        for (bit, segment) in self.segments.iter_mut().enumerate() {
            let level = if pattern & (1 << bit) != 0 {
                Level::High
            } else {
                Level::Low
            };
            segment.set_level(level);
        }
    }

    fn select(&mut self, digit: u8) {
        if let Some(line) = self.digits.get_mut(digit as usize) {
            line.set_high();
        }
    }
}
