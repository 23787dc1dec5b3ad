//! Display multiplexer
//!
//! Each tick lights at most one digit. A digit position advances every
//! tick; the display is lit only during the first four ticks of every
//! `refresh_period` ticks, so the period sets the duty cycle:
//!
//! ```text
//! tick     0 1 2 3 4 5 6 7 8 9 10 11 12 13 ...   (refresh_period = 10)
//! digit    0 1 2 3 0 1 2 3 0 1  2  3  0  1
//! lit      * * * *              *  *  *  *
//! ```
//!
//! Position and phase are kept as separate counters so the pattern never
//! glitches when a combined tick counter would wrap.

use super::image::DisplayImage;
use crate::config::DIGIT_COUNT;
use crate::traits::DisplayPort;

/// What one tick drives onto the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Scan {
    /// Digit position of this tick (tick mod 4)
    pub digit: u8,
    /// Pattern to light, `None` on dark ticks
    pub segments: Option<u8>,
}

/// Digit scan state, owned by the tick context
#[derive(Debug, Clone)]
pub struct Multiplexer {
    digit: u8,
    phase: u8,
    refresh_period: u8,
}

impl Multiplexer {
    /// Create a multiplexer starting at tick zero
    ///
    /// `refresh_period` must already be validated (see
    /// [`ClockConfig`](crate::config::ClockConfig)).
    pub const fn new(refresh_period: u8) -> Self {
        Self {
            digit: 0,
            phase: 0,
            refresh_period,
        }
    }

    /// Compute this tick's scan and advance one tick
    pub fn advance(&mut self, image: &DisplayImage) -> Scan {
        let digit = self.digit;
        let lit = self.phase < DIGIT_COUNT;

        self.digit = (self.digit + 1) % DIGIT_COUNT;
        self.phase = if self.phase + 1 >= self.refresh_period {
            0
        } else {
            self.phase + 1
        };

        Scan {
            digit,
            segments: if lit { Some(image.segments(digit)) } else { None },
        }
    }

    /// Advance one tick and drive the result onto `port`
    pub fn drive<P: DisplayPort>(&mut self, image: &DisplayImage, port: &mut P) -> Scan {
        let scan = self.advance(image);

        port.deselect_all();
        match scan.segments {
            Some(pattern) => {
                port.write_segments(pattern);
                port.select(scan.digit);
            }
            None => port.write_segments(0xFF),
        }

        scan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Records the select line state and counts lit ticks per digit
    struct MockPort {
        selected: Option<u8>,
        segments: u8,
        lit: [u32; 4],
    }

    impl MockPort {
        fn new() -> Self {
            Self {
                selected: None,
                segments: 0xFF,
                lit: [0; 4],
            }
        }
    }

    impl DisplayPort for MockPort {
        fn deselect_all(&mut self) {
            self.selected = None;
        }

        fn write_segments(&mut self, pattern: u8) {
            assert!(self.selected.is_none(), "segments changed while a digit is lit");
            self.segments = pattern;
        }

        fn select(&mut self, digit: u8) {
            assert!(self.selected.is_none(), "two digits selected at once");
            self.selected = Some(digit);
            self.lit[digit as usize] += 1;
        }
    }

    fn gcd(a: u32, b: u32) -> u32 {
        if b == 0 {
            a
        } else {
            gcd(b, a % b)
        }
    }

    #[test]
    fn test_refresh_period_ten_digit_zero_ticks() {
        let image = DisplayImage::from_patterns([0x11, 0x22, 0x33, 0x44]);
        let mut mux = Multiplexer::new(10);

        let mut digit_zero_lit = [0u32; 4];
        let mut count = 0;
        for tick in 0..40u32 {
            let scan = mux.advance(&image);
            assert_eq!(scan.digit as u32, tick % 4);
            assert_eq!(scan.segments.is_some(), tick % 10 < 4);
            if scan.digit == 0 && scan.segments.is_some() {
                assert_eq!(scan.segments, Some(0x11));
                digit_zero_lit[count] = tick;
                count += 1;
            }
        }
        assert_eq!(count, 4);
        assert_eq!(digit_zero_lit, [0, 12, 20, 32]);
    }

    #[test]
    fn test_period_four_is_full_brightness() {
        let image = DisplayImage::BLANK;
        let mut mux = Multiplexer::new(4);
        for _ in 0..100 {
            assert!(mux.advance(&image).segments.is_some());
        }
    }

    #[test]
    fn test_dark_tick_blanks_segments() {
        let image = DisplayImage::from_patterns([0x00; 4]);
        let mut mux = Multiplexer::new(5);
        let mut port = MockPort::new();

        for _ in 0..4 {
            mux.drive(&image, &mut port);
            assert_eq!(port.segments, 0x00);
        }
        let scan = mux.drive(&image, &mut port);
        assert_eq!(scan.segments, None);
        assert_eq!(port.selected, None);
        assert_eq!(port.segments, 0xFF);
    }

    proptest! {
        #[test]
        fn prop_four_lit_ticks_per_period(period in 4u8..=255, cycles in 1u32..6) {
            let image = DisplayImage::BLANK;
            let mut mux = Multiplexer::new(period);
            for _ in 0..cycles {
                let lit = (0..period)
                    .filter(|_| mux.advance(&image).segments.is_some())
                    .count();
                prop_assert_eq!(lit, 4);
            }
        }

        #[test]
        fn prop_every_digit_lit_equally(period in 4u8..=64) {
            let image = DisplayImage::BLANK;
            let mut mux = Multiplexer::new(period);
            let mut port = MockPort::new();

            // One full cycle of both counters
            let p = period as u32;
            let span = 4 * p / gcd(4, p);
            for _ in 0..span {
                mux.drive(&image, &mut port);
            }

            let expected = span / p;
            prop_assert_eq!(port.lit, [expected; 4]);
        }
    }
}
