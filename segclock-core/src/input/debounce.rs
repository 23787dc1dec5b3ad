//! Button debouncer
//!
//! Runs in the tick, once every sample interval. The last eight raw
//! samples are kept as a bit window; a button counts as pressed only once
//! all eight read low.

/// Debounce and hold state of one active-low button
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    /// Raw samples, newest in bit 0, 1 = line high (released)
    window: u8,
    pressed: bool,
    /// Pressed samples since the press began, saturating
    hold: u8,
    long: bool,
    long_threshold: u8,
}

impl Debouncer {
    /// Create a released channel
    pub const fn new(long_threshold: u8) -> Self {
        Self {
            window: 0xFF,
            pressed: false,
            hold: 0,
            long: false,
            long_threshold,
        }
    }

    /// Shift in one raw sample of the line
    pub fn sample(&mut self, line_high: bool) {
        self.window = (self.window << 1) | line_high as u8;
        self.pressed = self.window == 0;

        if self.pressed {
            if self.hold < u8::MAX {
                self.hold += 1;
                if self.hold == self.long_threshold {
                    self.long = true;
                }
            }
        } else {
            self.hold = 0;
        }
    }

    /// Debounced state
    pub fn pressed(&self) -> bool {
        self.pressed
    }

    /// Long-press latch; stays set after release until cleared
    pub fn long(&self) -> bool {
        self.long
    }

    /// Samples held so far
    pub fn hold(&self) -> u8 {
        self.hold
    }

    /// Clear the long-press latch
    ///
    /// A press already past the threshold does not latch again.
    pub fn clear_long(&mut self) {
        self.long = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn press(channel: &mut Debouncer, samples: usize) {
        for _ in 0..samples {
            channel.sample(false);
        }
    }

    fn release(channel: &mut Debouncer, samples: usize) {
        for _ in 0..samples {
            channel.sample(true);
        }
    }

    #[test]
    fn test_pressed_after_full_window() {
        let mut channel = Debouncer::new(20);

        press(&mut channel, 7);
        assert!(!channel.pressed());

        press(&mut channel, 1);
        assert!(channel.pressed());
        assert_eq!(channel.hold(), 1);
    }

    #[test]
    fn test_single_high_sample_releases() {
        let mut channel = Debouncer::new(20);
        press(&mut channel, 10);
        assert!(channel.pressed());

        release(&mut channel, 1);
        assert!(!channel.pressed());
        assert_eq!(channel.hold(), 0);
    }

    #[test]
    fn test_long_latches_at_threshold() {
        let mut channel = Debouncer::new(5);

        // Window fill plus four held samples
        press(&mut channel, 7 + 4);
        assert!(!channel.long());

        press(&mut channel, 1);
        assert!(channel.long());

        // Kept after release
        release(&mut channel, 3);
        assert!(channel.long());
        assert_eq!(channel.hold(), 0);
    }

    #[test]
    fn test_cleared_long_does_not_relatch_while_held() {
        let mut channel = Debouncer::new(2);
        press(&mut channel, 12);
        assert!(channel.long());

        channel.clear_long();
        press(&mut channel, 300);
        assert!(!channel.long());
        assert_eq!(channel.hold(), u8::MAX);
    }

    #[test]
    fn test_hold_saturates() {
        let mut channel = Debouncer::new(u8::MAX);
        press(&mut channel, 7 + 300);
        assert_eq!(channel.hold(), u8::MAX);
        assert!(channel.long());
    }

    proptest! {
        #[test]
        fn prop_glitch_never_presses(gap in 1usize..8, lead in 0usize..8) {
            let mut channel = Debouncer::new(10);
            release(&mut channel, lead);
            // Fewer than eight low samples, then high again
            press(&mut channel, gap);
            prop_assert!(!channel.pressed());
            release(&mut channel, 1);
            prop_assert!(!channel.pressed());
            prop_assert!(!channel.long());
        }

        #[test]
        fn prop_long_needs_threshold_held(threshold in 1u8..=40, held in 0usize..80) {
            let mut channel = Debouncer::new(threshold);
            press(&mut channel, 7 + held);
            release(&mut channel, 1);
            prop_assert_eq!(channel.long(), held >= threshold as usize);
        }

        #[test]
        fn prop_early_release_never_long(threshold in 2u8..=40, bursts in 1usize..10) {
            let mut channel = Debouncer::new(threshold);
            for _ in 0..bursts {
                press(&mut channel, 7 + threshold as usize - 1);
                release(&mut channel, 1);
            }
            prop_assert!(!channel.long());
        }
    }
}
