//! Mode-relative edge detection
//!
//! An action fires only for a press that began after the button was seen
//! released in the current keyboard mode. A button held across a mode
//! change is ignored until it is let go.

use super::debounce::Debouncer;

/// Edge state of one button, owned by the loop
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeDetector {
    ready: bool,
    ready_pressed: bool,
}

impl EdgeDetector {
    /// Create a detector that has not yet seen the button released
    pub const fn new() -> Self {
        Self {
            ready: false,
            ready_pressed: false,
        }
    }

    /// Fold in this iteration's debounced state
    ///
    /// The first release seen while not ready arms the detector and clears
    /// the channel's long latch.
    pub fn observe(&mut self, channel: &mut Debouncer) {
        if !channel.pressed() && !self.ready {
            self.ready = true;
            channel.clear_long();
        }
        if self.ready && channel.pressed() {
            self.ready_pressed = true;
        }
    }

    /// Check for a complete press and release, or a press now held long
    pub fn triggered(&self, channel: &Debouncer) -> bool {
        self.ready_pressed && (channel.long() || !channel.pressed())
    }

    /// Check for a press now held long
    pub fn held_long(&self, channel: &Debouncer) -> bool {
        self.ready_pressed && channel.long()
    }

    /// Disarm after a single-shot action
    ///
    /// The detector re-arms on the next observed release.
    pub fn consume(&mut self) {
        self.ready = false;
        self.ready_pressed = false;
    }

    /// Button seen released in this mode
    pub fn ready(&self) -> bool {
        self.ready
    }

    /// Press seen since becoming ready
    pub fn ready_pressed(&self) -> bool {
        self.ready_pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Harness {
        channel: Debouncer,
        edge: EdgeDetector,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                channel: Debouncer::new(4),
                edge: EdgeDetector::new(),
            }
        }

        /// Sample `samples` times at `line_high`, then run one observation
        fn step(&mut self, line_high: bool, samples: usize) {
            for _ in 0..samples {
                self.channel.sample(line_high);
            }
            self.edge.observe(&mut self.channel);
        }
    }

    #[test]
    fn test_short_press_triggers_on_release() {
        let mut h = Harness::new();
        h.step(true, 1);
        assert!(h.edge.ready());

        h.step(false, 8);
        assert!(h.edge.ready_pressed());
        assert!(!h.edge.triggered(&h.channel));

        h.step(true, 1);
        assert!(h.edge.triggered(&h.channel));
        assert!(!h.edge.held_long(&h.channel));
    }

    #[test]
    fn test_long_press_triggers_while_held() {
        let mut h = Harness::new();
        h.step(true, 1);
        h.step(false, 7 + 4);
        assert!(h.channel.pressed());
        assert!(h.edge.triggered(&h.channel));
        assert!(h.edge.held_long(&h.channel));
    }

    #[test]
    fn test_press_held_from_start_is_ignored() {
        let mut h = Harness::new();
        h.step(false, 20);
        assert!(!h.edge.ready());
        assert!(!h.edge.ready_pressed());
        assert!(!h.edge.triggered(&h.channel));

        // Release arms and clears the stale long
        h.step(true, 1);
        assert!(h.edge.ready());
        assert!(!h.channel.long());
        assert!(!h.edge.triggered(&h.channel));
    }

    #[test]
    fn test_consume_rearms_on_release() {
        let mut h = Harness::new();
        h.step(true, 1);
        h.step(false, 8);
        h.step(true, 1);
        assert!(h.edge.triggered(&h.channel));

        h.edge.consume();
        assert!(!h.edge.triggered(&h.channel));

        // Next observation re-arms, a second press triggers again
        h.step(true, 1);
        assert!(h.edge.ready());
        h.step(false, 8);
        h.step(true, 1);
        assert!(h.edge.triggered(&h.channel));
    }
}
