//! Tick context
//!
//! Everything the periodic tick writes: multiplexer counters, the
//! committed image it scans out, and both debounce channels. The loop
//! reaches this aggregate only inside a critical section, which holds the
//! tick off for the duration.

use crate::config::ClockConfig;
use crate::display::{DisplayImage, Multiplexer, Scan};
use crate::input::ButtonBank;
use crate::traits::{ButtonInputs, DisplayPort};

/// State of the periodic tick
#[derive(Debug, Clone)]
pub struct TickContext {
    multiplexer: Multiplexer,
    image: DisplayImage,
    buttons: ButtonBank,
    sample_interval: u8,
    sample_phase: u8,
}

impl TickContext {
    /// Create a context with a blank display and released buttons
    pub const fn new(config: &ClockConfig) -> Self {
        Self {
            multiplexer: Multiplexer::new(config.refresh_period()),
            image: DisplayImage::BLANK,
            buttons: ButtonBank::new(config.long_press_samples()),
            sample_interval: config.sample_interval(),
            sample_phase: 0,
        }
    }

    /// Run one tick: scan one digit, and sample the buttons every
    /// `sample_interval` ticks
    ///
    /// Bounded and non-blocking.
    pub fn tick<P, B>(&mut self, port: &mut P, inputs: &B) -> Scan
    where
        P: DisplayPort,
        B: ButtonInputs,
    {
        let scan = self.multiplexer.drive(&self.image, port);

        self.sample_phase += 1;
        if self.sample_phase >= self.sample_interval {
            self.sample_phase = 0;
            self.buttons.sample(inputs);
        }

        scan
    }

    /// Replace the committed image in one step
    pub fn commit(&mut self, image: DisplayImage) {
        self.image = image;
    }

    /// Debounce channels, for the loop's edge evaluation
    pub fn buttons_mut(&mut self) -> &mut ButtonBank {
        &mut self.buttons
    }
}
