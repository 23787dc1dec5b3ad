//! Button input handling
//!
//! Two layers with different owners:
//!
//! - [`Debouncer`]: written by the tick, one per button
//! - [`EdgeDetector`]: written by the loop, one per button, reset on
//!   every keyboard mode change

pub mod debounce;
pub mod edge;

pub use debounce::Debouncer;
pub use edge::EdgeDetector;

use crate::traits::ButtonInputs;

/// The two push-buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Button 1, mode navigation; also the wake source
    Mode,
    /// Button 2, value edit
    Set,
}

impl Button {
    /// Both buttons in index order
    pub const ALL: [Button; 2] = [Button::Mode, Button::Set];

    /// Array index of this button
    pub const fn index(self) -> usize {
        match self {
            Button::Mode => 0,
            Button::Set => 1,
        }
    }
}

/// Debounce channels of both buttons
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonBank {
    channels: [Debouncer; 2],
}

impl ButtonBank {
    /// Create both channels released, with a long press after
    /// `long_press_samples` consecutive pressed samples
    pub const fn new(long_press_samples: u8) -> Self {
        Self {
            channels: [
                Debouncer::new(long_press_samples),
                Debouncer::new(long_press_samples),
            ],
        }
    }

    /// Take one raw sample of each button
    pub fn sample<B: ButtonInputs>(&mut self, inputs: &B) {
        for button in Button::ALL {
            self.channels[button.index()].sample(inputs.line_high(button));
        }
    }

    /// Channel of `button`
    pub fn get(&self, button: Button) -> &Debouncer {
        &self.channels[button.index()]
    }

    /// Mutable channel of `button`
    pub fn get_mut(&mut self, button: Button) -> &mut Debouncer {
        &mut self.channels[button.index()]
    }

    /// Check if either button is currently down
    pub fn any_pressed(&self) -> bool {
        self.channels.iter().any(Debouncer::pressed)
    }

    /// Clear the long-press latch of both channels
    pub fn clear_long(&mut self) {
        for channel in &mut self.channels {
            channel.clear_long();
        }
    }
}
