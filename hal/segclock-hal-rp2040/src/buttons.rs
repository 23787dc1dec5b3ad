//! Push-button inputs
//!
//! Both buttons short their line to ground. Internal pull-ups hold the
//! lines high while released.

use embassy_rp::gpio::{AnyPin, Input, Pull};
use embassy_rp::Peri;
use segclock_core::input::Button;
use segclock_core::traits::ButtonInputs;

/// The two button lines
pub struct ButtonPins<'d> {
    mode: Input<'d>,
    set: Input<'d>,
}

impl<'d> ButtonPins<'d> {
    /// Take both pins as pulled-up inputs
    pub fn new(mode: Peri<'d, AnyPin>, set: Peri<'d, AnyPin>) -> Self {
        Self {
            mode: Input::new(mode, Pull::Up),
            set: Input::new(set, Pull::Up),
        }
    }

    /// Wait for button 1 to be pressed
    ///
    /// Arms the GPIO edge interrupt for the duration of the wait, so the
    /// executor can sleep until the press.
    pub async fn wait_for_wake(&mut self) {
        self.mode.wait_for_low().await;
    }
}

impl ButtonInputs for ButtonPins<'_> {
    fn line_high(&self, button: Button) -> bool {
        match button {
            Button::Mode => self.mode.is_high(),
            Button::Set => self.set.is_high(),
        }
    }
}
