//! Loop-side clock state
//!
//! [`Clock`] is everything the cooperative loop owns: keyboard mode, blink
//! flags, per-button edge detectors, the idle counter and the message
//! scroll position. One loop iteration is:
//!
//! 1. [`Clock::poll_buttons`] with the tick's debounce channels (under the
//!    critical section), yielding at most one RTC command
//! 2. apply the command to the RTC
//! 3. [`Clock::render`] against a fresh RTC snapshot, commit the result
//! 4. [`Clock::update_power`], sleeping when asked
//!
//! Every mode change goes through `change_mode`, so edge state can never
//! leak from one mode into the next.

use crate::config::ClockConfig;
use crate::display::{render, BlinkFlags, DisplayImage, MESSAGE};
use crate::input::{Button, ButtonBank, EdgeDetector};
use crate::power::{PowerAction, PowerManager};
use crate::rtc::{RtcCommand, RtcSnapshot};
use crate::state::{BlinkPair, Edit, KeyboardMode, Press};

/// Outcome of one button evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Poll {
    /// RTC mutation to apply this iteration
    pub command: Option<RtcCommand>,
    /// Either button currently down
    pub any_pressed: bool,
    /// Keyboard mode changed during this evaluation
    pub mode_changed: bool,
}

/// State of the cooperative loop
#[derive(Debug, Clone)]
pub struct Clock {
    mode: KeyboardMode,
    blink: BlinkFlags,
    edges: [EdgeDetector; 2],
    power: PowerManager,
    scroll_position: u8,
    scroll_step: u8,
    scroll_speed: u8,
    /// Auto-repeat fired during the current Set press
    repeated: bool,
    /// Long latches to clear on the next evaluation
    clear_long_pending: bool,
}

impl Clock {
    /// Create a clock in Normal mode
    pub const fn new(config: &ClockConfig) -> Self {
        Self {
            mode: KeyboardMode::Normal,
            blink: BlinkFlags {
                flash_01: false,
                flash_23: false,
            },
            edges: [EdgeDetector::new(), EdgeDetector::new()],
            power: PowerManager::new(config.show_iterations()),
            scroll_position: 0,
            scroll_step: 0,
            scroll_speed: config.scroll_speed(),
            repeated: false,
            clear_long_pending: false,
        }
    }

    /// Current keyboard mode
    pub fn mode(&self) -> KeyboardMode {
        self.mode
    }

    /// Current blink flags
    pub fn blink(&self) -> BlinkFlags {
        self.blink
    }

    /// Edge detector of `button`
    pub fn edge(&self, button: Button) -> &EdgeDetector {
        &self.edges[button.index()]
    }

    /// Message scroll position
    pub fn scroll_position(&self) -> u8 {
        self.scroll_position
    }

    /// Idle iterations counted so far
    pub fn idle(&self) -> u16 {
        self.power.idle()
    }

    /// Run the edge protocol and the keyboard state machine
    ///
    /// Performs no I/O, so it is safe to call inside the critical section
    /// that lends out the debounce channels.
    pub fn poll_buttons(&mut self, buttons: &mut ButtonBank) -> Poll {
        if self.clear_long_pending {
            buttons.clear_long();
            self.clear_long_pending = false;
        }

        for button in Button::ALL {
            self.edges[button.index()].observe(buttons.get_mut(button));
        }

        let before = self.mode;
        let command = self.evaluate(buttons);
        let mode_changed = self.mode != before;

        if !mode_changed {
            self.toggle_blink();
        }

        Poll {
            command,
            any_pressed: buttons.any_pressed(),
            mode_changed,
        }
    }

    fn evaluate(&mut self, buttons: &ButtonBank) -> Option<RtcCommand> {
        let mode_button = buttons.get(Button::Mode);
        let set_button = buttons.get(Button::Set);

        if self.mode == KeyboardMode::Normal
            && self.edges[Button::Mode.index()].held_long(mode_button)
            && self.edges[Button::Set.index()].held_long(set_button)
        {
            self.change_mode(KeyboardMode::MessageDisplay);
            return None;
        }

        if self.edges[Button::Mode.index()].triggered(mode_button) {
            let press = if mode_button.long() {
                Press::Long
            } else {
                Press::Short
            };
            self.change_mode(self.mode.next(press));
            return None;
        }

        let on_half = self.blink_on();
        let edge = &mut self.edges[Button::Set.index()];
        if !edge.triggered(set_button) {
            return None;
        }

        match self.mode.edit() {
            Edit::Repeat(command) if set_button.long() => {
                if set_button.pressed() {
                    // Auto-repeat, stays armed while held
                    self.repeated |= on_half;
                    on_half.then_some(command)
                } else {
                    // A long press released before any "on" half still steps once
                    edge.consume();
                    let stepped = core::mem::take(&mut self.repeated);
                    (!stepped).then_some(command)
                }
            }
            Edit::Repeat(command) | Edit::Single(command) => {
                edge.consume();
                self.repeated = false;
                Some(command)
            }
            Edit::None => {
                // Held long counts toward the two-button gesture
                if !set_button.pressed() {
                    edge.consume();
                }
                None
            }
        }
    }

    /// Build the committed image for this iteration
    ///
    /// Advances the message scroll and returns to Normal once the message
    /// has left the display.
    pub fn render(&mut self, rtc: &RtcSnapshot) -> DisplayImage {
        if self.mode == KeyboardMode::MessageDisplay {
            self.advance_scroll();
        }

        render(
            self.mode.display_mode(),
            rtc,
            self.blink,
            self.scroll_position,
        )
        .encode()
    }

    fn advance_scroll(&mut self) {
        self.scroll_step += 1;
        if self.scroll_step < self.scroll_speed {
            return;
        }

        self.scroll_step = 0;
        self.scroll_position = self.scroll_position.saturating_add(1);
        if self.scroll_position as usize > MESSAGE.len() + 4 {
            self.change_mode(KeyboardMode::Normal);
        }
    }

    /// Account for this iteration's button activity
    pub fn update_power(&mut self, any_pressed: bool) -> PowerAction {
        self.power.update(any_pressed)
    }

    /// Return to Normal after sleeping
    pub fn wake(&mut self) {
        self.change_mode(KeyboardMode::Normal);
    }

    fn change_mode(&mut self, mode: KeyboardMode) {
        self.mode = mode;
        self.power.reset();
        self.edges = [EdgeDetector::new(), EdgeDetector::new()];
        self.blink = BlinkFlags::default();
        self.scroll_position = 0;
        self.scroll_step = 0;
        self.repeated = false;
        self.clear_long_pending = true;
    }

    /// On half of the blink for the pair being edited
    fn blink_on(&self) -> bool {
        match self.mode.blink_pair() {
            Some(BlinkPair::Left) => !self.blink.flash_01,
            Some(BlinkPair::Right) => !self.blink.flash_23,
            None => true,
        }
    }

    fn toggle_blink(&mut self) {
        match self.mode.blink_pair() {
            Some(BlinkPair::Left) => self.blink.flash_01 = !self.blink.flash_01,
            Some(BlinkPair::Right) => self.blink.flash_23 = !self.blink.flash_23,
            None => {}
        }
    }
}
