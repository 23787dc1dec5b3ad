//! Idle counter
//!
//! Counts loop iterations without button activity. Crossing the show
//! duration requests sleep once and restarts the count, so each idle
//! interval produces exactly one request.

/// Decision for the current loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerAction {
    /// Keep running
    Stay,
    /// Blank the display and park the processor until button 1 is pressed
    Sleep,
}

/// Idle tracker, owned by the loop
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerManager {
    idle: u16,
    show_iterations: u16,
}

impl PowerManager {
    /// Create a tracker that requests sleep after `show_iterations` idle
    /// iterations
    pub const fn new(show_iterations: u16) -> Self {
        Self {
            idle: 0,
            show_iterations,
        }
    }

    /// Account for one loop iteration
    pub fn update(&mut self, any_pressed: bool) -> PowerAction {
        self.idle = if any_pressed {
            0
        } else {
            self.idle.saturating_add(1)
        };

        if self.idle > self.show_iterations {
            self.idle = 0;
            PowerAction::Sleep
        } else {
            PowerAction::Stay
        }
    }

    /// Restart the idle count
    pub fn reset(&mut self) {
        self.idle = 0;
    }

    /// Iterations since the last activity
    pub fn idle(&self) -> u16 {
        self.idle
    }
}
