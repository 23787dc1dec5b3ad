//! Button input trait

use crate::input::Button;

/// Raw access to the two push-button lines
///
/// Buttons pull their line low when pressed. Implementations report the
/// raw level without any filtering; debouncing happens in the core.
pub trait ButtonInputs {
    /// Check if the line of `button` currently reads high (released)
    fn line_high(&self, button: Button) -> bool;
}
