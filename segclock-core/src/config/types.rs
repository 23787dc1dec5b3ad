//! Configuration type definitions
//!
//! A [`ClockConfig`] can only be obtained through [`ClockConfig::new`], which
//! rejects values the scan loop and state machine cannot work with. The
//! constructor is a `const fn` so firmware can validate at compile time.

/// Digits on the display; also the minimum refresh period
pub const DIGIT_COUNT: u8 = 4;

/// Default multiplex period in ticks (4 lit ticks out of every 10)
pub const DEFAULT_REFRESH_PERIOD: u8 = 10;

/// Default ticks between button samples (5 ms at a 100 µs tick)
pub const DEFAULT_SAMPLE_INTERVAL: u8 = 50;

/// Default samples a button must stay down for a long press (750 ms)
pub const DEFAULT_LONG_PRESS_SAMPLES: u8 = 150;

/// Default idle loop iterations before sleeping (6 s at 10 Hz)
pub const DEFAULT_SHOW_ITERATIONS: u16 = 60;

/// Default loop iterations per message scroll step
pub const DEFAULT_SCROLL_SPEED: u8 = 3;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Refresh period shorter than one full pass over the digits
    RefreshPeriodTooShort(u8),
    /// Button sample interval of zero ticks
    ZeroSampleInterval,
    /// Long press threshold of zero samples
    ZeroLongPress,
    /// Idle timeout of zero iterations
    ZeroShowDuration,
    /// Message scroll speed of zero iterations
    ZeroScrollSpeed,
}

/// Clock timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    refresh_period: u8,
    sample_interval: u8,
    long_press_samples: u8,
    show_iterations: u16,
    scroll_speed: u8,
}

impl ClockConfig {
    /// Create a validated configuration
    ///
    /// # Arguments
    /// - `refresh_period`: ticks per multiplex cycle; higher is dimmer (>= 4)
    /// - `sample_interval`: ticks between button samples (>= 1)
    /// - `long_press_samples`: samples held before a press counts as long (>= 1)
    /// - `show_iterations`: idle loop iterations before sleep (>= 1)
    /// - `scroll_speed`: loop iterations per message scroll step (>= 1)
    pub const fn new(
        refresh_period: u8,
        sample_interval: u8,
        long_press_samples: u8,
        show_iterations: u16,
        scroll_speed: u8,
    ) -> Result<Self, ConfigError> {
        if refresh_period < DIGIT_COUNT {
            return Err(ConfigError::RefreshPeriodTooShort(refresh_period));
        }
        if sample_interval == 0 {
            return Err(ConfigError::ZeroSampleInterval);
        }
        if long_press_samples == 0 {
            return Err(ConfigError::ZeroLongPress);
        }
        if show_iterations == 0 {
            return Err(ConfigError::ZeroShowDuration);
        }
        if scroll_speed == 0 {
            return Err(ConfigError::ZeroScrollSpeed);
        }

        Ok(Self {
            refresh_period,
            sample_interval,
            long_press_samples,
            show_iterations,
            scroll_speed,
        })
    }

    /// Ticks per multiplex cycle
    pub const fn refresh_period(&self) -> u8 {
        self.refresh_period
    }

    /// Ticks between button samples
    pub const fn sample_interval(&self) -> u8 {
        self.sample_interval
    }

    /// Samples a button must be held for a long press
    pub const fn long_press_samples(&self) -> u8 {
        self.long_press_samples
    }

    /// Idle loop iterations tolerated before sleeping
    pub const fn show_iterations(&self) -> u16 {
        self.show_iterations
    }

    /// Loop iterations per message scroll step
    pub const fn scroll_speed(&self) -> u8 {
        self.scroll_speed
    }
}

impl ClockConfig {
    /// Factory defaults
    pub const DEFAULT: Self = Self {
        refresh_period: DEFAULT_REFRESH_PERIOD,
        sample_interval: DEFAULT_SAMPLE_INTERVAL,
        long_press_samples: DEFAULT_LONG_PRESS_SAMPLES,
        show_iterations: DEFAULT_SHOW_ITERATIONS,
        scroll_speed: DEFAULT_SCROLL_SPEED,
    };
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
