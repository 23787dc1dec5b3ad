//! Build-time configuration
//!
//! Constants are generated by `build.rs` from `clock.toml`. The core
//! configuration is built in a `const` item, so a value the core rejects
//! fails the build.

use embassy_time::Duration;
use segclock_core::config::ClockConfig;

include!(concat!(env!("OUT_DIR"), "/clock_config.rs"));

/// Validated core configuration
pub const CONFIG: ClockConfig = match ClockConfig::new(
    REFRESH_PERIOD,
    SAMPLE_INTERVAL,
    LONG_PRESS_SAMPLES,
    SHOW_ITERATIONS,
    SCROLL_SPEED,
) {
    Ok(config) => config,
    Err(_) => panic!("clock.toml values rejected by ClockConfig"),
};

/// Period of the display scan and button sampling
pub const TICK_PERIOD: Duration = Duration::from_micros(TICK_PERIOD_US);

/// Period of the cooperative loop
pub const LOOP_PERIOD: Duration = Duration::from_millis(LOOP_PERIOD_MS);

/// Watchdog timeout
pub const WATCHDOG_TIMEOUT: Duration = Duration::from_millis(WATCHDOG_TIMEOUT_MS);
