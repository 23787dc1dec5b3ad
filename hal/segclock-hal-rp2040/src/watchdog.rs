//! Hardware watchdog
//!
//! The RP2040 watchdog counts down from the loaded period and resets the
//! chip on reaching zero. It is stopped across sleep, where the loop
//! cannot feed it.

use embassy_rp::peripherals::WATCHDOG;
use embassy_rp::watchdog::Watchdog as RpWatchdog;
use embassy_rp::Peri;
use embassy_time::Duration;
use segclock_core::traits::Watchdog;

/// Watchdog serviced once per loop iteration
pub struct LoopWatchdog {
    watchdog: RpWatchdog,
    timeout: Duration,
}

impl LoopWatchdog {
    /// Start the watchdog with `timeout`
    ///
    /// The countdown pauses while a debugger halts the core.
    pub fn start(watchdog: Peri<'static, WATCHDOG>, timeout: Duration) -> Self {
        let mut watchdog = RpWatchdog::new(watchdog);
        watchdog.pause_on_debug(true);
        watchdog.start(timeout);
        Self { watchdog, timeout }
    }
}

impl Watchdog for LoopWatchdog {
    fn feed(&mut self) {
        self.watchdog.feed(self.timeout);
    }

    fn suspend(&mut self) {
        self.watchdog.stop();
    }

    fn resume(&mut self) {
        self.watchdog.start(self.timeout);
    }
}
