//! Liveness timer trait

/// Hardware watchdog serviced by the cooperative loop
///
/// A missed [`feed`](Self::feed) resets the system. The watchdog is
/// suspended only while the processor is parked in low-power sleep.
pub trait Watchdog {
    /// Restart the timeout
    fn feed(&mut self);

    /// Stop the timeout before entering sleep
    fn suspend(&mut self);

    /// Restart the timeout after waking
    fn resume(&mut self);
}
