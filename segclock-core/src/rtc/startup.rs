//! Start-up check of the RTC

use crate::traits::{RtcClock, RtcError};

/// Load the factory date if the RTC reports the "never set" sentinel
///
/// Returns `true` when the default was loaded.
pub fn ensure_initialized<R: RtcClock>(rtc: &mut R) -> Result<bool, RtcError> {
    if !rtc.read_snapshot().is_uninitialized() {
        return Ok(false);
    }
    rtc.reset_to_default()?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rtc::RtcSnapshot;

    struct MockRtc {
        snapshot: RtcSnapshot,
        fail_reset: bool,
        resets: usize,
    }

    impl MockRtc {
        fn new(snapshot: RtcSnapshot) -> Self {
            Self {
                snapshot,
                fail_reset: false,
                resets: 0,
            }
        }
    }

    impl RtcClock for MockRtc {
        fn read_snapshot(&mut self) -> RtcSnapshot {
            self.snapshot
        }

        fn increment_hour(&mut self) -> Result<(), RtcError> {
            Ok(())
        }

        fn increment_minute(&mut self) -> Result<(), RtcError> {
            Ok(())
        }

        fn increment_day(&mut self) -> Result<(), RtcError> {
            Ok(())
        }

        fn increment_month(&mut self) -> Result<(), RtcError> {
            Ok(())
        }

        fn increment_year(&mut self) -> Result<(), RtcError> {
            Ok(())
        }

        fn toggle_hour_format(&mut self) -> Result<(), RtcError> {
            Ok(())
        }

        fn reset_to_default(&mut self) -> Result<(), RtcError> {
            self.resets += 1;
            if self.fail_reset {
                return Err(RtcError::Bus);
            }
            self.snapshot = RtcSnapshot::DEFAULT;
            Ok(())
        }
    }

    #[test]
    fn test_sentinel_loads_default() {
        let mut rtc = MockRtc::new(RtcSnapshot::UNINITIALIZED);
        assert_eq!(ensure_initialized(&mut rtc), Ok(true));
        assert_eq!(rtc.resets, 1);
        assert_eq!(rtc.read_snapshot(), RtcSnapshot::DEFAULT);
    }

    #[test]
    fn test_set_clock_left_alone() {
        let set = RtcSnapshot {
            hours: 14,
            minutes: 5,
            day: 17,
            month: 6,
            year: 25,
            ..RtcSnapshot::DEFAULT
        };
        let mut rtc = MockRtc::new(set);
        assert_eq!(ensure_initialized(&mut rtc), Ok(false));
        assert_eq!(rtc.resets, 0);
        assert_eq!(rtc.read_snapshot(), set);
    }

    #[test]
    fn test_reset_failure_reported() {
        let mut rtc = MockRtc::new(RtcSnapshot::UNINITIALIZED);
        rtc.fail_reset = true;
        assert_eq!(ensure_initialized(&mut rtc), Err(RtcError::Bus));
        assert_eq!(rtc.resets, 1);
        assert!(rtc.read_snapshot().is_uninitialized());
    }
}
