//! DS3231 real-time clock (I2C)
//!
//! Register access and BCD coding are handled by `ds323x`. This driver
//! maps the device onto [`RtcClock`]: snapshots in, single-field writes
//! out, so an edit never touches the running seconds.
//!
//! # Power loss
//!
//! The oscillator stop flag is set whenever the clock lost power without
//! a backup battery. A snapshot read while it is set carries the "never
//! set" month sentinel, so start-up loads the factory date. Edits read the
//! registers as they are and only write the fields they change.

use ds323x::interface::I2cInterface;
use ds323x::{ic, DateTimeAccess, Ds323x, Hours, Rtcc};
use embedded_hal::i2c::I2c;
use segclock_core::rtc::{RtcCommand, RtcSnapshot, UNINITIALIZED_MONTH};
use segclock_core::traits::{RtcClock, RtcError};

type Device<I> = Ds323x<I2cInterface<I>, ic::DS3231>;

fn rtc_error<E>(error: ds323x::Error<E>) -> RtcError {
    match error {
        ds323x::Error::Comm(_) => RtcError::Bus,
        _ => RtcError::InvalidData,
    }
}

/// Hours register value for `snapshot`'s format
fn hours_of(snapshot: &RtcSnapshot) -> Hours {
    match (snapshot.hour_12, snapshot.pm) {
        (false, _) => Hours::H24(snapshot.hours),
        (true, false) => Hours::AM(snapshot.hours),
        (true, true) => Hours::PM(snapshot.hours),
    }
}

/// DS3231 driver
///
/// Keeps the last snapshot read successfully and returns it when the bus
/// fails, so a flaky connection shows stale time rather than garbage.
pub struct Ds3231<I> {
    rtc: Device<I>,
    last: RtcSnapshot,
}

impl<I: I2c> Ds3231<I> {
    /// Create a driver on `i2c`
    ///
    /// No bus traffic happens until the first read.
    pub fn new(i2c: I) -> Self {
        Self {
            rtc: Ds323x::new_ds3231(i2c),
            last: RtcSnapshot::UNINITIALIZED,
        }
    }

    /// Read the registers, reporting the sentinel after an oscillator stop
    pub fn read_registers(&mut self) -> Result<RtcSnapshot, RtcError> {
        if self.rtc.has_been_stopped().map_err(rtc_error)? {
            let time = self.read_time().unwrap_or(RtcSnapshot::DEFAULT);
            return Ok(RtcSnapshot {
                month: UNINITIALIZED_MONTH,
                ..time
            });
        }
        self.read_time()
    }

    /// Date and time as stored, in the stored hour format
    fn read_time(&mut self) -> Result<RtcSnapshot, RtcError> {
        let hour_12 = !matches!(self.rtc.hours().map_err(rtc_error)?, Hours::H24(_));
        let now = self.rtc.datetime().map_err(rtc_error)?;
        Ok(RtcSnapshot::from_datetime(&now, hour_12))
    }

    /// Read, step one field, write back only what changed
    fn modify(&mut self, command: RtcCommand) -> Result<(), RtcError> {
        let next = self.read_time()?.with_command(command);

        let written = match command {
            RtcCommand::IncrementHour | RtcCommand::ToggleHourFormat => {
                self.rtc.set_hours(hours_of(&next))
            }
            RtcCommand::IncrementMinute => self.rtc.set_minutes(next.minutes),
            RtcCommand::IncrementDay | RtcCommand::IncrementMonth | RtcCommand::IncrementYear => {
                let date = next.date().ok_or(RtcError::InvalidData)?;
                self.rtc.set_date(&date)
            }
        };
        written.map_err(rtc_error)
    }
}

impl<I: I2c> RtcClock for Ds3231<I> {
    fn read_snapshot(&mut self) -> RtcSnapshot {
        if let Ok(snapshot) = self.read_registers() {
            self.last = snapshot;
        }
        self.last
    }

    fn increment_hour(&mut self) -> Result<(), RtcError> {
        self.modify(RtcCommand::IncrementHour)
    }

    fn increment_minute(&mut self) -> Result<(), RtcError> {
        self.modify(RtcCommand::IncrementMinute)
    }

    fn increment_day(&mut self) -> Result<(), RtcError> {
        self.modify(RtcCommand::IncrementDay)
    }

    fn increment_month(&mut self) -> Result<(), RtcError> {
        self.modify(RtcCommand::IncrementMonth)
    }

    fn increment_year(&mut self) -> Result<(), RtcError> {
        self.modify(RtcCommand::IncrementYear)
    }

    fn toggle_hour_format(&mut self) -> Result<(), RtcError> {
        self.modify(RtcCommand::ToggleHourFormat)
    }

    fn reset_to_default(&mut self) -> Result<(), RtcError> {
        let default = RtcSnapshot::DEFAULT
            .to_datetime()
            .ok_or(RtcError::InvalidData)?;
        self.rtc.set_datetime(&default).map_err(rtc_error)?;
        self.rtc.clear_has_been_stopped_flag().map_err(rtc_error)?;
        self.last = RtcSnapshot::DEFAULT;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};
    use std::cell::RefCell;
    use std::rc::Rc;

    const ADDRESS: u8 = 0x68;
    const SECONDS: usize = 0x00;
    const MINUTES: usize = 0x01;
    const HOURS: usize = 0x02;
    const DATE: usize = 0x04;
    const MONTH: usize = 0x05;
    const YEAR: usize = 0x06;
    const STATUS: usize = 0x0F;
    const OSF: u8 = 0x80;

    /// Register file of the fake device
    struct Registers {
        regs: [u8; 0x13],
        pointer: usize,
        fail: bool,
    }

    /// Fake I2C bus; clones share one register file
    #[derive(Clone)]
    struct MockBus(Rc<RefCell<Registers>>);

    impl MockBus {
        fn new(raw: [u8; 7], status: u8) -> Self {
            let mut regs = [0u8; 0x13];
            regs[..7].copy_from_slice(&raw);
            regs[STATUS] = status;
            Self(Rc::new(RefCell::new(Registers {
                regs,
                pointer: 0,
                fail: false,
            })))
        }

        fn regs(&self) -> [u8; 0x13] {
            self.0.borrow().regs
        }

        fn poke(&self, register: usize, value: u8) {
            self.0.borrow_mut().regs[register] = value;
        }

        fn set_fail(&self, fail: bool) {
            self.0.borrow_mut().fail = fail;
        }
    }

    impl ErrorType for MockBus {
        type Error = ErrorKind;
    }

    impl I2c for MockBus {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            let mut dev = self.0.borrow_mut();
            if dev.fail || address != ADDRESS {
                return Err(ErrorKind::Other);
            }
            for op in operations {
                match op {
                    Operation::Write(bytes) => {
                        if let Some((first, rest)) = bytes.split_first() {
                            dev.pointer = *first as usize;
                            for byte in rest {
                                let at = dev.pointer;
                                dev.regs[at] = *byte;
                                dev.pointer += 1;
                            }
                        }
                    }
                    Operation::Read(buf) => {
                        for byte in buf.iter_mut() {
                            *byte = dev.regs[dev.pointer];
                            dev.pointer += 1;
                        }
                    }
                }
            }
            Ok(())
        }
    }

    /// 23:59:30, Thursday 2024-02-29
    const LEAP_EVENING: [u8; 7] = [0x30, 0x59, 0x23, 0x05, 0x29, 0x02, 0x24];

    fn rtc_with(raw: [u8; 7], status: u8) -> (Ds3231<MockBus>, MockBus) {
        let bus = MockBus::new(raw, status);
        (Ds3231::new(bus.clone()), bus)
    }

    #[test]
    fn test_read_24h() {
        let (mut rtc, _) = rtc_with(LEAP_EVENING, 0x00);
        let snapshot = rtc.read_snapshot();

        assert_eq!(snapshot.seconds, 30);
        assert_eq!(snapshot.minutes, 59);
        assert_eq!(snapshot.hours, 23);
        assert_eq!(snapshot.weekday, 5);
        assert_eq!(snapshot.day, 29);
        assert_eq!(snapshot.month, 2);
        assert_eq!(snapshot.year, 24);
        assert!(!snapshot.hour_12);
        assert!(!snapshot.is_uninitialized());
    }

    #[test]
    fn test_read_12h_pm() {
        let mut raw = LEAP_EVENING;
        // 12 hour format, PM, 11
        raw[HOURS] = 0x71;
        let (mut rtc, _) = rtc_with(raw, 0x00);
        let snapshot = rtc.read_snapshot();

        assert!(snapshot.hour_12);
        assert!(snapshot.pm);
        assert_eq!(snapshot.hours, 11);
        assert_eq!(snapshot.hours_24(), 23);
    }

    #[test]
    fn test_oscillator_stop_reads_as_uninitialized() {
        let (mut rtc, _) = rtc_with(LEAP_EVENING, OSF);
        let snapshot = rtc.read_snapshot();
        assert!(snapshot.is_uninitialized());
        assert_eq!(snapshot.minutes, 59);
    }

    #[test]
    fn test_edit_after_oscillator_stop_keeps_month() {
        let mut raw = LEAP_EVENING;
        raw[MONTH] = 0x06;
        raw[DATE] = 0x15;
        let (mut rtc, bus) = rtc_with(raw, OSF);
        assert!(rtc.read_snapshot().is_uninitialized());

        rtc.increment_minute().unwrap();
        assert_eq!(bus.regs()[MINUTES], 0x00);
        assert_eq!(bus.regs()[MONTH], 0x06);

        rtc.increment_day().unwrap();
        assert_eq!(bus.regs()[DATE], 0x16);
        assert_eq!(bus.regs()[MONTH], 0x06);
    }

    #[test]
    fn test_bus_failure_keeps_last_snapshot() {
        let (mut rtc, bus) = rtc_with(LEAP_EVENING, 0x00);
        let good = rtc.read_snapshot();

        bus.set_fail(true);
        assert_eq!(rtc.read_snapshot(), good);
        assert_eq!(rtc.increment_minute(), Err(RtcError::Bus));
    }

    #[test]
    fn test_first_read_failure_is_uninitialized() {
        let (mut rtc, bus) = rtc_with(LEAP_EVENING, 0x00);
        bus.set_fail(true);
        assert!(rtc.read_snapshot().is_uninitialized());
    }

    #[test]
    fn test_invalid_month_rejected() {
        let (mut rtc, bus) = rtc_with(LEAP_EVENING, 0x00);
        let good = rtc.read_snapshot();

        bus.poke(MONTH, 0x13);
        assert_eq!(rtc.read_registers(), Err(RtcError::InvalidData));
        assert_eq!(rtc.read_snapshot(), good);
    }

    #[test]
    fn test_increment_hour_wraps_and_keeps_seconds() {
        let (mut rtc, bus) = rtc_with(LEAP_EVENING, 0x00);
        rtc.increment_hour().unwrap();

        let regs = bus.regs();
        assert_eq!(regs[HOURS], 0x00);
        assert_eq!(regs[MINUTES], 0x59);
        assert_eq!(regs[SECONDS], 0x30);
        assert_eq!(regs[DATE], 0x29);
    }

    #[test]
    fn test_increment_day_wraps_leap_february() {
        let (mut rtc, bus) = rtc_with(LEAP_EVENING, 0x00);
        rtc.increment_day().unwrap();

        let snapshot = rtc.read_snapshot();
        assert_eq!(snapshot.day, 1);
        assert_eq!(snapshot.month, 2);
        // 2024-02-01 was a Thursday
        assert_eq!(snapshot.weekday, 5);
        assert_eq!(bus.regs()[SECONDS], 0x30);
    }

    #[test]
    fn test_toggle_hour_format_preserves_time() {
        let (mut rtc, bus) = rtc_with(LEAP_EVENING, 0x00);
        rtc.toggle_hour_format().unwrap();

        assert_eq!(bus.regs()[HOURS], 0x71);
        let snapshot = rtc.read_snapshot();
        assert!(snapshot.hour_12);
        assert_eq!(snapshot.hours_24(), 23);

        rtc.toggle_hour_format().unwrap();
        assert_eq!(bus.regs()[HOURS], 0x23);
    }

    #[test]
    fn test_apply_dispatches() {
        let (mut rtc, bus) = rtc_with(LEAP_EVENING, 0x00);
        rtc.apply(RtcCommand::IncrementYear).unwrap();
        assert_eq!(bus.regs()[YEAR], 0x25);
        // 29 Feb does not exist in 2025
        assert_eq!(bus.regs()[DATE], 0x28);
    }

    #[test]
    fn test_reset_to_default_clears_oscillator_stop() {
        let (mut rtc, bus) = rtc_with(LEAP_EVENING, OSF);
        assert!(rtc.read_snapshot().is_uninitialized());

        rtc.reset_to_default().unwrap();
        assert_eq!(bus.regs()[STATUS] & OSF, 0);

        let snapshot = rtc.read_snapshot();
        assert_eq!(snapshot, RtcSnapshot::DEFAULT);
    }
}
