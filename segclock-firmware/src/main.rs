//! Segclock - Four Digit LED Clock Firmware
//!
//! Firmware for an RP2040 driving a multiplexed 7-segment display, two
//! buttons and a DS3231 RTC. Two executors split the work:
//!
//! - Interrupt executor (SWI_IRQ_1): display scan and button sampling
//! - Thread executor: the clock loop, sleeping in WFE between iterations

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use embassy_executor::{Executor, InterruptExecutor};
use embassy_rp::i2c::{Config as I2cConfig, I2c};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use segclock_drivers::rtc::Ds3231;
use segclock_hal_rp2040::{ButtonPins, LoopWatchdog, SegmentDisplay};

use crate::config::{CONFIG, LOOP_PERIOD, TICK_PERIOD, WATCHDOG_TIMEOUT};

mod channels;
mod config;
mod tasks;

static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_LOW: StaticCell<Executor> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

/// Main entry point
#[entry]
fn main() -> ! {
    info!("Segclock firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    info!(
        "Config: refresh {} ticks, sample every {} ticks, long after {} samples",
        CONFIG.refresh_period(),
        CONFIG.sample_interval(),
        CONFIG.long_press_samples()
    );
    info!(
        "Config: tick {} us, loop {} ms, sleep after {} iterations",
        TICK_PERIOD.as_micros(),
        LOOP_PERIOD.as_millis(),
        CONFIG.show_iterations()
    );

    // Segment lines a-g, dp on GPIO6-13; digit selects on GPIO14-17
    let display = SegmentDisplay::new(
        [
            p.PIN_6.into(),
            p.PIN_7.into(),
            p.PIN_8.into(),
            p.PIN_9.into(),
            p.PIN_10.into(),
            p.PIN_11.into(),
            p.PIN_12.into(),
            p.PIN_13.into(),
        ],
        [
            p.PIN_14.into(),
            p.PIN_15.into(),
            p.PIN_16.into(),
            p.PIN_17.into(),
        ],
    );

    // Button 1 (mode, wake) on GPIO18, button 2 (set) on GPIO19
    let buttons = ButtonPins::new(p.PIN_18.into(), p.PIN_19.into());
    info!("Display and buttons initialized");

    // DS3231 on I2C0: SDA GPIO4, SCL GPIO5
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, I2cConfig::default());
    let rtc = Ds3231::new(i2c);
    info!("RTC bus initialized");

    let watchdog = LoopWatchdog::start(p.WATCHDOG, WATCHDOG_TIMEOUT);
    info!("Watchdog started, {} ms", WATCHDOG_TIMEOUT.as_millis());

    // Scan task preempts the loop
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    spawner.spawn(unwrap!(tasks::scan_task(display, buttons)));

    let executor = EXECUTOR_LOW.init(Executor::new());
    executor.run(|spawner| {
        spawner.spawn(unwrap!(tasks::clock_task(rtc, watchdog)));
        info!("All tasks spawned, firmware running");
    })
}
