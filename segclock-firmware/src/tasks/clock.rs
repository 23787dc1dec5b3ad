//! Cooperative clock loop
//!
//! Once per loop period:
//! - Feed the watchdog
//! - Evaluate buttons and the keyboard state machine (critical section)
//! - Apply any RTC command
//! - Read the RTC, render, commit the image (critical section)
//! - Count idle iterations and sleep when they run out

use defmt::*;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::Ticker;
use segclock_core::clock::Clock;
use segclock_core::display::DisplayImage;
use segclock_core::power::PowerAction;
use segclock_core::rtc::ensure_initialized;
use segclock_core::traits::{RtcClock, Watchdog};
use segclock_drivers::rtc::Ds3231;
use segclock_hal_rp2040::LoopWatchdog;

use crate::channels::{SLEEP_REQUEST, TICK_CONTEXT, WAKE};
use crate::config::{CONFIG, LOOP_PERIOD};

/// RTC on the board's I2C bus
pub type BoardRtc = Ds3231<I2c<'static, I2C0, Blocking>>;

/// Main loop task
#[embassy_executor::task]
pub async fn clock_task(mut rtc: BoardRtc, mut watchdog: LoopWatchdog) {
    info!("Clock task started");

    match ensure_initialized(&mut rtc) {
        Ok(true) => warn!("RTC was not set, loaded default date"),
        Ok(false) => {}
        Err(e) => error!("RTC reset failed: {:?}", e),
    }

    let mut clock = Clock::new(&CONFIG);
    let mut ticker = Ticker::every(LOOP_PERIOD);

    loop {
        watchdog.feed();

        let poll = TICK_CONTEXT.lock(|ctx| clock.poll_buttons(ctx.borrow_mut().buttons_mut()));
        if poll.mode_changed {
            debug!("Mode -> {:?}", clock.mode());
        }

        if let Some(command) = poll.command {
            if let Err(e) = rtc.apply(command) {
                warn!("RTC {:?} failed: {:?}", command, e);
            }
        }

        let snapshot = rtc.read_snapshot();
        let image = clock.render(&snapshot);
        TICK_CONTEXT.lock(|ctx| ctx.borrow_mut().commit(image));

        if clock.update_power(poll.any_pressed) == PowerAction::Sleep {
            sleep(&mut clock, &mut watchdog).await;
            ticker.reset();
            continue;
        }

        ticker.next().await;
    }
}

/// Blank the display and wait for button 1
async fn sleep(clock: &mut Clock, watchdog: &mut LoopWatchdog) {
    info!("Idle, sleeping");

    TICK_CONTEXT.lock(|ctx| ctx.borrow_mut().commit(DisplayImage::BLANK));
    watchdog.suspend();
    SLEEP_REQUEST.signal(());

    WAKE.wait().await;

    watchdog.resume();
    clock.wake();
    info!("Woke on button press");
}
