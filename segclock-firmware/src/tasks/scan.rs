//! Display scan and button sampling
//!
//! Runs on the high-priority interrupt executor. Each tick drives one
//! digit and, every sample interval, samples both buttons. The work per
//! tick is bounded and never awaits inside the critical section.

use defmt::*;
use embassy_time::Ticker;
use segclock_core::traits::DisplayPort;
use segclock_hal_rp2040::{ButtonPins, SegmentDisplay};

use crate::channels::{SLEEP_REQUEST, TICK_CONTEXT, WAKE};
use crate::config::TICK_PERIOD;

/// Periodic tick task
#[embassy_executor::task]
pub async fn scan_task(mut display: SegmentDisplay<'static>, mut buttons: ButtonPins<'static>) {
    info!("Scan task started, tick {} us", TICK_PERIOD.as_micros());

    let mut ticker = Ticker::every(TICK_PERIOD);

    loop {
        ticker.next().await;

        TICK_CONTEXT.lock(|ctx| {
            ctx.borrow_mut().tick(&mut display, &buttons);
        });

        if SLEEP_REQUEST.try_take().is_some() {
            display.quiesce();
            buttons.wait_for_wake().await;
            WAKE.signal(());
            ticker.reset();
        }
    }
}
