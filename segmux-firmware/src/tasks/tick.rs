//! Refresh tick task
//!
//! Sets the refresh flag once per period. The main loop consumes it to
//! advance the scan line, or to count down the input timeout while a
//! session is active.

use defmt::*;
use embassy_time::{Duration, Ticker};

use segmux_core::SharedState;

/// Refresh tick task
#[embassy_executor::task]
pub async fn refresh_task(shared: &'static SharedState, period_us: u32) {
    info!("Refresh tick every {} us", period_us);

    let mut ticker = Ticker::every(Duration::from_micros(period_us as u64));

    loop {
        ticker.next().await;
        shared.on_refresh_tick();
    }
}
