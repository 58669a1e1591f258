//! Busy-wait delay

use embassy_time::{block_for, Duration};
use segmux_hal::BusyWait;

/// Spins on the embassy time driver
///
/// Resolution is one timer tick (1 µs with the default RP2040 tick rate).
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockingDelay;

impl BusyWait for BlockingDelay {
    fn delay_us(&mut self, us: u32) {
        block_for(Duration::from_micros(us as u64));
    }
}
