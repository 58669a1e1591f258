//! Blocking delay abstraction
//!
//! The scheduler never waits for long. The only blocking wait is the
//! microsecond-scale strobe pulse that marks the blank scan line, and the
//! optional latch pulse after a transmission.

/// Short busy-wait delay
pub trait BusyWait {
    /// Spin for at least `us` microseconds
    fn delay_us(&mut self, us: u32);
}

impl<T: BusyWait + ?Sized> BusyWait for &mut T {
    fn delay_us(&mut self, us: u32) {
        (**self).delay_us(us);
    }
}
