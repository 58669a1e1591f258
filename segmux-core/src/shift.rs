//! Non-blocking shift-register transmission
//!
//! An 8-bit value is clocked out in 16 half-steps, one per call:
//!
//! ```text
//! call:    1     2     3     4    ...   15    16    17..
//! SRCLK:  low  high   low  high   ...  low  high    -
//! SER:     -   b7     -    b6     ...   -    b0     -
//! phase: Begin Mid   Mid   Mid    ...  Mid  Last  Finished
//! ```
//!
//! The scheduler checks the input queue between calls, so no received bit
//! waits longer than one half-step.

use segmux_hal::OutputPin;

/// Bits per transmitted value
pub const BITS_PER_VALUE: u8 = 8;

/// Outcome of one half-step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// First half-step done, clock is low
    Beginning,
    /// Somewhere in between
    Middle,
    /// Last bit shifted in, clock is high
    Last,
    /// Nothing to send, no pin touched
    Finished,
}

/// Step-by-step sender for one 8-bit value
#[derive(Debug, Clone)]
pub struct StepSender {
    value: u8,
    /// Bit being sent, MSB first; `BITS_PER_VALUE` when done
    index: u8,
    /// Next half-step sets data and raises the clock
    going_high: bool,
}

impl Default for StepSender {
    fn default() -> Self {
        Self::idle()
    }
}

impl StepSender {
    /// Create a sender with nothing to send
    pub const fn idle() -> Self {
        Self {
            value: 0,
            index: BITS_PER_VALUE,
            going_high: false,
        }
    }

    /// Start sending `value`
    pub fn begin(&mut self, value: u8) {
        self.value = value;
        self.index = 0;
        self.going_high = false;
    }

    /// Perform exactly one half-step
    pub fn step<D, C>(&mut self, data: &mut D, clock: &mut C) -> Phase
    where
        D: OutputPin + ?Sized,
        C: OutputPin + ?Sized,
    {
        if self.index >= BITS_PER_VALUE {
            return Phase::Finished;
        }

        if self.going_high {
            let phase = if self.index == BITS_PER_VALUE - 1 {
                Phase::Last
            } else {
                Phase::Middle
            };
            data.set_state(self.value & (1 << (BITS_PER_VALUE - 1 - self.index)) != 0);
            clock.set_high();
            self.going_high = false;
            self.index += 1;
            phase
        } else {
            let phase = if self.index == 0 {
                Phase::Beginning
            } else {
                Phase::Middle
            };
            clock.set_low();
            self.going_high = true;
            phase
        }
    }

    /// Check if the last value has been fully sent
    pub fn is_finished(&self) -> bool {
        self.index >= BITS_PER_VALUE
    }

    /// Value being (or last) sent
    pub fn value(&self) -> u8 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockPin;

    #[test]
    fn test_idle_sender_touches_nothing() {
        let mut sender = StepSender::idle();
        let mut data = MockPin::new();
        let mut clock = MockPin::new();

        assert!(sender.is_finished());
        assert_eq!(sender.step(&mut data, &mut clock), Phase::Finished);
        assert_eq!(data.writes, 0);
        assert_eq!(clock.writes, 0);
    }

    #[test]
    fn test_phase_sequence() {
        let mut sender = StepSender::idle();
        let mut data = MockPin::new();
        let mut clock = MockPin::new();
        sender.begin(0xA5);

        assert_eq!(sender.step(&mut data, &mut clock), Phase::Beginning);
        for _ in 2..16 {
            assert_eq!(sender.step(&mut data, &mut clock), Phase::Middle);
        }
        assert_eq!(sender.step(&mut data, &mut clock), Phase::Last);
        assert!(clock.is_set_high());

        for _ in 0..3 {
            assert_eq!(sender.step(&mut data, &mut clock), Phase::Finished);
        }
    }

    #[test]
    fn test_msb_first_on_rising_edge() {
        let value = 0b1011_0010;
        let mut sender = StepSender::idle();
        let mut data = MockPin::new();
        let mut clock = MockPin::new();
        sender.begin(value);

        for bit in (0..8).rev() {
            // Setup half-step: clock low, data untouched
            let data_writes = data.writes;
            sender.step(&mut data, &mut clock);
            assert!(!clock.is_set_high());
            assert_eq!(data.writes, data_writes);

            // Data half-step: data valid when the clock rises
            let rises = clock.rises;
            sender.step(&mut data, &mut clock);
            assert_eq!(clock.rises, rises + 1);
            assert_eq!(data.is_set_high(), value & (1 << bit) != 0);
        }
        assert!(sender.is_finished());
        assert_eq!(clock.rises, 8);
    }

    #[test]
    fn test_begin_restarts_midway() {
        let mut sender = StepSender::idle();
        let mut data = MockPin::new();
        let mut clock = MockPin::new();

        sender.begin(0xFF);
        for _ in 0..5 {
            sender.step(&mut data, &mut clock);
        }

        sender.begin(0x00);
        assert_eq!(sender.value(), 0x00);
        assert_eq!(sender.step(&mut data, &mut clock), Phase::Beginning);
        sender.step(&mut data, &mut clock);
        assert!(!data.is_set_high());
    }
}
