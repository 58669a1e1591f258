//! Digit accumulation
//!
//! Folds received digit codes into the displayed value. Digits arrive most
//! significant first; each lands directly at its final decimal place, so a
//! partially received value is already correctly scaled.

use segmux_protocol::DigitCode;

use crate::config::MAX_DIGITS;

/// Decimal point shown on the leading digit to flag a failed reception
pub const ERROR_DOT: u8 = 0b1;

/// Power of ten, `10^exp`
///
/// Saturates at `u32::MAX` for exponents above 9.
pub const fn pow10(exp: u8) -> u32 {
    let mut result: u32 = 1;
    let mut i = 0;
    while i < exp {
        result = result.saturating_mul(10);
        i += 1;
    }
    result
}

/// Result of accepting one code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Accept {
    /// Digit stored, more expected
    Pending,
    /// Digit stored, capacity reached
    Complete,
    /// Malformed code dropped, nothing changed
    Rejected,
}

/// Assembles a multi-digit value and its decimal points
#[derive(Debug, Clone)]
pub struct DigitAccumulator {
    value: u32,
    dot_mask: u8,
    count: u8,
    capacity: u8,
}

impl DigitAccumulator {
    /// Create an empty accumulator for `capacity` digits (clamped to 1-8)
    pub fn new(capacity: u8) -> Self {
        Self {
            value: 0,
            dot_mask: 0,
            count: 0,
            capacity: capacity.clamp(1, MAX_DIGITS),
        }
    }

    /// Clear value, decimal points and count
    pub fn reset(&mut self) {
        self.value = 0;
        self.dot_mask = 0;
        self.count = 0;
    }

    /// Drop everything received and flag the error on the leading digit
    pub fn abort(&mut self) {
        self.reset();
        self.dot_mask = ERROR_DOT;
    }

    /// Accept one received code
    ///
    /// A code whose value bits are not a decimal digit is dropped without
    /// touching any state, decimal point included. Once complete, further
    /// codes are ignored until [`reset`](Self::reset).
    pub fn accept(&mut self, code: DigitCode) -> Accept {
        if self.is_complete() {
            return Accept::Complete;
        }
        let Some(digit) = code.digit() else {
            return Accept::Rejected;
        };

        if code.has_dot() {
            self.dot_mask |= 1 << self.count;
        }
        let place = self.capacity - 1 - self.count;
        self.value += digit as u32 * pow10(place);
        self.count += 1;

        if self.is_complete() {
            Accept::Complete
        } else {
            Accept::Pending
        }
    }

    /// Accumulated value
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Decimal points, bit *i* = *i*-th digit received
    ///
    /// Never shifted out with the scan masks; the panel hardware shows dots.
    pub fn dot_mask(&self) -> u8 {
        self.dot_mask
    }

    /// Digits received so far
    pub fn count(&self) -> u8 {
        self.count
    }

    /// Digits per session
    pub fn capacity(&self) -> u8 {
        self.capacity
    }

    /// Check if every digit slot is filled
    pub fn is_complete(&self) -> bool {
        self.count >= self.capacity
    }
}
