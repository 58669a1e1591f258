//! Digit code encoding and decoding.
//!
//! Code format (5 bits):
//! - VALUE (bits 0-3): decimal digit, 0-9 valid, 10-15 malformed
//! - DOT (bit 4): decimal point is lit after this digit

/// Number of bits in one digit code
pub const CODE_BITS: u8 = 5;

/// Decimal point flag
pub const DOT_FLAG: u8 = 0b1_0000;

/// Digit value bits
pub const VALUE_MASK: u8 = 0b0_1111;

/// All bits a code may use
pub const CODE_MASK: u8 = DOT_FLAG | VALUE_MASK;

/// Errors that can occur when building codes or bit streams
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CodeError {
    /// Raw code uses bits above bit 4
    OutOfRange,
    /// Digit is not a decimal digit (0-9)
    InvalidDigit,
    /// Digit count is zero or exceeds the stream capacity
    InvalidDigitCount,
    /// Value has more decimal digits than the requested digit count
    ValueTooLarge,
}

/// A 5-bit digit code as it travels on the wire
///
/// A code can carry a value of 10-15 when it was received corrupted. Such
/// codes are representable so the receiver can discard them; they can
/// only be built through [`DigitCode::new`] or the bit assembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitCode(u8);

impl DigitCode {
    /// Wrap a raw 5-bit code
    pub const fn new(raw: u8) -> Result<Self, CodeError> {
        if raw & !CODE_MASK != 0 {
            return Err(CodeError::OutOfRange);
        }
        Ok(Self(raw))
    }

    /// Build the code for a decimal digit
    pub const fn from_digit(digit: u8, dot: bool) -> Result<Self, CodeError> {
        if digit >= 10 {
            return Err(CodeError::InvalidDigit);
        }
        let raw = if dot { digit | DOT_FLAG } else { digit };
        Ok(Self(raw))
    }

    /// Keep only the low 5 bits of `raw`
    pub(crate) const fn truncate(raw: u8) -> Self {
        Self(raw & CODE_MASK)
    }

    /// Raw 5-bit value
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Decimal point flag
    pub const fn has_dot(self) -> bool {
        self.0 & DOT_FLAG != 0
    }

    /// The 4 value bits, whether or not they form a decimal digit
    pub const fn value(self) -> u8 {
        self.0 & VALUE_MASK
    }

    /// The decimal digit, or `None` for a malformed code
    pub const fn digit(self) -> Option<u8> {
        let value = self.value();
        if value < 10 {
            Some(value)
        } else {
            None
        }
    }

    /// Check if the value bits are not a decimal digit
    pub const fn is_malformed(self) -> bool {
        self.digit().is_none()
    }

    /// Bits of this code in transmission order
    pub const fn bits(self) -> CodeBits {
        CodeBits {
            raw: self.0,
            position: 0,
        }
    }
}

/// Iterator over the bits of a code, LSB first
#[derive(Debug, Clone)]
pub struct CodeBits {
    raw: u8,
    position: u8,
}

impl Iterator for CodeBits {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.position >= CODE_BITS {
            return None;
        }
        let bit = self.raw & (1 << self.position) != 0;
        self.position += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (CODE_BITS - self.position) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CodeBits {}
