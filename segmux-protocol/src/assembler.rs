//! Bit-by-bit code assembly on the receiving side.

use crate::code::{DigitCode, CODE_BITS};

/// State machine that groups received bits into digit codes
///
/// Bits arrive LSB first. Every [`CODE_BITS`]th bit completes a code and
/// the assembler starts over.
#[derive(Debug, Clone, Default)]
pub struct CodeAssembler {
    partial: u8,
    position: u8,
}

impl CodeAssembler {
    /// Create an empty assembler
    pub const fn new() -> Self {
        Self {
            partial: 0,
            position: 0,
        }
    }

    /// Discard any partially received code
    pub fn reset(&mut self) {
        self.partial = 0;
        self.position = 0;
    }

    /// Feed one received bit
    ///
    /// Returns the completed code on the last bit of a code.
    pub fn push(&mut self, bit: bool) -> Option<DigitCode> {
        if bit {
            self.partial |= 1 << self.position;
        }
        self.position += 1;

        if self.position < CODE_BITS {
            return None;
        }

        let code = DigitCode::truncate(self.partial);
        self.reset();
        Some(code)
    }

    /// Bits received towards the current code (0-4)
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Check if no bits of a code are pending
    pub fn is_idle(&self) -> bool {
        self.position == 0
    }
}
