//! Multiplexed display model
//!
//! Scan-line cycling and glyph coverage for the segment display.

pub mod glyph;

pub use glyph::{coverage, matches, scan_lines_for, SCAN_LINES, SYNC_LINE};

/// Result of advancing the scan counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Advance {
    /// Moved to the given glyph line
    Line(u8),
    /// Passed the sync position and wrapped to line 0
    Wrapped,
}

/// Rolling scan-line index (0-14)
#[derive(Debug, Clone, Default)]
pub struct ScanCursor {
    line: u8,
}

impl ScanCursor {
    /// Start on line 0
    pub const fn new() -> Self {
        Self { line: 0 }
    }

    /// Move to the next line, skipping the sync position
    pub fn advance(&mut self) -> Advance {
        self.line += 1;
        if self.line == SYNC_LINE {
            self.line = 0;
            return Advance::Wrapped;
        }
        Advance::Line(self.line)
    }

    /// Current line
    pub fn line(&self) -> u8 {
        self.line
    }
}

/// What the panel currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplaySnapshot {
    /// Displayed decimal value
    pub value: u32,
    /// Decimal points, bit 0 = leading digit
    ///
    /// Not part of the shifted scan masks; showing dots is up to the panel
    /// hardware.
    pub dot_mask: u8,
    /// Digits received in the current or last session
    pub digits_received: u8,
    /// Scan line being shown
    pub scan_line: u8,
}
