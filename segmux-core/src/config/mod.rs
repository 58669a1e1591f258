//! Configuration types
//!
//! Board-agnostic configuration structures. The firmware fills them from
//! `panel.toml` at build time; with the `serde` feature they can be
//! deserialized directly.

pub mod hardware;
pub mod panel;

pub use hardware::*;
pub use panel::*;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Digit count outside 1-8
    InvalidDigitCount(u8),
    /// Receive timeout of zero refresh cycles
    InvalidTimeout,
    /// Refresh period below the minimum
    RefreshPeriodTooShort(u32),
    /// Strobe pulse longer than the maximum busy-wait
    StrobePulseTooLong(u32),
    /// GPIO number does not exist on the chip
    InvalidPin(u8),
    /// Same GPIO assigned to two functions
    DuplicatePin(u8),
}
