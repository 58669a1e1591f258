//! Display panel configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Maximum digit positions (one shift-register output each)
pub const MAX_DIGITS: u8 = 8;

/// Default digit positions
pub const DEFAULT_DIGITS: u8 = 4;

/// Default refresh cycles without a received bit before a session is dropped
pub const DEFAULT_TIMEOUT_CYCLES: u8 = 3;

/// Default refresh tick period
pub const DEFAULT_REFRESH_PERIOD_US: u32 = 600;

/// Shortest refresh tick period accepted
///
/// A full scan line transmission takes 16 main-loop iterations; shorter
/// periods only queue up refresh requests.
pub const MIN_REFRESH_PERIOD_US: u32 = 100;

/// Longest strobe or latch pulse accepted
pub const MAX_STROBE_PULSE_US: u32 = 50;

/// Multiplexed panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanelConfig {
    /// Digit positions on the panel, also the digits per input session
    pub digits: u8,
    /// Refresh cycles without a received bit before a session is dropped
    pub timeout_cycles: u8,
    /// Period of the refresh tick in microseconds
    pub refresh_period_us: u32,
    /// Width of the strobe sync pulse and of the latch pulse
    pub strobe_pulse_us: u32,
    /// Emit one extra shift clock after each value
    ///
    /// Needed by output-latching shift registers whose latch clock is tied
    /// to the shift clock.
    pub latch_pulse: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelConfig {
    /// Create the default configuration (4 digits, 600 µs refresh)
    pub const fn new() -> Self {
        Self {
            digits: DEFAULT_DIGITS,
            timeout_cycles: DEFAULT_TIMEOUT_CYCLES,
            refresh_period_us: DEFAULT_REFRESH_PERIOD_US,
            strobe_pulse_us: 1,
            latch_pulse: false,
        }
    }

    /// Check all values are in range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.digits == 0 || self.digits > MAX_DIGITS {
            return Err(ConfigError::InvalidDigitCount(self.digits));
        }
        if self.timeout_cycles == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        if self.refresh_period_us < MIN_REFRESH_PERIOD_US {
            return Err(ConfigError::RefreshPeriodTooShort(self.refresh_period_us));
        }
        if self.strobe_pulse_us > MAX_STROBE_PULSE_US {
            return Err(ConfigError::StrobePulseTooLong(self.strobe_pulse_us));
        }
        Ok(())
    }

    /// Time to show every scan line once, in microseconds
    pub fn frame_period_us(&self) -> u32 {
        // 15 glyph lines plus the sync tick
        self.refresh_period_us.saturating_mul(16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = PanelConfig::default();
        assert_eq!(config.digits, 4);
        assert_eq!(config.timeout_cycles, 3);
        assert_eq!(config.refresh_period_us, 600);
        assert!(!config.latch_pulse);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_digit_bounds() {
        let mut config = PanelConfig::new();
        config.digits = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidDigitCount(0)));
        config.digits = 9;
        assert_eq!(config.validate(), Err(ConfigError::InvalidDigitCount(9)));
        config.digits = 8;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_timing_bounds() {
        let mut config = PanelConfig::new();
        config.timeout_cycles = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidTimeout));

        let mut config = PanelConfig::new();
        config.refresh_period_us = 50;
        assert_eq!(config.validate(), Err(ConfigError::RefreshPeriodTooShort(50)));

        let mut config = PanelConfig::new();
        config.strobe_pulse_us = 1000;
        assert_eq!(config.validate(), Err(ConfigError::StrobePulseTooLong(1000)));
    }

    #[test]
    fn test_frame_period() {
        // Every line once at 600 µs is just under 10 ms, the flicker limit
        assert_eq!(PanelConfig::new().frame_period_us(), 9600);
    }
}
