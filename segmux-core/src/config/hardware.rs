//! Hardware configuration types
//!
//! These types define which GPIOs carry the shift-register lines, the
//! scan strobe and the serial input.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::panel::PanelConfig;
use super::ConfigError;

/// Number of user GPIOs (0-29 on the RP2040)
pub const GPIO_COUNT: u8 = 30;

/// GPIO assignment for the panel
///
/// `serial_data` and `serial_input` are two GPIOs wired to the same
/// physical line: the first drives it towards the shift register, the
/// second samples it when the remote sender owns the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PinAssignment {
    /// Shift-register serial data (SER), released during input sessions
    pub serial_data: u8,
    /// Serial input sampling pin, tied to the `serial_data` line
    pub serial_input: u8,
    /// Shift-register clock (SRCLK)
    pub serial_clock: u8,
    /// Input clock, one rising edge per received bit
    pub input_clock: u8,
    /// Scan-line counter strobe
    pub strobe: u8,
}

impl Default for PinAssignment {
    fn default() -> Self {
        Self::new()
    }
}

impl PinAssignment {
    /// Default wiring of the reference board
    pub const fn new() -> Self {
        Self {
            serial_data: 4,
            serial_input: 1,
            serial_clock: 3,
            input_clock: 2,
            strobe: 0,
        }
    }

    /// All assigned GPIOs
    pub const fn as_array(&self) -> [u8; 5] {
        [
            self.serial_data,
            self.serial_input,
            self.serial_clock,
            self.input_clock,
            self.strobe,
        ]
    }

    /// Check every GPIO exists and is used once
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pins = self.as_array();
        let mut seen: u32 = 0;
        for pin in pins {
            if pin >= GPIO_COUNT {
                return Err(ConfigError::InvalidPin(pin));
            }
            let mask = 1 << pin;
            if seen & mask != 0 {
                return Err(ConfigError::DuplicatePin(pin));
            }
            seen |= mask;
        }
        Ok(())
    }
}

/// Complete board configuration
///
/// This is the top-level structure loaded from `panel.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardConfig {
    /// Panel timing and geometry
    #[cfg_attr(feature = "serde", serde(default))]
    pub panel: PanelConfig,
    /// GPIO assignment
    #[cfg_attr(feature = "serde", serde(default))]
    pub pins: PinAssignment,
}

impl BoardConfig {
    /// Validate panel and pins
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.panel.validate()?;
        self.pins.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pins_valid() {
        let pins = PinAssignment::new();
        assert_eq!(pins.validate(), Ok(()));
        assert_eq!(BoardConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_pin_out_of_range() {
        let pins = PinAssignment {
            strobe: 30,
            ..PinAssignment::new()
        };
        assert_eq!(pins.validate(), Err(ConfigError::InvalidPin(30)));
    }

    #[test]
    fn test_duplicate_pin() {
        let pins = PinAssignment {
            serial_input: 4,
            ..PinAssignment::new()
        };
        assert_eq!(pins.validate(), Err(ConfigError::DuplicatePin(4)));
    }

    #[test]
    fn test_board_reports_panel_errors_first() {
        let mut board = BoardConfig::default();
        board.panel.digits = 0;
        board.pins.strobe = 99;
        assert_eq!(board.validate(), Err(ConfigError::InvalidDigitCount(0)));
    }
}
