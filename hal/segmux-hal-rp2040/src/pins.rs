//! Dynamic pin allocation for config-driven hardware setup
//!
//! Provides a way to get GPIO pins by number at runtime, so pin numbers
//! can come from `panel.toml` rather than being hardcoded.

use embassy_rp::gpio::{AnyPin, Input, Level, Pull};
use embassy_rp::{Peri, Peripherals};
use segmux_core::config::{PinAssignment, GPIO_COUNT};

use crate::gpio::{DataLine, PushPull, Sampled};

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin(u8),
    /// Pin already taken
    AlreadyTaken(u8),
}

/// Pin bank that holds all GPIO pins and allows taking them by number
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT as usize],
}

impl PinBank {
    /// Create a new pin bank from peripherals
    ///
    /// Takes ownership of all GPIO pins. After this call, pins must be
    /// obtained through [`take`](Self::take).
    pub fn new(p: Peripherals) -> Self {
        Self {
            pins: [
                Some(p.PIN_0.into()),
                Some(p.PIN_1.into()),
                Some(p.PIN_2.into()),
                Some(p.PIN_3.into()),
                Some(p.PIN_4.into()),
                Some(p.PIN_5.into()),
                Some(p.PIN_6.into()),
                Some(p.PIN_7.into()),
                Some(p.PIN_8.into()),
                Some(p.PIN_9.into()),
                Some(p.PIN_10.into()),
                Some(p.PIN_11.into()),
                Some(p.PIN_12.into()),
                Some(p.PIN_13.into()),
                Some(p.PIN_14.into()),
                Some(p.PIN_15.into()),
                Some(p.PIN_16.into()),
                Some(p.PIN_17.into()),
                Some(p.PIN_18.into()),
                Some(p.PIN_19.into()),
                Some(p.PIN_20.into()),
                Some(p.PIN_21.into()),
                Some(p.PIN_22.into()),
                Some(p.PIN_23.into()),
                Some(p.PIN_24.into()),
                Some(p.PIN_25.into()),
                Some(p.PIN_26.into()),
                Some(p.PIN_27.into()),
                Some(p.PIN_28.into()),
                Some(p.PIN_29.into()),
            ],
        }
    }

    /// Take a pin by number
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        self.pins
            .get_mut(pin_num as usize)
            .ok_or(PinError::InvalidPin(pin_num))?
            .take()
            .ok_or(PinError::AlreadyTaken(pin_num))
    }

    /// Take and configure every pin the panel uses
    pub fn take_panel(&mut self, assignment: &PinAssignment) -> Result<PanelGpio, PinError> {
        let data = DataLine::new(self.take(assignment.serial_data)?);
        let data_in = Sampled::new(self.take(assignment.serial_input)?, Pull::None);
        let clock = PushPull::new(self.take(assignment.serial_clock)?, Level::Low);
        let input_clock = Input::new(self.take(assignment.input_clock)?, Pull::Down);
        let strobe = PushPull::new(self.take(assignment.strobe)?, Level::Low);

        Ok(PanelGpio {
            data,
            data_in,
            clock,
            input_clock,
            strobe,
        })
    }
}

/// Configured panel pins
///
/// `data` and `data_in` are two GPIOs wired to the same line: `data` drives
/// the shift register and is released during a session, `data_in` is read
/// by the edge handler.
pub struct PanelGpio {
    pub data: DataLine<'static>,
    pub data_in: Sampled<'static>,
    pub clock: PushPull<'static>,
    /// Rising edges announce a session and clock in bits
    pub input_clock: Input<'static>,
    pub strobe: PushPull<'static>,
}
