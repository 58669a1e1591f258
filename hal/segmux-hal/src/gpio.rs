//! GPIO pin abstractions
//!
//! Provides traits for digital input and output pins that can be implemented
//! by chip-specific HALs, plus the direction control needed by the data line
//! that is shared between the shift register and the serial input.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Pin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Driven by this MCU
    Output,
    /// High impedance, driven by the remote sender
    Input,
}

/// Pin whose direction can be switched at runtime
///
/// The serial data line is driven as an output while the display is being
/// refreshed and released to the remote sender while a digit session is
/// being received.
pub trait DirectionPin {
    /// Drive the pin from this MCU
    fn set_as_output(&mut self);

    /// Release the pin (high impedance)
    fn set_as_input(&mut self);

    /// Current direction
    fn direction(&self) -> Direction;
}

/// Data line shared between shift-register output and serial input
pub trait SharedLine: OutputPin + DirectionPin {}

// Blanket implementation for types that implement both traits
impl<T: OutputPin + DirectionPin> SharedLine for T {}
