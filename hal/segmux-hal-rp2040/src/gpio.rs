//! GPIO wrappers implementing the `segmux-hal` pin traits

use embassy_rp::gpio::{Flex, Input, Level, Output, Pin, Pull};
use embassy_rp::Peri;
use segmux_hal::{Direction, DirectionPin, InputPin, OutputPin};

/// Push-pull output (shift clock, strobe)
pub struct PushPull<'d> {
    pin: Output<'d>,
}

impl<'d> PushPull<'d> {
    /// Configure `pin` as an output at `initial` level
    pub fn new(pin: Peri<'d, impl Pin>, initial: Level) -> Self {
        Self {
            pin: Output::new(pin, initial),
        }
    }
}

impl OutputPin for PushPull<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Plain input, sampled by the edge handler
pub struct Sampled<'d> {
    pin: Input<'d>,
}

impl<'d> Sampled<'d> {
    pub fn new(pin: Peri<'d, impl Pin>, pull: Pull) -> Self {
        Self {
            pin: Input::new(pin, pull),
        }
    }
}

impl InputPin for Sampled<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

/// Serial data line, output while displaying and input while receiving
///
/// The output latch keeps its level across direction changes, so the line
/// comes back at the level it had before the session.
pub struct DataLine<'d> {
    pin: Flex<'d>,
    direction: Direction,
}

impl<'d> DataLine<'d> {
    /// Configure `pin` as an output driving low
    pub fn new(pin: Peri<'d, impl Pin>) -> Self {
        let mut pin = Flex::new(pin);
        pin.set_low();
        pin.set_as_output();
        Self {
            pin,
            direction: Direction::Output,
        }
    }
}

impl OutputPin for DataLine<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

impl DirectionPin for DataLine<'_> {
    fn set_as_output(&mut self) {
        self.pin.set_as_output();
        self.direction = Direction::Output;
    }

    fn set_as_input(&mut self) {
        self.pin.set_as_input();
        self.direction = Direction::Input;
    }

    fn direction(&self) -> Direction {
        self.direction
    }
}
