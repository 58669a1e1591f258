//! Mock pins for host tests

use segmux_hal::{BusyWait, Direction, DirectionPin, OutputPin};

/// Recording GPIO mock
#[derive(Debug)]
pub struct MockPin {
    pub high: bool,
    pub direction: Direction,
    /// Level writes of any kind
    pub writes: u32,
    /// Low-to-high transitions
    pub rises: u32,
    /// Direction changes
    pub turnarounds: u32,
}

impl MockPin {
    pub fn new() -> Self {
        Self {
            high: false,
            direction: Direction::Output,
            writes: 0,
            rises: 0,
            turnarounds: 0,
        }
    }
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        if !self.high {
            self.rises += 1;
        }
        self.high = true;
        self.writes += 1;
    }

    fn set_low(&mut self) {
        self.high = false;
        self.writes += 1;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

impl DirectionPin for MockPin {
    fn set_as_output(&mut self) {
        if self.direction != Direction::Output {
            self.turnarounds += 1;
        }
        self.direction = Direction::Output;
    }

    fn set_as_input(&mut self) {
        if self.direction != Direction::Input {
            self.turnarounds += 1;
        }
        self.direction = Direction::Input;
    }

    fn direction(&self) -> Direction {
        self.direction
    }
}

/// Busy-wait mock that only counts
#[derive(Debug, Default)]
pub struct MockDelay {
    pub calls: u32,
    pub total_us: u32,
}

impl BusyWait for MockDelay {
    fn delay_us(&mut self, us: u32) {
        self.calls += 1;
        self.total_us += us;
    }
}
