//! Cooperative input/refresh scheduler
//!
//! [`Multiplexer::poll`] is called in a tight loop from the main context.
//! Every call does a bounded amount of work: one shift-register half-step
//! in display mode, or one queue drain plus at most one timeout step in
//! input mode. Received bits always win over display refresh.

use segmux_hal::{BusyWait, OutputPin, SharedLine};
use segmux_protocol::DigitCode;

use crate::config::PanelConfig;
use crate::display::{coverage, Advance, DisplaySnapshot, ScanCursor};
use crate::input::{Accept, DigitAccumulator, InputSession};
use crate::shared::SharedState;
use crate::shift::{Phase, StepSender};

/// Pins and delay driven by the scheduler
#[derive(Debug)]
pub struct PanelPins<D, C, S, W> {
    /// Shift register serial data, shared with the input data line
    pub data: D,
    /// Shift register clock
    pub clock: C,
    /// Scan counter advance strobe
    pub strobe: S,
    /// Short busy-wait for strobe and latch pulses
    pub delay: W,
}

/// What one call to [`Multiplexer::poll`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Activity {
    /// Nothing to send and no refresh due
    Idle,
    /// One half-step of a transmission
    Shifting,
    /// Moved to a new scan line and started sending its mask
    Refreshed { scan_line: u8 },
    /// Input mode entered, data line switched to input
    SessionStarted,
    /// Session in progress
    Receiving,
    /// All digits received
    SessionComplete { value: u32, dots: u8 },
    /// Sender went quiet, session dropped after `digits` codes
    SessionTimedOut { digits: u8 },
}

/// Running counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Stats {
    pub sessions_completed: u32,
    pub sessions_timed_out: u32,
    /// Codes whose value bits were not a decimal digit
    pub codes_rejected: u32,
    /// Full scan cycles shown
    pub frames: u32,
}

/// Display and serial input scheduler for one panel
pub struct Multiplexer<'a, D, C, S, W> {
    shared: &'a SharedState,
    pins: PanelPins<D, C, S, W>,
    config: PanelConfig,
    sender: StepSender,
    cursor: ScanCursor,
    session: InputSession,
    accumulator: DigitAccumulator,
    stats: Stats,
}

impl<'a, D, C, S, W> Multiplexer<'a, D, C, S, W>
where
    D: SharedLine,
    C: OutputPin,
    S: OutputPin,
    W: BusyWait,
{
    /// Take over the panel pins
    ///
    /// Drives every line low with the data line as output, resets the
    /// shared state and leaves a refresh pending so the first poll starts
    /// drawing.
    pub fn new(
        shared: &'a SharedState,
        mut pins: PanelPins<D, C, S, W>,
        config: PanelConfig,
    ) -> Self {
        pins.data.set_as_output();
        pins.data.set_low();
        pins.clock.set_low();
        pins.strobe.set_low();

        shared.reset();

        Self {
            shared,
            pins,
            config,
            sender: StepSender::idle(),
            cursor: ScanCursor::new(),
            session: InputSession::new(),
            accumulator: DigitAccumulator::new(config.digits),
            stats: Stats::default(),
        }
    }

    /// Run one scheduler step
    pub fn poll(&mut self) -> Activity {
        if self.shared.is_input_mode() {
            self.poll_input()
        } else {
            self.poll_display()
        }
    }

    fn poll_display(&mut self) -> Activity {
        let PanelPins { data, clock, .. } = &mut self.pins;
        match self.sender.step(data, clock) {
            Phase::Beginning | Phase::Middle => Activity::Shifting,
            Phase::Last => {
                if self.config.latch_pulse {
                    self.latch();
                }
                Activity::Shifting
            }
            Phase::Finished => {
                self.pins.strobe.set_low();
                if self.shared.take_refresh() {
                    self.next_scan_line()
                } else {
                    Activity::Idle
                }
            }
        }
    }

    fn poll_input(&mut self) -> Activity {
        let started = if self.session.is_active() {
            false
        } else {
            self.start_session();
            true
        };

        while let Some(bit) = self.shared.read_bit() {
            let Some(code) = self.session.feed(bit) else {
                continue;
            };
            if let Some(activity) = self.accept(code) {
                return activity;
            }
        }

        if self.shared.take_refresh() && self.session.tick() {
            return self.abort_session();
        }

        if started {
            Activity::SessionStarted
        } else {
            Activity::Receiving
        }
    }

    fn accept(&mut self, code: DigitCode) -> Option<Activity> {
        match self.accumulator.accept(code) {
            Accept::Pending => None,
            Accept::Rejected => {
                self.stats.codes_rejected = self.stats.codes_rejected.wrapping_add(1);
                None
            }
            Accept::Complete => Some(self.finish_session()),
        }
    }

    fn next_scan_line(&mut self) -> Activity {
        if let Advance::Wrapped = self.cursor.advance() {
            self.sync_pulse();
            self.stats.frames = self.stats.frames.wrapping_add(1);
        }
        self.pins.strobe.set_high();

        let line = self.cursor.line();
        let mask = coverage(self.accumulator.value(), line, self.accumulator.capacity());
        self.sender.begin(mask);
        Activity::Refreshed { scan_line: line }
    }

    /// Extra strobe pulse marking the blank position of the counter
    fn sync_pulse(&mut self) {
        self.pins.strobe.set_high();
        self.pins.delay.delay_us(self.config.strobe_pulse_us);
        self.pins.strobe.set_low();
    }

    /// Extra clock pulse for registers whose latch is tied to the shift clock
    fn latch(&mut self) {
        self.pins.clock.set_low();
        self.pins.delay.delay_us(self.config.strobe_pulse_us);
        self.pins.clock.set_high();
    }

    fn start_session(&mut self) {
        self.session.start(self.config.timeout_cycles);
        self.accumulator.reset();
        self.pins.data.set_as_input();
    }

    fn finish_session(&mut self) -> Activity {
        self.end_session();
        self.stats.sessions_completed = self.stats.sessions_completed.wrapping_add(1);
        Activity::SessionComplete {
            value: self.accumulator.value(),
            dots: self.accumulator.dot_mask(),
        }
    }

    fn abort_session(&mut self) -> Activity {
        let digits = self.accumulator.count();
        self.end_session();
        self.accumulator.abort();
        self.stats.sessions_timed_out = self.stats.sessions_timed_out.wrapping_add(1);
        Activity::SessionTimedOut { digits }
    }

    fn end_session(&mut self) {
        self.session.clear();
        self.shared.end_input_mode();
        self.pins.data.set_as_output();
    }

    /// Current display state
    pub fn display(&self) -> DisplaySnapshot {
        DisplaySnapshot {
            value: self.accumulator.value(),
            dot_mask: self.accumulator.dot_mask(),
            digits_received: self.accumulator.count(),
            scan_line: self.cursor.line(),
        }
    }

    /// Check if a session is in progress
    pub fn is_receiving(&self) -> bool {
        self.session.is_active()
    }

    /// Session bookkeeping
    pub fn session(&self) -> &InputSession {
        &self.session
    }

    /// Counters since setup
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Panel configuration in use
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Driven pins
    pub fn pins(&self) -> &PanelPins<D, C, S, W> {
        &self.pins
    }

}
