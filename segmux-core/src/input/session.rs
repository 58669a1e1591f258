//! Input session bookkeeping

use segmux_protocol::{CodeAssembler, DigitCode};

/// State of one reception, from announcing edge to completion or timeout
#[derive(Debug, Clone, Default)]
pub struct InputSession {
    active: bool,
    /// Refresh cycles left before the session is dropped
    timeout: u8,
    /// Cycles the timeout is rearmed to on every bit
    timeout_cycles: u8,
    assembler: CodeAssembler,
}

impl InputSession {
    /// Create an inactive session
    pub const fn new() -> Self {
        Self {
            active: false,
            timeout: 0,
            timeout_cycles: 0,
            assembler: CodeAssembler::new(),
        }
    }

    /// Start receiving with a timeout of `timeout_cycles` refresh cycles
    pub fn start(&mut self, timeout_cycles: u8) {
        self.active = true;
        self.timeout_cycles = timeout_cycles.max(1);
        self.timeout = self.timeout_cycles;
        self.assembler.reset();
    }

    /// Stop receiving
    pub fn clear(&mut self) {
        self.active = false;
        self.timeout = 0;
        self.assembler.reset();
    }

    /// Feed a received bit, rearming the timeout
    pub fn feed(&mut self, bit: bool) -> Option<DigitCode> {
        self.timeout = self.timeout_cycles;
        self.assembler.push(bit)
    }

    /// Count down one refresh cycle
    ///
    /// Returns true when the session has run out of time.
    pub fn tick(&mut self) -> bool {
        self.timeout = self.timeout.saturating_sub(1);
        self.timeout == 0
    }

    /// Check if a session is in progress
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Refresh cycles left
    pub fn remaining(&self) -> u8 {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_times_out_on_last_cycle() {
        let mut session = InputSession::new();
        session.start(3);
        assert!(session.is_active());
        assert!(!session.tick());
        assert!(!session.tick());
        assert!(session.tick());
    }

    #[test]
    fn test_bit_rearms_timeout() {
        let mut session = InputSession::new();
        session.start(3);
        session.tick();
        session.tick();
        assert_eq!(session.remaining(), 1);

        session.feed(true);
        assert_eq!(session.remaining(), 3);
        assert!(!session.tick());
    }

    #[test]
    fn test_feed_assembles_codes() {
        let mut session = InputSession::new();
        session.start(3);
        let code = DigitCode::from_digit(6, false).unwrap();
        let mut out = None;
        for bit in code.bits() {
            out = session.feed(bit);
        }
        assert_eq!(out, Some(code));
    }

    #[test]
    fn test_restart_drops_partial_code() {
        let mut session = InputSession::new();
        session.start(3);
        session.feed(true);
        session.feed(true);
        session.clear();
        assert!(!session.is_active());

        session.start(3);
        let code = DigitCode::from_digit(0, false).unwrap();
        let mut out = None;
        for bit in code.bits() {
            out = session.feed(bit);
        }
        assert_eq!(out, Some(code));
    }

    #[test]
    fn test_zero_timeout_still_waits_one_cycle() {
        let mut session = InputSession::new();
        session.start(0);
        assert_eq!(session.remaining(), 1);
        assert!(session.tick());
    }
}
