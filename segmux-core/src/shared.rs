//! State shared between the interrupt handlers and the main loop
//!
//! Every field has one writer context and one reader/clearer context:
//!
//! | field            | set by           | cleared / read by |
//! |------------------|------------------|-------------------|
//! | `input_mode`     | edge handler     | main loop         |
//! | `refresh_needed` | tick handler     | main loop         |
//! | queue write side | edge handler     | main loop (reset) |
//! | queue read side  | main loop        | main loop         |
//!
//! Handlers only set flags or push one bit, so they stay loop-free.

use portable_atomic::{AtomicBool, Ordering};

use crate::queue::BitQueue;

/// What the edge handler did with an input clock edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// First edge of a session, no data carried
    Announced,
    /// Data bit sampled and queued
    Sampled(bool),
}

/// Synchronized flags and bit queue
///
/// Meant to live in a `static` so both contexts can reach it.
#[derive(Debug)]
pub struct SharedState {
    input_mode: AtomicBool,
    refresh_needed: AtomicBool,
    queue: BitQueue,
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedState {
    /// Create idle shared state
    pub const fn new() -> Self {
        Self {
            input_mode: AtomicBool::new(false),
            refresh_needed: AtomicBool::new(false),
            queue: BitQueue::new(),
        }
    }

    // Interrupt context

    /// Handle a rising edge on the input clock
    ///
    /// The first edge while idle only announces a session. Later edges
    /// sample the data line and queue the bit.
    pub fn on_input_edge(&self, sample: impl FnOnce() -> bool) -> Edge {
        if !self.input_mode.load(Ordering::Acquire) {
            self.input_mode.store(true, Ordering::Release);
            return Edge::Announced;
        }
        let bit = sample();
        self.queue.write(bit);
        Edge::Sampled(bit)
    }

    /// Handle a refresh timer tick
    pub fn on_refresh_tick(&self) {
        self.refresh_needed.store(true, Ordering::Release);
    }

    // Main context

    /// Check if a session has been announced and not yet ended
    pub fn is_input_mode(&self) -> bool {
        self.input_mode.load(Ordering::Acquire)
    }

    /// Read and clear the refresh request in one atomic step
    pub fn take_refresh(&self) -> bool {
        self.refresh_needed.swap(false, Ordering::AcqRel)
    }

    /// Check for a refresh request without clearing it
    pub fn refresh_pending(&self) -> bool {
        self.refresh_needed.load(Ordering::Acquire)
    }

    /// Take the oldest received bit
    pub fn read_bit(&self) -> Option<bool> {
        self.queue.read()
    }

    /// Leave input mode with an empty queue
    ///
    /// Runs in a critical section so no edge lands between emptying the
    /// queue and clearing the flag.
    pub fn end_input_mode(&self) {
        critical_section::with(|_| {
            self.queue.reset();
            self.input_mode.store(false, Ordering::Release);
        });
    }

    /// Return to power-on state with a refresh requested
    pub fn reset(&self) {
        self.end_input_mode();
        self.refresh_needed.store(true, Ordering::Release);
    }

    /// Bit queue, for diagnostics
    pub fn queue(&self) -> &BitQueue {
        &self.queue
    }
}
