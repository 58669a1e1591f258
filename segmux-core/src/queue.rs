//! Single-producer / single-consumer bit queue
//!
//! Sixteen bits packed in one word with independent cursors. The input
//! interrupt writes, the main loop reads.
//!
//! There is no full condition: `write_index == read_index` always means
//! empty. Sixteen unread writes therefore make the queue look empty, and
//! every further write overwrites a slot that was never read. The reader
//! must drain faster than bits arrive; the scheduler does so by checking
//! the queue between every shift-register half-step.

use portable_atomic::{AtomicU16, AtomicU8, Ordering};

/// Number of slots
pub const QUEUE_CAPACITY: u8 = 16;

/// Fixed-capacity circular buffer of bits
///
/// The writer owns `data` and `write_index`, the reader owns `read_index`.
/// Each cursor update is a single atomic store, so neither side can observe
/// a torn cursor.
#[derive(Debug)]
pub struct BitQueue {
    data: AtomicU16,
    write_index: AtomicU8,
    read_index: AtomicU8,
}

impl Default for BitQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl BitQueue {
    /// Create an empty queue
    pub const fn new() -> Self {
        Self {
            data: AtomicU16::new(0),
            write_index: AtomicU8::new(0),
            read_index: AtomicU8::new(0),
        }
    }

    /// Empty the queue
    ///
    /// Touches the writer's cursor: the writer must be quiescent or the
    /// call made from a critical section.
    pub fn reset(&self) {
        self.data.store(0, Ordering::Relaxed);
        self.read_index.store(0, Ordering::Relaxed);
        self.write_index.store(0, Ordering::Release);
    }

    /// Append a bit (producer side)
    pub fn write(&self, bit: bool) {
        let index = self.write_index.load(Ordering::Relaxed);
        let mask = 1u16 << index;
        let data = self.data.load(Ordering::Relaxed);
        let data = if bit { data | mask } else { data & !mask };
        self.data.store(data, Ordering::Relaxed);
        self.write_index
            .store((index + 1) % QUEUE_CAPACITY, Ordering::Release);
    }

    /// Take the oldest unread bit (consumer side)
    pub fn read(&self) -> Option<bool> {
        let index = self.read_index.load(Ordering::Relaxed);
        if index == self.write_index.load(Ordering::Acquire) {
            return None;
        }
        let bit = self.data.load(Ordering::Relaxed) & (1u16 << index) != 0;
        self.read_index
            .store((index + 1) % QUEUE_CAPACITY, Ordering::Release);
        Some(bit)
    }

    /// Check if there is nothing to read
    pub fn is_empty(&self) -> bool {
        self.read_index.load(Ordering::Relaxed) == self.write_index.load(Ordering::Acquire)
    }

    /// Number of unread bits (0-15)
    pub fn len(&self) -> u8 {
        let write = self.write_index.load(Ordering::Acquire);
        let read = self.read_index.load(Ordering::Relaxed);
        (write + QUEUE_CAPACITY - read) % QUEUE_CAPACITY
    }
}
