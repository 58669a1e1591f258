//! Serial digit input
//!
//! Turns the bit stream drained from the queue into a displayed value.

pub mod accumulator;
pub mod session;

pub use accumulator::{pow10, Accept, DigitAccumulator, ERROR_DOT};
pub use session::InputSession;
