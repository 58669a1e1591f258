//! Serial Digit-Code Protocol
//!
//! This crate defines the bit-level protocol spoken on the shared serial
//! input line of the segmux display. The line carries no framing bytes:
//! the sender clocks single bits, one per rising edge of the input clock.
//!
//! # Protocol Overview
//!
//! ```text
//!  edge 0      edges 1..=5          edges 6..=10               ...
//! ┌────────┬───────────────────┬───────────────────┬─────┬──────────────┐
//! │ ANNOUNCE│ CODE (digit 0)   │ CODE (digit 1)    │ ... │ CODE (N - 1) │
//! │ no data │ 5 bits, LSB first│ 5 bits, LSB first │     │              │
//! └────────┴───────────────────┴───────────────────┴─────┴──────────────┘
//!
//! CODE:  bit 0..=3  decimal digit (0-9)
//!        bit 4      decimal point after this digit
//! ```
//!
//! Digits are sent most significant first. A session ends after the
//! display's digit capacity is reached, or when the receiver times out.
//! There is no back channel: malformed codes are dropped by the receiver.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod assembler;
pub mod code;
pub mod encoder;

pub use assembler::CodeAssembler;
pub use code::{CodeBits, CodeError, DigitCode, CODE_BITS, DOT_FLAG};
pub use encoder::{encode, encode_codes, BitStream, MAX_DIGITS, MAX_STREAM_BITS};
