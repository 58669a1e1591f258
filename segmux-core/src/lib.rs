//! Board-agnostic core logic for the segmux display firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Bit queue between the edge interrupt and the main loop
//! - Step-by-step shift register sender
//! - Glyph coverage for the scan lines
//! - Digit accumulation and input session timeout
//! - The cooperative display/input scheduler
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod display;
pub mod input;
pub mod queue;
pub mod scheduler;
pub mod shared;
pub mod shift;

#[cfg(test)]
mod testing;

pub use scheduler::{Activity, Multiplexer, PanelPins, Stats};
pub use shared::SharedState;
