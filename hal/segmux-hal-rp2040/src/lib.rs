//! RP2040-specific HAL for the segmux display firmware
//!
//! This crate provides RP2040 implementations of the shared `segmux-hal`
//! traits:
//!
//! - GPIO wrappers over embassy-rp pins (output, input, shared data line)
//! - Busy-wait delay on the embassy time driver
//! - Dynamic pin allocation for config-driven setup

#![no_std]

pub mod delay;
pub mod gpio;
pub mod pins;

pub use delay::BlockingDelay;
pub use gpio::{DataLine, PushPull, Sampled};
pub use pins::{PanelGpio, PinBank, PinError};
