//! Segmux Hardware Abstraction Layer
//!
//! This crate defines the pin and timing traits the display scheduler is
//! written against. Chip-specific HALs implement them, and host tests
//! implement them with recording mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  segmux-firmware / segmux-core          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  segmux-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  segmux-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`gpio::DirectionPin`] - Output/input switching for the shared data line
//! - [`delay::BusyWait`] - Short blocking delays for strobe pulses

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use delay::BusyWait;
pub use gpio::{Direction, DirectionPin, InputPin, OutputPin, SharedLine};
