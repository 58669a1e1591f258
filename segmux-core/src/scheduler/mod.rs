//! Main-loop scheduler
//!
//! Interleaves shift-register output, serial input and scan-line refresh
//! on one shared data pin.

pub mod multiplexer;

pub use multiplexer::{Activity, Multiplexer, PanelPins, Stats};
