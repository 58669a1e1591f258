//! Configuration loading
//!
//! `panel.toml` is parsed and validated by the build script, which emits
//! it as the `BOARD` constant included here.

use defmt::*;
use segmux_core::config::{BoardConfig, PanelConfig, PinAssignment};

include!(concat!(env!("OUT_DIR"), "/board_config.rs"));

/// Board configuration to run with
///
/// Falls back to defaults if the compiled-in configuration does not
/// validate.
pub fn load() -> BoardConfig {
    match BOARD.validate() {
        Ok(()) => BOARD,
        Err(e) => {
            error!("Invalid panel.toml ({}), using defaults", e);
            BoardConfig::default()
        }
    }
}
