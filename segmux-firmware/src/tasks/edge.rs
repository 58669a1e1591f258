//! Input clock edge task
//!
//! Waits for rising edges on the input clock. The first edge of a session
//! only announces it; the scheduler then releases the shared data line and
//! every following edge samples one bit into the queue.

use defmt::*;
use embassy_rp::gpio::Input;

use segmux_core::shared::Edge;
use segmux_core::SharedState;
use segmux_hal::InputPin;
use segmux_hal_rp2040::Sampled;

/// Edge sampler task
#[embassy_executor::task]
pub async fn edge_task(
    shared: &'static SharedState,
    mut clock: Input<'static>,
    data_in: Sampled<'static>,
) {
    info!("Edge sampler started");

    loop {
        clock.wait_for_rising_edge().await;

        if let Edge::Announced = shared.on_input_edge(|| data_in.is_high()) {
            trace!("Input session announced");
        }
    }
}
