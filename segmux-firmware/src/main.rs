//! Segmux - Multiplexed Segment Display Firmware
//!
//! Main firmware binary for RP2040 boards driving a multiplexed segment
//! display through a shift register and a scan-line counter, with the
//! value to show received over a serial line that shares the shift
//! register's data pin.
//!
//! The edge sampler and the refresh tick run as tasks on a high-priority
//! interrupt executor. The scheduler runs in thread mode, polling in a
//! tight loop.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use embassy_executor::InterruptExecutor;
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use {defmt_rtt as _, panic_probe as _};

use segmux_core::{Activity, Multiplexer, PanelPins, SharedState};
use segmux_hal_rp2040::{BlockingDelay, PinBank};

mod config;
mod tasks;

/// Flags and bit queue shared with the interrupt-level tasks
static SHARED: SharedState = SharedState::new();

static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

/// Main entry point
#[entry]
fn main() -> ! {
    info!("Segmux firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let board = config::load();
    info!(
        "Panel: {} digits, refresh {} us (frame {} us), timeout {} cycles",
        board.panel.digits,
        board.panel.refresh_period_us,
        board.panel.frame_period_us(),
        board.panel.timeout_cycles
    );

    let mut bank = PinBank::new(p);
    let gpio = unwrap!(bank.take_panel(&board.pins));
    info!(
        "Pins: data={} input={} clock={} input_clock={} strobe={}",
        board.pins.serial_data,
        board.pins.serial_input,
        board.pins.serial_clock,
        board.pins.input_clock,
        board.pins.strobe
    );

    // Resets the shared state, so it must run before the tasks start
    let pins = PanelPins {
        data: gpio.data,
        clock: gpio.clock,
        strobe: gpio.strobe,
        delay: BlockingDelay,
    };
    let mut mux = Multiplexer::new(&SHARED, pins, board.panel);

    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);

    info!("Spawning tasks...");
    spawner
        .spawn(tasks::edge_task(&SHARED, gpio.input_clock, gpio.data_in))
        .unwrap();
    spawner
        .spawn(tasks::refresh_task(&SHARED, board.panel.refresh_period_us))
        .unwrap();

    info!("Entering scheduler loop");

    loop {
        match mux.poll() {
            Activity::SessionStarted => debug!("Receiving"),
            Activity::SessionComplete { value, dots } => {
                info!("Displaying {} (dots {=u8:#b})", value, dots);
                debug!("{}", mux.stats());
            }
            Activity::SessionTimedOut { digits } => {
                warn!("Input timed out after {} digits", digits);
                debug!("{}", mux.stats());
            }
            Activity::Refreshed { scan_line } => trace!("Scan line {}", scan_line),
            Activity::Idle | Activity::Shifting | Activity::Receiving => {}
        }
    }
}
