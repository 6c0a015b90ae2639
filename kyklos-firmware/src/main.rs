//! Kyklos - Power-Multiplexed Sensor Scanner Firmware
//!
//! Main firmware binary for RP2040-based scanner boards. A bank of binary
//! sensors shares one power budget: each sensor is gated by its own relay,
//! and the scanner energizes exactly one relay at a time, round-robin.
//!
//! Named after the Greek "kyklos" meaning "circle" - the scanner walks
//! the ring of sensor slots, one service window per slot per rotation.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use {defmt_rtt as _, panic_probe as _};

use kyklos_core::scheduler::Scanner;

use crate::config::{scan_config, RELAY_ACTIVE_HIGH, SLOT_COUNT};
use crate::pins::{BoardRelays, BoardSensors, RelayPin, SensorPin};

mod channels;
mod config;
mod pins;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Kyklos firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Build and validate the scan configuration. A bad configuration is
    // fatal: refuse to start rather than run with it.
    let config = scan_config();
    let scanner = match Scanner::new(&config) {
        Ok(scanner) => scanner,
        Err(e) => defmt::panic!("Rejecting scan configuration: {}", e),
    };
    info!(
        "Scan configuration validated: {} slots, hold {}ms, interval {}ms, stabilization {}ms",
        SLOT_COUNT,
        config.timing.power_on_ms,
        config.timing.cycle_interval_ms,
        config.timing.stabilization_ms
    );

    // Relay outputs start at the de-energized level for the board's
    // polarity; the bank drives them there again at construction.
    let relay_idle = if RELAY_ACTIVE_HIGH {
        Level::Low
    } else {
        Level::High
    };

    // Relay control pins, GPIO14-25 in slot order (see config::SLOTS)
    let relay_pins = [
        RelayPin::new(Output::new(p.PIN_14, relay_idle)),
        RelayPin::new(Output::new(p.PIN_15, relay_idle)),
        RelayPin::new(Output::new(p.PIN_16, relay_idle)),
        RelayPin::new(Output::new(p.PIN_17, relay_idle)),
        RelayPin::new(Output::new(p.PIN_18, relay_idle)),
        RelayPin::new(Output::new(p.PIN_19, relay_idle)),
        RelayPin::new(Output::new(p.PIN_20, relay_idle)),
        RelayPin::new(Output::new(p.PIN_21, relay_idle)),
        RelayPin::new(Output::new(p.PIN_22, relay_idle)),
        RelayPin::new(Output::new(p.PIN_23, relay_idle)),
        RelayPin::new(Output::new(p.PIN_24, relay_idle)),
        RelayPin::new(Output::new(p.PIN_25, relay_idle)),
    ];

    // Sensor signal pins, GPIO2-13 in slot order (see config::SLOTS).
    // Sensors actively drive their output; use Pull::Up with an inverted
    // sensor bank for open-drain sensors instead.
    let sensor_pins = [
        SensorPin::new(Input::new(p.PIN_2, Pull::None)),
        SensorPin::new(Input::new(p.PIN_3, Pull::None)),
        SensorPin::new(Input::new(p.PIN_4, Pull::None)),
        SensorPin::new(Input::new(p.PIN_5, Pull::None)),
        SensorPin::new(Input::new(p.PIN_6, Pull::None)),
        SensorPin::new(Input::new(p.PIN_7, Pull::None)),
        SensorPin::new(Input::new(p.PIN_8, Pull::None)),
        SensorPin::new(Input::new(p.PIN_9, Pull::None)),
        SensorPin::new(Input::new(p.PIN_10, Pull::None)),
        SensorPin::new(Input::new(p.PIN_11, Pull::None)),
        SensorPin::new(Input::new(p.PIN_12, Pull::None)),
        SensorPin::new(Input::new(p.PIN_13, Pull::None)),
    ];

    let relays = BoardRelays::new(relay_pins, !RELAY_ACTIVE_HIGH);
    let sensors = BoardSensors::new(sensor_pins);
    info!("Relay and sensor banks initialized");

    // Spawn tasks
    spawner.spawn(tasks::event_log_task()).unwrap();
    spawner
        .spawn(tasks::scan_task(scanner, relays, sensors))
        .unwrap();

    info!("All tasks spawned, scanning");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
