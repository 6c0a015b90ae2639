//! Board configuration
//!
//! Slot wiring and scan timing, fixed at build time. The table below is
//! validated once at startup before the scanner is constructed; the
//! firmware refuses to start on a rejected configuration.

use kyklos_core::config::{PinConfig, ScanConfig, ScanTiming, SlotConfig};

/// Number of sensor/relay slots on this board
pub const SLOT_COUNT: usize = 12;

/// HIGH energizes the relays; set false for active-low relay boards
pub const RELAY_ACTIVE_HIGH: bool = true;

/// ms: how long to keep a sensor powered via its relay to take a reading
pub const POWER_ON_MS: u32 = 1000;

/// ms: how often to start a cycle for the next sensor
pub const CYCLE_INTERVAL_MS: u32 = 5000;

/// ms: settling time after power-up before the sensor output is trusted
pub const STABILIZATION_MS: u32 = 100;

const fn relay_pin(pin: u8) -> PinConfig {
    if RELAY_ACTIVE_HIGH {
        PinConfig::new(pin)
    } else {
        PinConfig::inverted(pin)
    }
}

/// Slot wiring: sensor inputs on GPIO2-13, relay outputs on GPIO14-25
///
/// Must match the pin objects constructed in main.rs, in the same order.
pub const SLOTS: [SlotConfig; SLOT_COUNT] = [
    SlotConfig::new(PinConfig::new(2), relay_pin(14)),
    SlotConfig::new(PinConfig::new(3), relay_pin(15)),
    SlotConfig::new(PinConfig::new(4), relay_pin(16)),
    SlotConfig::new(PinConfig::new(5), relay_pin(17)),
    SlotConfig::new(PinConfig::new(6), relay_pin(18)),
    SlotConfig::new(PinConfig::new(7), relay_pin(19)),
    SlotConfig::new(PinConfig::new(8), relay_pin(20)),
    SlotConfig::new(PinConfig::new(9), relay_pin(21)),
    SlotConfig::new(PinConfig::new(10), relay_pin(22)),
    SlotConfig::new(PinConfig::new(11), relay_pin(23)),
    SlotConfig::new(PinConfig::new(12), relay_pin(24)),
    SlotConfig::new(PinConfig::new(13), relay_pin(25)),
];

/// Build the scanner configuration for this board
pub fn scan_config() -> ScanConfig {
    ScanConfig::new(
        &SLOTS,
        ScanTiming {
            power_on_ms: POWER_ON_MS,
            cycle_interval_ms: CYCLE_INTERVAL_MS,
            stabilization_ms: STABILIZATION_MS,
        },
    )
}
