//! Configuration type definitions
//!
//! Configuration is fixed at startup and validated once before the scanner
//! is constructed. A rejected configuration is fatal to initialization:
//! the firmware refuses to start rather than run with a known-bad setup.

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum sensor/relay slots per scanner
pub const MAX_SLOTS: usize = 16;

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: false,
        }
    }

    /// Create a pin with pull-up enabled
    pub const fn with_pullup(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: true,
        }
    }
}

/// One sensor/relay slot: the sensor input and the relay that gates its power
///
/// Keeping both pins in one record ties each sensor to its relay by
/// construction instead of by position in two parallel tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SlotConfig {
    /// Sensor signal input pin
    pub sensor_pin: PinConfig,
    /// Relay control output pin
    pub relay_pin: PinConfig,
}

impl SlotConfig {
    /// Create a slot from a sensor/relay pin pair
    pub const fn new(sensor_pin: PinConfig, relay_pin: PinConfig) -> Self {
        Self {
            sensor_pin,
            relay_pin,
        }
    }
}

/// Scan timing parameters, all in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanTiming {
    /// How long a relay stays energized per service window
    pub power_on_ms: u32,
    /// Minimum time between the start of successive cycles
    pub cycle_interval_ms: u32,
    /// Settling time after power-up before the sensor output is trustworthy
    pub stabilization_ms: u32,
}

impl Default for ScanTiming {
    fn default() -> Self {
        Self {
            power_on_ms: 1000,
            cycle_interval_ms: 5000,
            stabilization_ms: 100,
        }
    }
}

/// Scanner configuration: slot wiring plus timing
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanConfig {
    /// Slot wiring, indexed by slot number
    pub slots: Vec<SlotConfig, MAX_SLOTS>,
    /// Timing parameters shared by all slots
    pub timing: ScanTiming,
}

/// Configuration errors detected at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// No slots configured
    NoSlots,
    /// `power_on_ms` is zero; a relay would never be energized
    HoldTimeZero,
    /// `stabilization_ms >= power_on_ms`; the relay would be off before
    /// the reading is taken, silently producing invalid readings
    StabilizationTooLong,
}

impl ScanConfig {
    /// Create a config from a slot table and timing
    pub fn new(slots: &[SlotConfig], timing: ScanTiming) -> Self {
        let mut slot_vec = Vec::new();
        for s in slots.iter().take(MAX_SLOTS) {
            let _ = slot_vec.push(*s);
        }
        Self {
            slots: slot_vec,
            timing,
        }
    }

    /// Number of configured slots
    pub fn slot_count(&self) -> u8 {
        self.slots.len() as u8
    }

    /// Validate the configuration
    ///
    /// The stabilization/hold-time relation is a configuration-time
    /// contract: the relay must still be energized when the read happens.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slots.is_empty() {
            return Err(ConfigError::NoSlots);
        }
        if self.timing.power_on_ms == 0 {
            return Err(ConfigError::HoldTimeZero);
        }
        if self.timing.stabilization_ms >= self.timing.power_on_ms {
            return Err(ConfigError::StabilizationTooLong);
        }
        Ok(())
    }
}
