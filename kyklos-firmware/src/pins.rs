//! Board pin adapters
//!
//! Wraps embassy-rp GPIO types in the pin traits the driver banks expect.

use embassy_rp::gpio::{Input, Output};

use kyklos_drivers::gpio::{InputPin, OutputPin};
use kyklos_drivers::relay::GpioRelayBank;
use kyklos_drivers::sensor::GpioSensorBank;

use crate::config::SLOT_COUNT;

/// Relay control output backed by an RP2040 GPIO
pub struct RelayPin(Output<'static>);

impl RelayPin {
    pub fn new(pin: Output<'static>) -> Self {
        Self(pin)
    }
}

impl OutputPin for RelayPin {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Sensor signal input backed by an RP2040 GPIO
pub struct SensorPin(Input<'static>);

impl SensorPin {
    pub fn new(pin: Input<'static>) -> Self {
        Self(pin)
    }
}

impl InputPin for SensorPin {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

/// Relay bank wired for this board
pub type BoardRelays = GpioRelayBank<RelayPin, SLOT_COUNT>;

/// Sensor bank wired for this board
pub type BoardSensors = GpioSensorBank<SensorPin, SLOT_COUNT>;
