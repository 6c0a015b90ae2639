//! Relay bank implementations

pub mod gpio;

pub use gpio::GpioRelayBank;
