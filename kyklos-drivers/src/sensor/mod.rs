//! Sensor bank implementations

pub mod gpio;

pub use gpio::GpioSensorBank;
