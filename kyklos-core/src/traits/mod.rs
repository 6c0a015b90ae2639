//! Hardware abstraction traits
//!
//! These traits define the interface between the scan scheduler
//! and hardware-specific implementations.

pub mod relay;
pub mod sensor;
pub mod sink;

pub use relay::RelayBank;
pub use sensor::SensorBank;
pub use sink::{EventSink, NullSink};
