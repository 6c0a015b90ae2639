//! Configuration types
//!
//! Board-agnostic configuration for the scanner: slot wiring, timing,
//! and the startup validation that rejects bad combinations.

pub mod types;

pub use types::*;
