//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in kyklos-core over plain GPIO:
//!
//! - Relay banks (active-high or active-low relay boards)
//! - Sensor banks (binary detect/no-detect inputs)

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod relay;
pub mod sensor;
