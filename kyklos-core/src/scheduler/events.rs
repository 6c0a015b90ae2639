//! Events emitted by the scanner

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A timestamped scan event
///
/// Events are emitted in the order the transitions happen. Within one
/// tick the order is: pending reading first, then relay-off, then
/// relay-on for the next cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScanEvent {
    /// A slot's relay was energized
    RelayOn {
        /// Slot index
        slot: u8,
        /// Timestamp in milliseconds
        at_ms: u64,
    },
    /// A slot's relay was de-energized
    RelayOff {
        /// Slot index
        slot: u8,
        /// Timestamp in milliseconds
        at_ms: u64,
    },
    /// A sensor reading was taken
    Reading {
        /// Slot index
        slot: u8,
        /// True if the sensor reported detection
        detected: bool,
        /// Timestamp in milliseconds
        at_ms: u64,
    },
}

impl ScanEvent {
    /// The slot this event concerns
    pub fn slot(&self) -> u8 {
        match *self {
            ScanEvent::RelayOn { slot, .. }
            | ScanEvent::RelayOff { slot, .. }
            | ScanEvent::Reading { slot, .. } => slot,
        }
    }

    /// The timestamp of this event in milliseconds
    pub fn at_ms(&self) -> u64 {
        match *self {
            ScanEvent::RelayOn { at_ms, .. }
            | ScanEvent::RelayOff { at_ms, .. }
            | ScanEvent::Reading { at_ms, .. } => at_ms,
        }
    }

    /// Check if this event is a sensor reading
    pub fn is_reading(&self) -> bool {
        matches!(self, ScanEvent::Reading { .. })
    }

    /// Check if this event is a relay transition
    pub fn is_relay_transition(&self) -> bool {
        matches!(self, ScanEvent::RelayOn { .. } | ScanEvent::RelayOff { .. })
    }
}
