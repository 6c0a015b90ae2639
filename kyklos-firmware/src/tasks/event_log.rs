//! Event log task
//!
//! Drains the scan event channel and writes one log line per event.
//! Logging runs at a lower priority than scanning: the scanner drops
//! events on overflow rather than waiting for this task.

use defmt::*;

use kyklos_core::scheduler::ScanEvent;

use crate::channels::EVENT_CHANNEL;

/// Event log task - prints scan events as they arrive
#[embassy_executor::task]
pub async fn event_log_task() {
    info!("Event log task started");

    loop {
        match EVENT_CHANNEL.receive().await {
            ScanEvent::RelayOn { slot, at_ms } => {
                info!("{}ms: relay ON for sensor {}", at_ms, slot);
            }
            ScanEvent::RelayOff { slot, at_ms } => {
                info!("{}ms: relay OFF for sensor {}", at_ms, slot);
            }
            ScanEvent::Reading {
                slot,
                detected,
                at_ms,
            } => {
                info!("{}ms: sensor {} detected={}", at_ms, slot, detected);
            }
        }
    }
}
