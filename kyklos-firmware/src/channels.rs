//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use kyklos_core::scheduler::ScanEvent;

/// Channel capacity for scan events awaiting logging
const EVENT_CHANNEL_SIZE: usize = 16;

/// Scan events from the scanner (relay transitions and readings)
///
/// The scanner side uses `try_send`: if the logger falls behind, events
/// are dropped rather than stalling the scan loop.
pub static EVENT_CHANNEL: Channel<CriticalSectionRawMutex, ScanEvent, EVENT_CHANNEL_SIZE> =
    Channel::new();
