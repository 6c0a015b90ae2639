//! Event sink trait

use crate::scheduler::ScanEvent;

/// Trait for receiving scan events (relay transitions and readings)
///
/// Delivery is best-effort from the scheduler's viewpoint: an
/// implementation that drops events (full channel, disabled logging)
/// must not affect scheduling.
pub trait EventSink {
    /// Record one event
    fn record(&mut self, event: ScanEvent);
}

/// Sink that discards every event
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&mut self, _event: ScanEvent) {}
}
