//! Scan task
//!
//! Drives the scanner with periodic ticks. The scanner itself never
//! blocks; this loop is the single thread of control that owns it along
//! with the relay and sensor banks.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use kyklos_core::scheduler::{ScanEvent, Scanner};
use kyklos_core::traits::EventSink;

use crate::channels::EVENT_CHANNEL;
use crate::pins::{BoardRelays, BoardSensors};

/// Tick interval in milliseconds
///
/// Deadlines are observed at this granularity; keep it well under the
/// stabilization delay.
pub const SCAN_TICK_INTERVAL_MS: u64 = 10;

/// Sink that forwards events to the logging task
struct ChannelSink;

impl EventSink for ChannelSink {
    fn record(&mut self, event: ScanEvent) {
        // Best-effort: a full channel must not stall scanning.
        let _ = EVENT_CHANNEL.try_send(event);
    }
}

/// Scan task - ticks the scanner on a fixed cadence
#[embassy_executor::task]
pub async fn scan_task(mut scanner: Scanner, mut relays: BoardRelays, mut sensors: BoardSensors) {
    info!("Scan task started ({} slots)", scanner.slot_count());

    let mut sink = ChannelSink;
    let mut ticker = Ticker::every(Duration::from_millis(SCAN_TICK_INTERVAL_MS));
    let start = Instant::now();

    loop {
        ticker.next().await;

        let now_ms = start.elapsed().as_millis();
        scanner.tick(now_ms, &mut relays, &mut sensors, &mut sink);
    }
}
