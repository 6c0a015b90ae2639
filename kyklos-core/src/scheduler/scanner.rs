//! Scan scheduler state machine
//!
//! Services one slot per cycle: energize its relay, wait out the
//! stabilization window, take the reading, and de-energize the relay when
//! the hold time expires. Driven by repeated non-blocking `tick` calls
//! from an external loop or timer task; never blocks and never holds more
//! than one relay energized.

use crate::config::{ConfigError, ScanConfig, ScanTiming};
use crate::scheduler::events::ScanEvent;
use crate::traits::{EventSink, RelayBank, SensorBank};

/// Scanner phase for the slot currently being serviced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanPhase {
    /// No relay energized; waiting for the next cycle to come due
    Idle,
    /// Relay energized, sensor output not yet trustworthy
    Stabilizing,
    /// Reading taken; relay held until the hold time expires
    Holding,
}

/// Round-robin scan scheduler
///
/// Owns all mutable scheduling state; `tick` is the sole mutating entry
/// point. Collaborators (relay bank, sensor bank, event sink) are passed
/// in per tick, so one scanner instance carries no hardware references
/// and multiple instances can coexist in tests.
#[derive(Debug)]
pub struct Scanner {
    timing: ScanTiming,
    slot_count: u8,
    /// Next slot to service; wraps to 0 after the last slot
    next_slot: u8,
    /// Slot currently energized, if any
    active_slot: Option<u8>,
    phase: ScanPhase,
    /// Unset until the first cycle, so the first tick starts one immediately
    last_cycle_start_ms: Option<u64>,
    /// Valid only while a slot is active
    stabilize_deadline_ms: u64,
    /// Valid only while a slot is active
    relay_off_deadline_ms: u64,
}

impl Scanner {
    /// Create a scanner from a validated configuration
    ///
    /// Fails fast on a bad configuration; the caller should treat an error
    /// as fatal to initialization.
    pub fn new(config: &ScanConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            timing: config.timing,
            slot_count: config.slot_count(),
            next_slot: 0,
            active_slot: None,
            phase: ScanPhase::Idle,
            last_cycle_start_ms: None,
            stabilize_deadline_ms: 0,
            relay_off_deadline_ms: 0,
        })
    }

    /// Get the current phase
    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    /// Get the slot currently energized, if any
    pub fn active_slot(&self) -> Option<u8> {
        self.active_slot
    }

    /// Get the next slot to be serviced
    pub fn next_slot(&self) -> u8 {
        self.next_slot
    }

    /// Get the number of configured slots
    pub fn slot_count(&self) -> u8 {
        self.slot_count
    }

    /// Get the timing parameters
    pub fn timing(&self) -> &ScanTiming {
        &self.timing
    }

    /// Advance the scanner to `now_ms`
    ///
    /// `now_ms` must be monotonically non-decreasing across calls. Checks
    /// run in a fixed order: the pending reading first, then the relay-off
    /// deadline, then the cycle-start condition. The relay-off check runs
    /// on every tick, not only after activation, and a relay whose hold
    /// time expires may be followed by the next slot's relay-on within the
    /// same tick. A tick that satisfies no condition changes nothing and
    /// emits nothing.
    pub fn tick<R, S, E>(&mut self, now_ms: u64, relays: &mut R, sensors: &mut S, events: &mut E)
    where
        R: RelayBank,
        S: SensorBank,
        E: EventSink,
    {
        // Pending reading: stabilization window elapsed, sensor is
        // trustworthy while the relay is still energized.
        if self.phase == ScanPhase::Stabilizing && now_ms >= self.stabilize_deadline_ms {
            if let Some(slot) = self.active_slot {
                let detected = sensors.is_detected(slot);
                events.record(ScanEvent::Reading {
                    slot,
                    detected,
                    at_ms: now_ms,
                });
                self.phase = ScanPhase::Holding;
            }
        }

        // Relay-off deadline. Validation guarantees the stabilization
        // window is shorter than the hold time, so the reading above has
        // already fired by the time this can.
        if let Some(slot) = self.active_slot {
            if now_ms >= self.relay_off_deadline_ms {
                relays.set_energized(slot, false);
                events.record(ScanEvent::RelayOff { slot, at_ms: now_ms });
                self.active_slot = None;
                self.phase = ScanPhase::Idle;
            }
        }

        // Cycle start: only while no relay is energized, and only once the
        // interval has elapsed since the last start. The idle guard takes
        // precedence over the interval, so a short interval degrades to
        // hold-time-bounded pacing instead of overlapping relays.
        if self.active_slot.is_none() && self.cycle_due(now_ms) {
            let slot = self.next_slot;
            self.last_cycle_start_ms = Some(now_ms);

            relays.set_energized(slot, true);
            events.record(ScanEvent::RelayOn { slot, at_ms: now_ms });

            self.active_slot = Some(slot);
            self.phase = ScanPhase::Stabilizing;
            self.stabilize_deadline_ms = now_ms + u64::from(self.timing.stabilization_ms);
            self.relay_off_deadline_ms = now_ms + u64::from(self.timing.power_on_ms);

            // Every slot gets exactly one service attempt per rotation,
            // whatever the reading turns out to be.
            self.next_slot = (self.next_slot + 1) % self.slot_count;
        }
    }

    fn cycle_due(&self, now_ms: u64) -> bool {
        match self.last_cycle_start_ms {
            None => true,
            Some(start) => now_ms.saturating_sub(start) >= u64::from(self.timing.cycle_interval_ms),
        }
    }
}
