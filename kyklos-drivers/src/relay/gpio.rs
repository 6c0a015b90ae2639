//! GPIO relay bank
//!
//! Drives a bank of relay module inputs via GPIO pins (directly or through
//! a driver transistor). Relay boards come in active-high and active-low
//! variants; the bank maps logical energized/de-energized onto the right
//! drive level per channel.

use kyklos_core::traits::RelayBank;

use crate::gpio::OutputPin;

/// One relay output channel
struct RelayChannel<P> {
    pin: P,
    /// If true, energized = pin LOW
    inverted: bool,
    /// Current logical state (true = energized)
    energized: bool,
}

impl<P: OutputPin> RelayChannel<P> {
    fn set(&mut self, energized: bool) {
        self.energized = energized;

        if energized != self.inverted {
            // Normal: energized=true, inverted=false -> high
            // Inverted: energized=true, inverted=true -> low
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }
}

/// GPIO relay bank
///
/// Every relay is driven to its de-energized level at construction, so a
/// freshly built bank never leaves a relay on from a previous reset.
pub struct GpioRelayBank<P, const N: usize> {
    channels: [RelayChannel<P>; N],
}

impl<P: OutputPin, const N: usize> GpioRelayBank<P, N> {
    /// Create a bank with uniform polarity
    ///
    /// # Arguments
    /// - `pins`: One control pin per slot, in slot order
    /// - `inverted`: If true, relays are energized when their pin is LOW
    pub fn new(pins: [P; N], inverted: bool) -> Self {
        let mut bank = Self {
            channels: pins.map(|pin| RelayChannel {
                pin,
                inverted,
                energized: false,
            }),
        };
        for slot in 0..N as u8 {
            bank.set_energized(slot, false);
        }
        bank
    }

    /// Create a bank for an active-high relay board
    pub fn new_active_high(pins: [P; N]) -> Self {
        Self::new(pins, false)
    }

    /// Create a bank for an active-low relay board
    pub fn new_active_low(pins: [P; N]) -> Self {
        Self::new(pins, true)
    }

    /// Check the logical state of one relay
    pub fn is_energized(&self, slot: u8) -> bool {
        self.channels
            .get(slot as usize)
            .map(|c| c.energized)
            .unwrap_or(false)
    }
}

impl<P: OutputPin, const N: usize> RelayBank for GpioRelayBank<P, N> {
    fn set_energized(&mut self, slot: u8, energized: bool) {
        if let Some(channel) = self.channels.get_mut(slot as usize) {
            channel.set(energized);
        }
    }
}
