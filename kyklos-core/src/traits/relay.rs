//! Relay bank trait

/// Trait for a bank of relay outputs, one per sensor slot
///
/// Implementations handle the physical drive level, including active-high
/// vs active-low wiring; callers only speak in terms of energized or not.
pub trait RelayBank {
    /// Energize or de-energize the relay for a slot
    ///
    /// Must be idempotent: setting a relay to the state it is already in
    /// is a no-op. Out-of-range slots are ignored.
    fn set_energized(&mut self, slot: u8, energized: bool);
}
