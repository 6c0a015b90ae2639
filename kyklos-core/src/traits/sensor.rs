//! Sensor bank trait

/// Trait for a bank of binary sensor inputs, one per slot
///
/// Implementations are assumed synchronous and fast (simple digital I/O).
/// The scheduler takes exactly one reading per service window; there is no
/// retry on a surprising value - the single reading is authoritative.
pub trait SensorBank {
    /// Read the sensor for a slot
    ///
    /// Returns true if the sensor reports detection. Only meaningful while
    /// the slot's relay is energized and the stabilization window has
    /// elapsed.
    ///
    /// Takes `&mut self` because some input peripherals require mutable
    /// access to sample.
    fn is_detected(&mut self, slot: u8) -> bool;
}
