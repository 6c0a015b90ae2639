//! GPIO sensor bank
//!
//! Reads a bank of binary sensors wired to GPIO inputs. Sensors that
//! actively drive their output report detection as pin HIGH; open-drain
//! sensors on a pull-up idle HIGH and pull LOW on detection, which the
//! inverted variant handles.

use kyklos_core::traits::SensorBank;

use crate::gpio::InputPin;

/// GPIO sensor bank
pub struct GpioSensorBank<P, const N: usize> {
    pins: [P; N],
    /// If true, detection = pin LOW
    inverted: bool,
}

impl<P: InputPin, const N: usize> GpioSensorBank<P, N> {
    /// Create a bank of sensors that report detection as pin HIGH
    ///
    /// # Arguments
    /// - `pins`: One signal pin per slot, in slot order
    pub fn new(pins: [P; N]) -> Self {
        Self {
            pins,
            inverted: false,
        }
    }

    /// Create a bank of sensors that report detection as pin LOW
    pub fn new_inverted(pins: [P; N]) -> Self {
        Self {
            pins,
            inverted: true,
        }
    }
}

impl<P: InputPin, const N: usize> SensorBank for GpioSensorBank<P, N> {
    fn is_detected(&mut self, slot: u8) -> bool {
        match self.pins.get(slot as usize) {
            Some(pin) => pin.is_high() != self.inverted,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock GPIO input for testing
    struct MockPin {
        high: bool,
    }

    impl InputPin for MockPin {
        fn is_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_detection_on_high() {
        let pins = [MockPin { high: false }, MockPin { high: true }];
        let mut bank = GpioSensorBank::new(pins);

        assert!(!bank.is_detected(0));
        assert!(bank.is_detected(1));
    }

    #[test]
    fn test_inverted_detection_on_low() {
        let pins = [MockPin { high: false }, MockPin { high: true }];
        let mut bank = GpioSensorBank::new_inverted(pins);

        assert!(bank.is_detected(0));
        assert!(!bank.is_detected(1));
    }

    #[test]
    fn test_out_of_range_slot_reads_not_detected() {
        let pins = [MockPin { high: true }];
        let mut bank = GpioSensorBank::new(pins);

        assert!(!bank.is_detected(4));
    }
}
