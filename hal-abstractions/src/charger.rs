//! GPIO charger status input
//!
//! Charge controllers usually expose a status line (often open-drain,
//! pulled low while charging). A failed pin read is reported as "no valid
//! reading" rather than guessed.

use embedded_hal::digital::InputPin;

use crate::traits::ChargeSense;

/// Pin level that means "charging"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    High,
    Low,
}

/// [`ChargeSense`] backed by a digital input
pub struct PinChargeSense<P> {
    pin: P,
    active: ActiveLevel,
}

impl<P: InputPin> PinChargeSense<P> {
    pub fn new(pin: P, active: ActiveLevel) -> Self {
        Self { pin, active }
    }

    /// Status line pulled low while charging
    pub fn active_low(pin: P) -> Self {
        Self::new(pin, ActiveLevel::Low)
    }

    pub fn active_high(pin: P) -> Self {
        Self::new(pin, ActiveLevel::High)
    }

    /// Give the pin back
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: InputPin> ChargeSense for PinChargeSense<P> {
    fn charging_state(&mut self) -> Option<bool> {
        let level = match self.active {
            ActiveLevel::High => self.pin.is_high(),
            ActiveLevel::Low => self.pin.is_low(),
        };
        match level {
            Ok(charging) => Some(charging),
            Err(_) => {
                warn!("charger status pin read failed");
                None
            }
        }
    }
}
