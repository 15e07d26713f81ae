//! Collaborator traits implemented by board support code

use refresh_core::RefreshContext;

/// Reports whether every sensor the display needs has a value
pub trait SensorReadiness {
    fn sensors_ready(&mut self) -> bool;
}

/// Charger detection
pub trait ChargeSense {
    /// `Some(charging)` for a valid reading, `None` when the input is unusable
    fn charging_state(&mut self) -> Option<bool>;
}

/// Sleep timer and power state control
pub trait PowerControl {
    /// Keep running and trigger another refresh after `after_ms`
    fn reschedule_refresh(&mut self, after_ms: u64);

    /// Enter deep sleep once `grace_ms` has elapsed
    fn enter_deep_sleep(&mut self, grace_ms: u64);
}

impl SensorReadiness for bool {
    fn sensors_ready(&mut self) -> bool {
        *self
    }
}

impl ChargeSense for Option<bool> {
    fn charging_state(&mut self) -> Option<bool> {
        *self
    }
}

impl<T: SensorReadiness + ?Sized> SensorReadiness for &mut T {
    fn sensors_ready(&mut self) -> bool {
        (**self).sensors_ready()
    }
}

impl<T: ChargeSense + ?Sized> ChargeSense for &mut T {
    fn charging_state(&mut self) -> Option<bool> {
        (**self).charging_state()
    }
}

/// Read both inputs into a fresh [`RefreshContext`]
pub fn sample_context<S, C>(sensors: &mut S, charger: &mut C) -> RefreshContext
where
    S: SensorReadiness + ?Sized,
    C: ChargeSense + ?Sized,
{
    RefreshContext::new(sensors.sensors_ready(), charger.charging_state())
}
