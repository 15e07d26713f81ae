//! Inputs to a single refresh decision

/// Snapshot of the three inputs the decision depends on
///
/// Built fresh for every refresh cycle. `charging_state` is only meaningful
/// when `charging_state_available` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RefreshContext {
    /// All sensors the display needs have produced a value
    pub sensors_ready: bool,
    /// The charger-detection input currently yields a valid reading
    pub charging_state_available: bool,
    /// The device is on external power (valid only if available)
    pub charging_state: bool,
}

impl RefreshContext {
    /// Build a context from a readiness flag and an optional charger reading
    pub const fn new(sensors_ready: bool, charging: Option<bool>) -> Self {
        match charging {
            Some(state) => Self {
                sensors_ready,
                charging_state_available: true,
                charging_state: state,
            },
            None => Self {
                sensors_ready,
                charging_state_available: false,
                charging_state: false,
            },
        }
    }

    /// Charger reading, or `None` when no valid reading exists
    pub const fn charging(&self) -> Option<bool> {
        if self.charging_state_available {
            Some(self.charging_state)
        } else {
            None
        }
    }
}
