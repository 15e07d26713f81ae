//! The refresh decision

use crate::action::RefreshAction;
use crate::context::RefreshContext;

/// Decide what the device does after a refresh
///
/// Pure and total: every combination of inputs maps to exactly one action.
/// Missing sensor data wins over everything; an unknown charger state counts
/// as "not charging".
pub const fn decide(ctx: RefreshContext) -> RefreshAction {
    if !ctx.sensors_ready {
        return RefreshAction::WaitForData;
    }
    if ctx.charging_state_available && ctx.charging_state {
        return RefreshAction::StayAwake;
    }
    RefreshAction::EnterDeepSleep
}

impl RefreshContext {
    /// Shorthand for [`decide`]
    pub const fn decide(self) -> RefreshAction {
        decide(self)
    }
}
