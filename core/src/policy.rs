//! Refresh policy: what each decision turns into
//!
//! The decision itself carries no timing. Firmware schedules the follow-up
//! from a [`RefreshStep`], with delays taken from [`RefreshPolicy`].

use crate::action::RefreshAction;
use crate::context::RefreshContext;
use crate::decide::decide;

/// Timing configuration for the refresh cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RefreshPolicy {
    /// Delay before re-running the refresh while on the charger
    pub stay_awake_recheck_ms: u64,
    /// Delay between the final refresh and entering deep sleep
    pub deep_sleep_grace_ms: u64,
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        Self {
            stay_awake_recheck_ms: 2 * 60 * 1000,
            deep_sleep_grace_ms: 15 * 1000,
        }
    }
}

/// Follow-up scheduled after a refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RefreshStep {
    /// Schedule nothing; the next sensor update triggers another refresh
    AwaitData,
    /// Stay awake and run the refresh again after `after_ms`
    Reschedule { after_ms: u64 },
    /// Enter deep sleep once `grace_ms` has elapsed
    DeepSleep { grace_ms: u64 },
}

impl RefreshStep {
    /// Action this step was planned from
    pub const fn action(&self) -> RefreshAction {
        match self {
            Self::AwaitData => RefreshAction::WaitForData,
            Self::Reschedule { .. } => RefreshAction::StayAwake,
            Self::DeepSleep { .. } => RefreshAction::EnterDeepSleep,
        }
    }
}

impl RefreshPolicy {
    /// Turn a decision into the step the firmware should schedule
    pub const fn plan(&self, action: RefreshAction) -> RefreshStep {
        match action {
            RefreshAction::WaitForData => RefreshStep::AwaitData,
            RefreshAction::StayAwake => RefreshStep::Reschedule {
                after_ms: self.stay_awake_recheck_ms,
            },
            RefreshAction::EnterDeepSleep => RefreshStep::DeepSleep {
                grace_ms: self.deep_sleep_grace_ms,
            },
        }
    }

    /// Decide and plan in one go
    pub const fn step_for(&self, ctx: RefreshContext) -> RefreshStep {
        self.plan(decide(ctx))
    }
}
