//! One-shot refresh driver
//!
//! Called by the firmware loop after each display refresh. Each call samples
//! the inputs, decides, records the decision and dispatches exactly one
//! follow-up (or none while waiting for data).

use refresh_core::{RefreshHistory, RefreshPolicy, RefreshStep};

use crate::traits::{sample_context, ChargeSense, PowerControl, SensorReadiness};

/// Runs refresh decisions against board collaborators
#[derive(Debug, Clone, Default)]
pub struct RefreshDriver {
    policy: RefreshPolicy,
    history: RefreshHistory,
}

impl RefreshDriver {
    pub const fn new(policy: RefreshPolicy) -> Self {
        Self {
            policy,
            history: RefreshHistory::new(),
        }
    }

    pub fn policy(&self) -> &RefreshPolicy {
        &self.policy
    }

    pub fn history(&self) -> &RefreshHistory {
        &self.history
    }

    /// Run one refresh decision and dispatch its follow-up
    pub fn run_once<S, C, P>(
        &mut self,
        sensors: &mut S,
        charger: &mut C,
        power: &mut P,
    ) -> RefreshStep
    where
        S: SensorReadiness + ?Sized,
        C: ChargeSense + ?Sized,
        P: PowerControl + ?Sized,
    {
        let ctx = sample_context(sensors, charger);
        let action = ctx.decide();
        self.history.record(action);

        let step = self.policy.plan(action);
        match step {
            RefreshStep::AwaitData => {
                info!("Refresh: waiting for sensor data");
            }
            RefreshStep::Reschedule { after_ms } => {
                info!("Refresh: charging, staying awake for {} ms", after_ms);
                power.reschedule_refresh(after_ms);
            }
            RefreshStep::DeepSleep { grace_ms } => {
                if ctx.charging_state_available {
                    info!("Refresh: on battery, deep sleep in {} ms", grace_ms);
                } else {
                    info!("Refresh: charger state unknown, deep sleep in {} ms", grace_ms);
                }
                power.enter_deep_sleep(grace_ms);
            }
        }
        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refresh_core::RefreshAction;

    #[derive(Debug, Default, PartialEq)]
    struct FakePower {
        rescheduled: Vec<u64>,
        slept: Vec<u64>,
    }

    impl PowerControl for FakePower {
        fn reschedule_refresh(&mut self, after_ms: u64) {
            self.rescheduled.push(after_ms);
        }

        fn enter_deep_sleep(&mut self, grace_ms: u64) {
            self.slept.push(grace_ms);
        }
    }

    #[test]
    fn test_waiting_dispatches_nothing() {
        let mut driver = RefreshDriver::default();
        let mut power = FakePower::default();
        let step = driver.run_once(&mut false, &mut Some(true), &mut power);
        assert_eq!(step, RefreshStep::AwaitData);
        assert_eq!(power, FakePower::default());
        assert_eq!(driver.history().last(), RefreshAction::WaitForData);
    }

    #[test]
    fn test_charging_reschedules() {
        let mut driver = RefreshDriver::default();
        let mut power = FakePower::default();
        let step = driver.run_once(&mut true, &mut Some(true), &mut power);
        assert_eq!(step, RefreshStep::Reschedule { after_ms: 120_000 });
        assert_eq!(power.rescheduled, [120_000]);
        assert!(power.slept.is_empty());
        assert_eq!(driver.history().last_code(), 1);
    }

    #[test]
    fn test_battery_sleeps() {
        let mut driver = RefreshDriver::new(RefreshPolicy {
            stay_awake_recheck_ms: 60_000,
            deep_sleep_grace_ms: 5_000,
        });
        let mut power = FakePower::default();
        let mut unknown: Option<bool> = None;
        driver.run_once(&mut true, &mut Some(false), &mut power);
        driver.run_once(&mut true, &mut unknown, &mut power);
        assert_eq!(power.slept, [5_000, 5_000]);
        assert!(power.rescheduled.is_empty());
    }

    #[test]
    fn test_simulated_refresh_sequence() {
        let sequence = [
            (false, None, RefreshAction::WaitForData),
            (false, Some(true), RefreshAction::WaitForData),
            (true, Some(true), RefreshAction::StayAwake),
            (true, Some(true), RefreshAction::StayAwake),
            (true, Some(false), RefreshAction::EnterDeepSleep),
            (true, None, RefreshAction::EnterDeepSleep),
        ];

        let mut driver = RefreshDriver::default();
        let mut power = FakePower::default();
        for (i, &(ready, charger, expected)) in sequence.iter().enumerate() {
            let mut ready = ready;
            let mut charger = charger;
            let step = driver.run_once(&mut ready, &mut charger, &mut power);
            assert_eq!(step.action(), expected, "Unexpected action at index {}", i);
        }

        assert_eq!(power.rescheduled.len(), 2);
        assert_eq!(power.slept.len(), 2);
        assert_eq!(
            driver.history().recent().collect::<Vec<_>>(),
            sequence.iter().map(|s| s.2).collect::<Vec<_>>()
        );
    }
}
