//! Record of recent refresh decisions
//!
//! Keeps the last decision (what the firmware exposes as its
//! `refresh_action_decision` global) plus a short ring of earlier ones for
//! diagnostics. Nothing here feeds back into [`crate::decide`].

use heapless::HistoryBuffer;

use crate::action::RefreshAction;

/// Number of decisions retained
pub const HISTORY_DEPTH: usize = 8;

/// Bounded, allocation-free decision log
#[derive(Debug, Clone)]
pub struct RefreshHistory {
    last: RefreshAction,
    recent: HistoryBuffer<RefreshAction, HISTORY_DEPTH>,
}

impl Default for RefreshHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshHistory {
    /// Empty history; the last decision starts as `WAIT_FOR_DATA` (code 0)
    pub const fn new() -> Self {
        Self {
            last: RefreshAction::WaitForData,
            recent: HistoryBuffer::new(),
        }
    }

    /// Store a new decision, evicting the oldest once full
    pub fn record(&mut self, action: RefreshAction) {
        if action != self.last {
            debug!("refresh decision changed: {} -> {}", self.last.code(), action.code());
        }
        self.last = action;
        self.recent.write(action);
    }

    /// Most recent decision
    pub fn last(&self) -> RefreshAction {
        self.last
    }

    /// Numeric code of the most recent decision
    pub fn last_code(&self) -> u8 {
        self.last.code()
    }

    /// Number of decisions currently retained
    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.len() == 0
    }

    /// Retained decisions, oldest first
    pub fn recent(&self) -> impl Iterator<Item = RefreshAction> + '_ {
        self.recent.oldest_ordered().copied()
    }

    /// How many retained decisions equal `action`
    pub fn count(&self, action: RefreshAction) -> usize {
        self.recent().filter(|a| *a == action).count()
    }

    /// Forget everything, including the last decision
    pub fn clear(&mut self) {
        self.last = RefreshAction::WaitForData;
        self.recent.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_waiting() {
        let history = RefreshHistory::new();
        assert_eq!(history.last(), RefreshAction::WaitForData);
        assert_eq!(history.last_code(), 0);
        assert!(history.is_empty());
    }

    #[test]
    fn test_record_tracks_last() {
        let mut history = RefreshHistory::new();
        history.record(RefreshAction::StayAwake);
        history.record(RefreshAction::EnterDeepSleep);
        assert_eq!(history.last(), RefreshAction::EnterDeepSleep);
        assert_eq!(history.last_code(), 2);
        assert_eq!(history.len(), 2);
        assert_eq!(
            history.recent().collect::<Vec<_>>(),
            [RefreshAction::StayAwake, RefreshAction::EnterDeepSleep]
        );
    }

    #[test]
    fn test_oldest_evicted_when_full() {
        let mut history = RefreshHistory::new();
        history.record(RefreshAction::WaitForData);
        for _ in 0..HISTORY_DEPTH {
            history.record(RefreshAction::StayAwake);
        }
        assert_eq!(history.len(), HISTORY_DEPTH);
        assert_eq!(history.count(RefreshAction::WaitForData), 0);
        assert_eq!(history.count(RefreshAction::StayAwake), HISTORY_DEPTH);
    }

    #[test]
    fn test_clear() {
        let mut history = RefreshHistory::new();
        history.record(RefreshAction::EnterDeepSleep);
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.last(), RefreshAction::WaitForData);
    }
}
