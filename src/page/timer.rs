//! One-shot timer queue.
//!
//! Pure timing container: entries carry a deadline on the page's simulated
//! clock and fire when [`crate::page::Page::advance`] moves past it. No
//! business logic, no cancellation - a scheduled entry always fires.

use crate::dom::NodeId;

/// Deferred mutation executed when its deadline passes.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TimerAction {
    /// Replace an element's text (copy-label revert).
    SetLabel { target: NodeId, label: String },
}

#[derive(Debug, Clone)]
struct TimerEntry {
    due: u64,
    seq: u64,
    action: TimerAction,
}

/// FIFO-within-deadline one-shot timer queue.
#[derive(Debug, Clone, Default)]
pub(crate) struct TimerQueue {
    entries: Vec<TimerEntry>,
    next_seq: u64,
}

impl TimerQueue {
    /// Schedule `action` to fire once `now >= due`.
    pub(crate) fn schedule(&mut self, due: u64, action: TimerAction) {
        self.entries.push(TimerEntry {
            due,
            seq: self.next_seq,
            action,
        });
        self.next_seq += 1;
    }

    /// Remove and return all entries due at `now`, ordered by
    /// (deadline, schedule order).
    pub(crate) fn take_due(&mut self, now: u64) -> Vec<TimerAction> {
        let mut due: Vec<TimerEntry> = Vec::new();
        self.entries.retain(|entry| {
            if entry.due <= now {
                due.push(entry.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|entry| (entry.due, entry.seq));
        due.into_iter().map(|entry| entry.action).collect()
    }

    /// Number of scheduled, not-yet-fired entries.
    pub(crate) fn pending(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(target: usize, label: &str) -> TimerAction {
        TimerAction::SetLabel {
            target: NodeId(target),
            label: label.to_string(),
        }
    }

    #[test]
    fn test_fires_only_when_due() {
        let mut queue = TimerQueue::default();
        queue.schedule(2000, label(1, "Copy"));

        assert!(queue.take_due(1999).is_empty());
        assert_eq!(queue.pending(), 1);

        let fired = queue.take_due(2000);
        assert_eq!(fired.len(), 1);
        assert_eq!(queue.pending(), 0);

        // One-shot: nothing left to fire
        assert!(queue.take_due(10_000).is_empty());
    }

    #[test]
    fn test_ordering_by_deadline_then_seq() {
        let mut queue = TimerQueue::default();
        queue.schedule(300, label(1, "a"));
        queue.schedule(100, label(2, "b"));
        queue.schedule(100, label(3, "c"));

        let fired = queue.take_due(300);
        assert_eq!(fired, vec![label(2, "b"), label(3, "c"), label(1, "a")]);
    }

    #[test]
    fn test_parallel_entries_both_fire() {
        // Two entries for the same target (rapid double-activation): both live,
        // both fire.
        let mut queue = TimerQueue::default();
        queue.schedule(2000, label(1, "Copy"));
        queue.schedule(2500, label(1, "Copy"));
        assert_eq!(queue.pending(), 2);
        assert_eq!(queue.take_due(3000).len(), 2);
    }
}
