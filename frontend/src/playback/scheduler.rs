//! Single-slot cancellable task scheduler.
//!
//! Holds at most one pending deadline. Scheduling a new task replaces (and
//! thereby cancels) the previous one, so a burst of triggers never stacks
//! up more than one firing. Time is passed in explicitly; the UI loop drives
//! [`TaskScheduler::poll`] once per frame.

use std::time::{Duration, Instant};

/// Identifies one scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskId(u64);

#[derive(Debug, Clone, Copy)]
struct PendingTask {
    id: TaskId,
    due: Instant,
}

#[derive(Debug, Default)]
pub struct TaskScheduler {
    next_id: u64,
    pending: Option<PendingTask>,
}

impl TaskScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a task `delay` after `now`, cancelling any pending task.
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending = Some(PendingTask {
            id,
            due: now + delay,
        });
        id
    }

    /// Cancels the pending task, returning its id if there was one.
    pub fn cancel(&mut self) -> Option<TaskId> {
        self.pending.take().map(|task| task.id)
    }

    /// Fires the pending task if its deadline has been reached.
    ///
    /// A fired task is removed; it never fires twice.
    pub fn poll(&mut self, now: Instant) -> Option<TaskId> {
        match self.pending {
            Some(task) if task.due <= now => {
                self.pending = None;
                Some(task.id)
            }
            _ => None,
        }
    }

    /// Time left until the pending task is due, zero if overdue.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|task| task.due.saturating_duration_since(now))
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_fires_once_at_deadline() {
        let t0 = Instant::now();
        let mut scheduler = TaskScheduler::new();
        let id = scheduler.schedule(t0, 100 * MS);

        assert_eq!(scheduler.poll(t0 + 99 * MS), None);
        assert_eq!(scheduler.poll(t0 + 100 * MS), Some(id));
        assert_eq!(scheduler.poll(t0 + 200 * MS), None);
        assert!(!scheduler.is_pending());
    }

    #[test]
    fn test_reschedule_replaces_pending_task() {
        let t0 = Instant::now();
        let mut scheduler = TaskScheduler::new();
        let first = scheduler.schedule(t0, 100 * MS);
        let second = scheduler.schedule(t0 + 50 * MS, 100 * MS);

        assert_ne!(first, second);
        assert_eq!(scheduler.poll(t0 + 100 * MS), None);
        assert_eq!(scheduler.poll(t0 + 150 * MS), Some(second));
    }

    #[test]
    fn test_cancel() {
        let t0 = Instant::now();
        let mut scheduler = TaskScheduler::new();
        let id = scheduler.schedule(t0, 10 * MS);

        assert_eq!(scheduler.cancel(), Some(id));
        assert_eq!(scheduler.cancel(), None);
        assert_eq!(scheduler.poll(t0 + 20 * MS), None);
    }

    #[test]
    fn test_remaining() {
        let t0 = Instant::now();
        let mut scheduler = TaskScheduler::new();
        assert_eq!(scheduler.remaining(t0), None);

        scheduler.schedule(t0, 100 * MS);
        assert_eq!(scheduler.remaining(t0 + 40 * MS), Some(60 * MS));
        assert_eq!(scheduler.remaining(t0 + 140 * MS), Some(Duration::ZERO));
    }
}
