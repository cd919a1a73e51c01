//! Idle-hide timer for the floating controls.
//!
//! Input activity shows the controls and restarts the countdown; when the
//! countdown expires without further activity the controls hide.

use super::scheduler::TaskScheduler;
use std::time::{Duration, Instant};

pub const DEFAULT_HIDE_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug)]
pub struct VisibilityTimer {
    visible: bool,
    delay: Duration,
    scheduler: TaskScheduler,
}

impl VisibilityTimer {
    /// Starts visible with a countdown already running, so the controls
    /// disappear `delay` after mount if the user never moves the pointer.
    pub fn new(now: Instant, delay: Duration) -> Self {
        let mut scheduler = TaskScheduler::new();
        scheduler.schedule(now, delay);
        Self {
            visible: true,
            delay,
            scheduler,
        }
    }

    /// Shows the controls and restarts the countdown.
    pub fn on_activity(&mut self, now: Instant) {
        self.visible = true;
        self.scheduler.schedule(now, self.delay);
    }

    /// Applies an expired countdown. Returns true if visibility changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.scheduler.poll(now).is_some() && self.visible {
            self.visible = false;
            return true;
        }
        false
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// How long until the controls hide, if a countdown is running.
    pub fn time_until_hide(&self, now: Instant) -> Option<Duration> {
        self.scheduler.remaining(now)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}
