use std::time::{Duration, Instant};

/// A fixed-interval task polled from the GUI event loop.
///
/// The UI calls [`Periodic::poll`] every frame; the task fires at most once per
/// poll no matter how many intervals were missed, then waits a full interval
/// again.
#[derive(Debug, Clone)]
pub struct Periodic {
    interval: Duration,
    next_due: Instant,
}

impl Periodic {
    /// Creates a task that is due immediately.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Periodic { interval, next_due: now }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns `true` and reschedules if the task is due at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now + self.interval;
        true
    }

    /// Time left before the next run, zero when overdue
    pub fn until_due(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}

/// Earliest time any of `tasks` will want to run again.
pub fn next_wakeup<'a>(tasks: impl IntoIterator<Item = &'a Periodic>, now: Instant) -> Option<Duration> {
    tasks.into_iter().map(|task| task.until_due(now)).min()
}
