use std::time::Duration;

/// Identity of one scheduled debounce task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

#[derive(Clone, Debug)]
struct Pending<V> {
    handle: TaskHandle,
    due: Duration,
    value: V,
}

/// Reset-on-event debouncer holding at most one pending task.
///
/// Scheduling cancels the previous task and starts a fresh quiet period. Time is supplied by
/// the caller, so the debouncer never reads a clock itself.
#[derive(Clone, Debug)]
pub struct Debouncer<V> {
    quiet: Duration,
    pending: Option<Pending<V>>,
    next_id: u64,
}

impl<V> Debouncer<V> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
            next_id: 0,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    /// Replace any pending task with one due at `now + quiet`.
    pub fn schedule(&mut self, now: Duration, value: V) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.pending = Some(Pending {
            handle,
            due: now.saturating_add(self.quiet),
            value,
        });
        handle
    }

    /// Cancel a specific task. Returns `false` if it already fired or was superseded.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        if self.pending() != Some(handle) {
            return false;
        }
        self.pending = None;
        true
    }

    pub fn cancel_all(&mut self) {
        self.pending = None;
    }

    pub fn pending(&self) -> Option<TaskHandle> {
        self.pending.as_ref().map(|p| p.handle)
    }

    pub fn due_at(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// Take the pending value if its quiet period has elapsed.
    pub fn poll(&mut self, now: Duration) -> Option<V> {
        if !self.due_at().is_some_and(|due| now >= due) {
            return None;
        }
        self.pending.take().map(|p| p.value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trigger/debounce.rs"]
mod tests;
