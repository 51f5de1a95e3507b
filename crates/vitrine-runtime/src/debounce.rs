#![forbid(unsafe_code)]

//! Trailing-edge debounce over the scheduler.
//!
//! Collapses a burst of triggers into one fire, `delay` after the last
//! trigger. Used by the page controller to coalesce scroll handling at
//! roughly frame rate.

use std::time::Duration;

use crate::scheduler::{Scheduler, TimerId};

/// Trailing-edge debouncer holding at most one pending one-shot timer.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<TimerId>,
}

impl Debouncer {
    /// Create a debouncer with the given trailing delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Whether a fire is pending.
    #[inline]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Register a trigger: cancels the pending fire and schedules a new one.
    pub fn trigger(&mut self, sched: &mut Scheduler) {
        if let Some(old) = self.pending.take() {
            sched.cancel(old);
        }
        self.pending = Some(sched.schedule_once(self.delay));
    }

    /// Route a fired timer. Returns `true` (and clears the pending slot)
    /// iff the id belongs to this debouncer.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.pending == Some(id) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Drop any pending fire.
    pub fn cancel(&mut self, sched: &mut Scheduler) {
        if let Some(id) = self.pending.take() {
            sched.cancel(id);
        }
    }
}
