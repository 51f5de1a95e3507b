#![forbid(unsafe_code)]

//! Scoped ownership of one repeating timer.
//!
//! Each auto-advancing component owns exactly one [`AutoAdvance`] slot. The
//! slot's contract is the at-most-one-live-timer invariant: arming always
//! cancels the previously held timer first, within the same turn, so no
//! interleaving can observe two timers for the same owner.
//!
//! # Failure Modes
//!
//! - `cancel` on an unarmed slot is a no-op returning `false`.
//! - `owns` on a stale id (already cancelled) returns `false` because the
//!   slot forgets the id on cancel.

use std::time::Duration;

use crate::scheduler::{Scheduler, TimerId};

/// Owner of a component's single repeating auto-advance timer.
#[derive(Debug)]
pub struct AutoAdvance {
    period: Duration,
    armed: Option<TimerId>,
}

impl AutoAdvance {
    /// Create an unarmed slot with the given period.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        assert!(period > Duration::ZERO, "auto-advance period must be non-zero");
        Self {
            period,
            armed: None,
        }
    }

    /// The configured period.
    #[inline]
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whether a timer is currently held.
    #[inline]
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Whether a fired id belongs to this slot.
    #[must_use]
    pub fn owns(&self, id: TimerId) -> bool {
        self.armed == Some(id)
    }

    /// Arm the slot, cancelling any previously held timer first.
    ///
    /// The first fire lands one full period from now, so a manual
    /// interaction that re-arms grants a full dwell before the next
    /// automatic step.
    pub fn arm(&mut self, sched: &mut Scheduler) -> TimerId {
        if let Some(old) = self.armed.take() {
            sched.cancel(old);
        }
        let id = sched.schedule_every(self.period);
        self.armed = Some(id);
        id
    }

    /// Alias for [`arm`](Self::arm) on manual-interaction paths; named for
    /// the cancel-then-replace semantics it guarantees.
    pub fn rearm(&mut self, sched: &mut Scheduler) -> TimerId {
        self.arm(sched)
    }

    /// Cancel the held timer, if any. Returns whether one was live.
    pub fn cancel(&mut self, sched: &mut Scheduler) -> bool {
        match self.armed.take() {
            Some(id) => sched.cancel(id),
            None => false,
        }
    }
}
