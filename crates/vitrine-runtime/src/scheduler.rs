#![forbid(unsafe_code)]

//! Deterministic timer scheduler.
//!
//! The scheduler owns a virtual monotonic clock measured as a [`Duration`]
//! since construction. Nothing fires on its own: the host calls
//! [`Scheduler::advance`] once per turn and dispatches the returned
//! [`TimerId`]s to their owners. This keeps every test fully deterministic
//! and makes "two concurrent timers for one slider" an assertable property
//! instead of a heisenbug.
//!
//! # Invariants
//!
//! - Fires are returned in chronological order; ties break by creation
//!   order.
//! - A repeating timer due several times within one `advance` window fires
//!   once per elapsed period.
//! - `cancel` of an unknown or already-fired one-shot id is a no-op
//!   returning `false`.

use std::time::Duration;

use web_time::Instant;

/// Handle to a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// The raw id value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug)]
enum Repeat {
    Once,
    Every(Duration),
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    id: TimerId,
    due: Duration,
    repeat: Repeat,
}

/// Single-threaded cooperative timer queue with a virtual clock.
#[derive(Debug)]
pub struct Scheduler {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry>,
    origin: Instant,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    /// Create a scheduler with its clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            entries: Vec::new(),
            origin: Instant::now(),
        }
    }

    /// Current virtual time.
    #[inline]
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers currently scheduled.
    #[inline]
    #[must_use]
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Whether the id refers to a live timer.
    #[must_use]
    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Schedule a timer that fires once after `delay`.
    pub fn schedule_once(&mut self, delay: Duration) -> TimerId {
        self.schedule(delay, Repeat::Once)
    }

    /// Schedule a timer that fires every `period`, first after one period.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero (a zero period would fire forever within
    /// a single `advance`).
    pub fn schedule_every(&mut self, period: Duration) -> TimerId {
        assert!(period > Duration::ZERO, "repeating period must be non-zero");
        self.schedule(period, Repeat::Every(period))
    }

    fn schedule(&mut self, delay: Duration, repeat: Repeat) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            due: self.now + delay,
            repeat,
        });
        tracing::trace!(id = id.raw(), delay_ms = delay.as_millis() as u64, "timer scheduled");
        id
    }

    /// Cancel a timer. Returns whether it was live.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let cancelled = self.entries.len() != before;
        if cancelled {
            tracing::trace!(id = id.raw(), "timer cancelled");
        }
        cancelled
    }

    /// Cancel every scheduled timer.
    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    /// Advance the clock by `dt`, returning fired timers in chronological
    /// order. Repeating timers are re-queued as they fire.
    pub fn advance(&mut self, dt: Duration) -> Vec<TimerId> {
        let target = self.now + dt;
        let mut fired = Vec::new();

        loop {
            let Some(pos) = self
                .entries
                .iter()
                .enumerate()
                .filter(|(_, e)| e.due <= target)
                .min_by_key(|(_, e)| (e.due, e.id))
                .map(|(i, _)| i)
            else {
                break;
            };

            let entry = self.entries[pos];
            self.now = entry.due;
            fired.push(entry.id);
            match entry.repeat {
                Repeat::Once => {
                    self.entries.remove(pos);
                }
                Repeat::Every(period) => {
                    self.entries[pos].due = entry.due + period;
                }
            }
        }

        self.now = target;
        if !fired.is_empty() {
            tracing::trace!(count = fired.len(), now_ms = self.now.as_millis() as u64, "timers fired");
        }
        fired
    }

    /// Advance the clock to match wall time elapsed since construction.
    ///
    /// Bridge for hosts that drive the scheduler from a real event loop;
    /// tests stay on the virtual [`advance`](Self::advance) path.
    pub fn advance_to_wall(&mut self) -> Vec<TimerId> {
        let elapsed = self.origin.elapsed();
        let dt = elapsed.saturating_sub(self.now);
        self.advance(dt)
    }
}
