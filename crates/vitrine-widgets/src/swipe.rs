#![forbid(unsafe_code)]

//! Touch swipe resolution.
//!
//! A gesture is transient: captured on touch-start, resolved on touch-end,
//! discarded immediately. It resolves to exactly one of next, previous, or
//! none.

/// Minimum horizontal travel (px) for a gesture to count as a swipe.
/// Travel of exactly the threshold does not resolve.
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Resolution of a completed gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Drag left: advance.
    Next,
    /// Drag right: go back.
    Previous,
    /// Below threshold, or no matching touch-start.
    None,
}

/// In-flight gesture state.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
}

impl SwipeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a touch-start has been captured without a matching end.
    #[inline]
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    /// Capture the gesture's starting x coordinate.
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Resolve and discard the gesture.
    pub fn finish(&mut self, end_x: f32) -> SwipeOutcome {
        let Some(start_x) = self.start_x.take() else {
            return SwipeOutcome::None;
        };
        let diff = start_x - end_x;
        if diff.abs() > SWIPE_THRESHOLD_PX {
            if diff > 0.0 {
                SwipeOutcome::Next
            } else {
                SwipeOutcome::Previous
            }
        } else {
            SwipeOutcome::None
        }
    }
}
