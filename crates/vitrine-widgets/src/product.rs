#![forbid(unsafe_code)]

//! Page-based product slider.
//!
//! Shifts a scrollable track one full viewport per page, keeps one page dot
//! active, auto-advances every [`PRODUCT_DWELL`], and accepts directional
//! nudges from touch swipes. The page count is fixed at construction:
//! `ceil(item_count / visible_per_page)`.
//!
//! # Invariants
//!
//! - `0 <= page < page_count` after every operation.
//! - Track offset is exactly `-(page * 100)` percent after every mutation
//!   ([`sync_view`](ProductSlider::sync_view) is a pure function of `page`).
//! - Exactly one page dot carries `active`.
//! - At most one live auto-advance timer; manual interaction re-arms it.

use std::time::Duration;

use vitrine_core::{ClassName, ElementId, Event, IndexOutOfRange, Surface, WiringError};
use vitrine_runtime::{AutoAdvance, Scheduler, TimerId};

use crate::swipe::{SwipeOutcome, SwipeTracker};

/// Dwell time per product page.
pub const PRODUCT_DWELL: Duration = Duration::from_millis(4000);

/// Pages needed to show `item_count` items `visible_per_page` at a time.
///
/// # Panics
///
/// Panics if `visible_per_page` is zero; [`ProductSlider::new`] rejects
/// that case with a [`WiringError`] before reaching here.
#[must_use]
pub fn page_count(item_count: usize, visible_per_page: usize) -> usize {
    item_count.div_ceil(visible_per_page)
}

/// The paginated product carousel.
#[derive(Debug)]
pub struct ProductSlider {
    region: ElementId,
    track: ElementId,
    dots: Vec<ElementId>,
    page: usize,
    page_count: usize,
    auto: AutoAdvance,
    swipe: SwipeTracker,
}

impl ProductSlider {
    /// Wire a product slider against its environment elements.
    ///
    /// `region` is the touch-gesture surface, `track` the translated strip.
    /// Requires at least one item, a non-zero `visible_per_page`, and one
    /// dot per derived page.
    pub fn new(
        region: ElementId,
        track: ElementId,
        dots: Vec<ElementId>,
        item_count: usize,
        visible_per_page: usize,
    ) -> Result<Self, WiringError> {
        if visible_per_page == 0 {
            return Err(WiringError::ZeroVisiblePerPage);
        }
        if item_count == 0 {
            return Err(WiringError::EmptyItems);
        }
        let pages = page_count(item_count, visible_per_page);
        if dots.len() != pages {
            return Err(WiringError::DotCountMismatch {
                dots: dots.len(),
                expected: pages,
                what: "product pages",
            });
        }
        Ok(Self {
            region,
            track,
            dots,
            page: 0,
            page_count: pages,
            auto: AutoAdvance::new(PRODUCT_DWELL),
            swipe: SwipeTracker::new(),
        })
    }

    /// Sync the initial view and arm auto-advance.
    pub fn mount<S: Surface>(&mut self, sched: &mut Scheduler, surface: &mut S) {
        self.sync_view(surface);
        self.auto.arm(sched);
    }

    /// Index of the displayed page.
    #[inline]
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Fixed page count.
    #[inline]
    #[must_use]
    pub fn pages(&self) -> usize {
        self.page_count
    }

    /// Whether the auto-advance timer is running.
    #[must_use]
    pub fn is_auto_running(&self) -> bool {
        self.auto.is_armed()
    }

    /// Step by a signed page delta, wrapping into `[0, page_count)`.
    ///
    /// Clamp-and-wrap rather than modulo: any underflow lands on the last
    /// page and any overflow on the first, so oversized deltas still
    /// resolve to a valid page.
    pub fn step<S: Surface>(&mut self, direction: i64, surface: &mut S) {
        let mut next = self.page as i64 + direction;
        if next < 0 {
            next = self.page_count as i64 - 1;
        }
        if next >= self.page_count as i64 {
            next = 0;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(from = self.page, to = next, "product page step");
        self.page = next as usize;
        self.sync_view(surface);
    }

    /// Jump to an absolute page index.
    pub fn go_to_page<S: Surface>(
        &mut self,
        page: usize,
        surface: &mut S,
    ) -> Result<(), IndexOutOfRange> {
        if page >= self.page_count {
            return Err(IndexOutOfRange {
                index: page,
                len: self.page_count,
                what: "pages",
            });
        }
        self.page = page;
        self.sync_view(surface);
        Ok(())
    }

    /// Project `page` onto the surface: track translation and dot state.
    pub fn sync_view<S: Surface>(&self, surface: &mut S) {
        surface.set_translate_x(self.track, -(self.page as f32 * 100.0));
        for (i, dot) in self.dots.iter().enumerate() {
            surface.set_class(*dot, ClassName::Active, i == self.page);
        }
    }

    /// Route one environment event. Returns whether it was consumed.
    pub fn handle_event<S: Surface>(
        &mut self,
        event: &Event,
        sched: &mut Scheduler,
        surface: &mut S,
    ) -> bool {
        match event {
            Event::Click { target } => {
                let Some(page) = self.dots.iter().position(|dot| dot == target) else {
                    return false;
                };
                self.page = page;
                self.sync_view(surface);
                self.auto.rearm(sched);
                true
            }
            Event::TouchStart { target, x } if *target == self.region => {
                self.swipe.begin(*x);
                true
            }
            Event::TouchEnd { target, x } if *target == self.region => {
                match self.swipe.finish(*x) {
                    SwipeOutcome::Next => {
                        self.step(1, surface);
                        self.auto.rearm(sched);
                    }
                    SwipeOutcome::Previous => {
                        self.step(-1, surface);
                        self.auto.rearm(sched);
                    }
                    SwipeOutcome::None => {}
                }
                true
            }
            _ => false,
        }
    }

    /// Route a fired timer. Returns whether this slider owned it.
    pub fn on_timer<S: Surface>(&mut self, id: TimerId, surface: &mut S) -> bool {
        if self.auto.owns(id) {
            self.step(1, surface);
            true
        } else {
            false
        }
    }

    /// Cancel the auto-advance timer.
    pub fn cancel_timers(&mut self, sched: &mut Scheduler) {
        self.auto.cancel(sched);
    }
}
