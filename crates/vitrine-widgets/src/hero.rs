#![forbid(unsafe_code)]

//! Hero banner slider.
//!
//! Rotates a fixed set of full-bleed slides with paired indicator dots.
//! An auto-advance timer steps forward every [`HERO_DWELL`]; hovering the
//! hero region pauses it, leaving resumes it, and clicking a dot jumps
//! directly and re-arms the timer so the chosen slide gets a full dwell.
//!
//! # Invariants
//!
//! - `0 <= current < slide_count` after every operation.
//! - Exactly one slide and one dot carry `active` after every operation.
//! - At most one live auto-advance timer (enforced by [`AutoAdvance`]).

use std::time::Duration;

use vitrine_core::{ClassName, ElementId, Event, IndexOutOfRange, Surface, WiringError};
use vitrine_runtime::{AutoAdvance, Scheduler, TimerId};

/// Dwell time per hero slide.
pub const HERO_DWELL: Duration = Duration::from_millis(5000);

/// The rotating hero banner.
#[derive(Debug)]
pub struct HeroSlider {
    region: ElementId,
    slides: Vec<ElementId>,
    dots: Vec<ElementId>,
    current: usize,
    auto: AutoAdvance,
}

impl HeroSlider {
    /// Wire a hero slider against its environment elements.
    ///
    /// Requires a non-empty slide list and one indicator dot per slide.
    pub fn new(
        region: ElementId,
        slides: Vec<ElementId>,
        dots: Vec<ElementId>,
    ) -> Result<Self, WiringError> {
        if slides.is_empty() {
            return Err(WiringError::EmptySlides);
        }
        if dots.len() != slides.len() {
            return Err(WiringError::DotCountMismatch {
                dots: dots.len(),
                expected: slides.len(),
                what: "hero slides",
            });
        }
        Ok(Self {
            region,
            slides,
            dots,
            current: 0,
            auto: AutoAdvance::new(HERO_DWELL),
        })
    }

    /// Activate the initial slide and arm auto-advance.
    pub fn mount<S: Surface>(&mut self, sched: &mut Scheduler, surface: &mut S) {
        surface.add_class(self.slides[self.current], ClassName::Active);
        surface.add_class(self.dots[self.current], ClassName::Active);
        self.auto.arm(sched);
    }

    /// Index of the displayed slide.
    #[inline]
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Fixed slide count.
    #[inline]
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Whether the auto-advance timer is running.
    #[must_use]
    pub fn is_auto_running(&self) -> bool {
        self.auto.is_armed()
    }

    /// Jump to an absolute slide index.
    pub fn go_to<S: Surface>(
        &mut self,
        index: usize,
        surface: &mut S,
    ) -> Result<(), IndexOutOfRange> {
        if index >= self.slides.len() {
            return Err(IndexOutOfRange {
                index,
                len: self.slides.len(),
                what: "slides",
            });
        }
        self.apply(index, surface);
        Ok(())
    }

    /// Advance one slide with forward wraparound.
    pub fn next<S: Surface>(&mut self, surface: &mut S) {
        let next = (self.current + 1) % self.slides.len();
        self.apply(next, surface);
    }

    /// Swap the active slide/dot pair. Caller guarantees bounds.
    fn apply<S: Surface>(&mut self, index: usize, surface: &mut S) {
        #[cfg(feature = "tracing")]
        tracing::debug!(from = self.current, to = index, "hero slide change");
        surface.remove_class(self.slides[self.current], ClassName::Active);
        surface.remove_class(self.dots[self.current], ClassName::Active);
        self.current = index;
        surface.add_class(self.slides[self.current], ClassName::Active);
        surface.add_class(self.dots[self.current], ClassName::Active);
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
                let Some(index) = self.dots.iter().position(|dot| dot == target) else {
                    return false;
                };
                self.apply(index, surface);
                self.auto.rearm(sched);
                true
            }
            Event::HoverEnter { target } if *target == self.region => {
                self.auto.cancel(sched);
                true
            }
            Event::HoverLeave { target } if *target == self.region => {
                // Resume is unconditional, matching the reference.
                self.auto.arm(sched);
                true
            }
            _ => false,
        }
    }

    /// Route a fired timer. Returns whether this slider owned it.
    pub fn on_timer<S: Surface>(&mut self, id: TimerId, surface: &mut S) -> bool {
        if self.auto.owns(id) {
            self.next(surface);
            true
        } else {
            false
        }
    }

    /// Cancel the auto-advance timer (hover pause, teardown).
    pub fn cancel_timers(&mut self, sched: &mut Scheduler) {
        self.auto.cancel(sched);
    }
}
