#![forbid(unsafe_code)]

//! LIFO stack of mounted overlays with close routing.
//!
//! # Invariants
//!
//! - Overlays close LIFO under Escape; backdrop and close-button clicks
//!   close the specific overlay they belong to.
//! - Each kind's stylesheet is injected at most once per stack lifetime.
//! - A pending timed close (tool notify) is cancelled if its overlay is
//!   closed by any other path first.
//!
//! # Failure Modes
//!
//! - Escape with an empty stack returns `None` (the event is not consumed).
//! - A timer fire for an already-closed overlay is not claimed.

use std::time::Duration;

use ahash::AHashSet;
use vitrine_core::{Event, KeyCode, OverlayMount, Surface};
use vitrine_runtime::{Scheduler, TimerId};

use crate::overlay::kinds::OverlayKind;

/// Delay between the notify acknowledgment and the tool overlay closing.
pub const NOTIFY_CLOSE_DELAY: Duration = Duration::from_millis(1500);

/// Confirmation shown on the notify button before the overlay closes.
const NOTIFY_ACK_TEXT: &str = "You'll be notified!";
const NOTIFY_ACK_BG: &str = "#28a745";

/// Identifier for an overlay within one stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OverlayId(u64);

impl OverlayId {
    /// The raw id value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// What handling an event did to the stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverlayOutcome {
    /// An overlay was closed and unmounted.
    Closed(OverlayId),
    /// The tool overlay acknowledged a notify request and armed its
    /// delayed close.
    NotifyArmed(OverlayId),
    /// A search suggestion was copied into the input.
    SuggestionPicked {
        overlay: OverlayId,
        query: String,
    },
    /// The event landed on an overlay part with no further effect.
    Consumed,
}

#[derive(Debug)]
struct ActiveOverlay {
    id: OverlayId,
    kind: OverlayKind,
    mount: OverlayMount,
}

/// Stack of open overlays, bottom to top.
#[derive(Debug, Default)]
pub struct OverlayStack {
    overlays: Vec<ActiveOverlay>,
    injected: AHashSet<&'static str>,
    pending_close: Vec<(TimerId, OverlayId)>,
    next_id: u64,
}

impl OverlayStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.overlays.len()
    }

    /// Id of the top overlay, if any.
    #[must_use]
    pub fn top_id(&self) -> Option<OverlayId> {
        self.overlays.last().map(|o| o.id)
    }

    #[must_use]
    pub fn contains(&self, id: OverlayId) -> bool {
        self.overlays.iter().any(|o| o.id == id)
    }

    /// Mount an overlay: inject its stylesheet (first time only), hand the
    /// markup to the environment, and focus the input when there is one.
    pub fn push<S: Surface>(&mut self, kind: OverlayKind, surface: &mut S) -> OverlayId {
        let (style_id, css) = kind.stylesheet();
        if self.injected.insert(style_id) {
            surface.inject_stylesheet(style_id, css);
        }

        let mount = surface.mount_overlay(&kind.markup(), kind.request());
        if let Some(input) = mount.input {
            surface.focus(input);
        }

        let id = OverlayId(self.next_id);
        self.next_id += 1;
        #[cfg(feature = "tracing")]
        tracing::debug!(id = id.raw(), "overlay opened");
        self.overlays.push(ActiveOverlay { id, kind, mount });
        id
    }

    /// Close the top overlay.
    pub fn pop<S: Surface>(
        &mut self,
        sched: &mut Scheduler,
        surface: &mut S,
    ) -> Option<OverlayId> {
        let id = self.top_id()?;
        self.close(id, sched, surface)
    }

    /// Close a specific overlay, unmounting it and dropping any pending
    /// timed close.
    pub fn close<S: Surface>(
        &mut self,
        id: OverlayId,
        sched: &mut Scheduler,
        surface: &mut S,
    ) -> Option<OverlayId> {
        let idx = self.overlays.iter().position(|o| o.id == id)?;
        let overlay = self.overlays.remove(idx);
        surface.unmount(overlay.mount.root);

        self.pending_close.retain(|(timer, owner)| {
            if *owner == id {
                sched.cancel(*timer);
                false
            } else {
                true
            }
        });

        #[cfg(feature = "tracing")]
        tracing::debug!(id = id.raw(), "overlay closed");
        Some(id)
    }

    /// Route one environment event. `None` means the event was not for the
    /// overlay layer and should fall through to the page.
    pub fn handle_event<S: Surface>(
        &mut self,
        event: &Event,
        sched: &mut Scheduler,
        surface: &mut S,
    ) -> Option<OverlayOutcome> {
        match event {
            Event::Key(key) if key.code == KeyCode::Escape => {
                self.pop(sched, surface).map(OverlayOutcome::Closed)
            }
            Event::Click { target } => self.route_click(*target, sched, surface),
            _ => None,
        }
    }

    fn route_click<S: Surface>(
        &mut self,
        target: vitrine_core::ElementId,
        sched: &mut Scheduler,
        surface: &mut S,
    ) -> Option<OverlayOutcome> {
        let hit = self.overlays.iter().find_map(|overlay| {
            let mount = &overlay.mount;
            if mount.root == target || mount.close == target {
                Some((overlay.id, Hit::Close))
            } else if mount.action == Some(target) {
                Some((overlay.id, Hit::Action))
            } else if mount.input == Some(target) {
                Some((overlay.id, Hit::Input))
            } else {
                mount
                    .items
                    .iter()
                    .position(|item| *item == target)
                    .map(|i| (overlay.id, Hit::Item(i)))
            }
        })?;

        match hit {
            (id, Hit::Close) => self.close(id, sched, surface).map(OverlayOutcome::Closed),
            (id, Hit::Action) => {
                let overlay = self.overlays.iter().find(|o| o.id == id)?;
                let action = overlay.mount.action?;
                surface.set_text(action, NOTIFY_ACK_TEXT);
                surface.set_background(action, Some(NOTIFY_ACK_BG));
                let timer = sched.schedule_once(NOTIFY_CLOSE_DELAY);
                self.pending_close.push((timer, id));
                Some(OverlayOutcome::NotifyArmed(id))
            }
            (_, Hit::Input) => Some(OverlayOutcome::Consumed),
            (id, Hit::Item(index)) => {
                let overlay = self.overlays.iter().find(|o| o.id == id)?;
                let OverlayKind::Search { suggestions } = &overlay.kind else {
                    return Some(OverlayOutcome::Consumed);
                };
                let query = suggestions.get(index)?.clone();
                if let Some(input) = overlay.mount.input {
                    surface.set_text(input, &query);
                }
                Some(OverlayOutcome::SuggestionPicked { overlay: id, query })
            }
        }
    }

    /// Route a fired timer. Returns whether the stack owned it (a pending
    /// timed close), in which case the overlay is closed.
    pub fn on_timer<S: Surface>(
        &mut self,
        id: TimerId,
        sched: &mut Scheduler,
        surface: &mut S,
    ) -> bool {
        let Some(pos) = self.pending_close.iter().position(|(timer, _)| *timer == id) else {
            return false;
        };
        let (_, overlay) = self.pending_close.remove(pos);
        self.close(overlay, sched, surface);
        true
    }

    /// Cancel every pending timed close (teardown).
    pub fn cancel_timers(&mut self, sched: &mut Scheduler) {
        for (timer, _) in self.pending_close.drain(..) {
            sched.cancel(timer);
        }
    }
}

#[derive(Clone, Copy)]
enum Hit {
    Close,
    Action,
    Input,
    Item(usize),
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::RecordingSurface;

    fn search_kind() -> OverlayKind {
        OverlayKind::Search {
            suggestions: vec!["Hair Color".into(), "Makeup".into()],
        }
    }

    #[test]
    fn push_mounts_and_focuses_search_input() {
        let mut surface = RecordingSurface::new();
        let mut stack = OverlayStack::new();

        let id = stack.push(search_kind(), &mut surface);
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.top_id(), Some(id));

        let mount = surface.mounts().last().expect("mounted").clone();
        assert!(surface.is_mounted(mount.root));
        assert_eq!(surface.focused(), mount.input);
    }

    #[test]
    fn stylesheet_injected_once_per_kind() {
        let mut surface = RecordingSurface::new();
        let mut sched = Scheduler::new();
        let mut stack = OverlayStack::new();

        let first = stack.push(OverlayKind::Video { number: 1 }, &mut surface);
        stack.close(first, &mut sched, &mut surface);
        stack.push(OverlayKind::Video { number: 2 }, &mut surface);
        stack.push(search_kind(), &mut surface);

        assert_eq!(surface.stylesheet_count(crate::overlay::VIDEO_STYLE_ID), 1);
        assert_eq!(surface.stylesheet_count(crate::overlay::SEARCH_STYLE_ID), 1);
    }

    #[test]
    fn escape_closes_only_the_top_overlay() {
        let mut surface = RecordingSurface::new();
        let mut sched = Scheduler::new();
        let mut stack = OverlayStack::new();

        let bottom = stack.push(OverlayKind::Video { number: 1 }, &mut surface);
        let top = stack.push(search_kind(), &mut surface);

        let outcome = stack.handle_event(&Event::escape(), &mut sched, &mut surface);
        assert_eq!(outcome, Some(OverlayOutcome::Closed(top)));
        assert_eq!(stack.top_id(), Some(bottom));

        let outcome = stack.handle_event(&Event::escape(), &mut sched, &mut surface);
        assert_eq!(outcome, Some(OverlayOutcome::Closed(bottom)));
        assert!(stack.is_empty());

        // Escape on an empty stack falls through.
        assert_eq!(
            stack.handle_event(&Event::escape(), &mut sched, &mut surface),
            None
        );
    }

    #[test]
    fn backdrop_click_closes_its_overlay() {
        let mut surface = RecordingSurface::new();
        let mut sched = Scheduler::new();
        let mut stack = OverlayStack::new();

        let id = stack.push(OverlayKind::Video { number: 1 }, &mut surface);
        let root = surface.mounts()[0].root;

        let outcome = stack.handle_event(&Event::Click { target: root }, &mut sched, &mut surface);
        assert_eq!(outcome, Some(OverlayOutcome::Closed(id)));
        assert!(!surface.is_mounted(root));
    }

    #[test]
    fn close_button_closes() {
        let mut surface = RecordingSurface::new();
        let mut sched = Scheduler::new();
        let mut stack = OverlayStack::new();

        let id = stack.push(OverlayKind::Video { number: 1 }, &mut surface);
        let close = surface.mounts()[0].close;

        let outcome = stack.handle_event(&Event::Click { target: close }, &mut sched, &mut surface);
        assert_eq!(outcome, Some(OverlayOutcome::Closed(id)));
    }

    #[test]
    fn notify_action_acknowledges_then_closes_after_delay() {
        let mut surface = RecordingSurface::new();
        let mut sched = Scheduler::new();
        let mut stack = OverlayStack::new();

        let id = stack.push(
            OverlayKind::Tool {
                name: "Shade Finder".into(),
            },
            &mut surface,
        );
        let mount = surface.mounts()[0].clone();
        let action = mount.action.expect("tool overlay has an action");

        let outcome =
            stack.handle_event(&Event::Click { target: action }, &mut sched, &mut surface);
        assert_eq!(outcome, Some(OverlayOutcome::NotifyArmed(id)));
        assert_eq!(surface.text_of(action), Some(NOTIFY_ACK_TEXT));
        assert!(surface.is_mounted(mount.root));

        let fired = sched.advance(NOTIFY_CLOSE_DELAY);
        assert_eq!(fired.len(), 1);
        assert!(stack.on_timer(fired[0], &mut sched, &mut surface));
        assert!(stack.is_empty());
        assert!(!surface.is_mounted(mount.root));
    }

    #[test]
    fn manual_close_cancels_pending_timed_close() {
        let mut surface = RecordingSurface::new();
        let mut sched = Scheduler::new();
        let mut stack = OverlayStack::new();

        let id = stack.push(
            OverlayKind::Tool {
                name: "Virtual Try-On".into(),
            },
            &mut surface,
        );
        let action = surface.mounts()[0].action.expect("action");

        stack.handle_event(&Event::Click { target: action }, &mut sched, &mut surface);
        stack.close(id, &mut sched, &mut surface);

        // The armed close must not fire against a fresh overlay.
        assert!(sched.advance(NOTIFY_CLOSE_DELAY * 2).is_empty());
        assert!(stack.pending_close.is_empty());
    }

    #[test]
    fn suggestion_click_fills_input_and_reports_query() {
        let mut surface = RecordingSurface::new();
        let mut sched = Scheduler::new();
        let mut stack = OverlayStack::new();

        let id = stack.push(search_kind(), &mut surface);
        let mount = surface.mounts()[0].clone();

        let outcome = stack.handle_event(
            &Event::Click {
                target: mount.items[1],
            },
            &mut sched,
            &mut surface,
        );
        assert_eq!(
            outcome,
            Some(OverlayOutcome::SuggestionPicked {
                overlay: id,
                query: "Makeup".into(),
            })
        );
        assert_eq!(
            surface.text_of(mount.input.expect("input")),
            Some("Makeup")
        );
        // Picking a suggestion does not close the overlay.
        assert!(stack.contains(id));
    }

    #[test]
    fn input_click_is_consumed_without_effect() {
        let mut surface = RecordingSurface::new();
        let mut sched = Scheduler::new();
        let mut stack = OverlayStack::new();

        stack.push(search_kind(), &mut surface);
        let input = surface.mounts()[0].input.expect("input");
        surface.clear_ops();

        let outcome = stack.handle_event(&Event::Click { target: input }, &mut sched, &mut surface);
        assert_eq!(outcome, Some(OverlayOutcome::Consumed));
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn unrelated_clicks_fall_through() {
        let mut surface = RecordingSurface::new();
        let mut sched = Scheduler::new();
        let mut stack = OverlayStack::new();

        stack.push(OverlayKind::Video { number: 1 }, &mut surface);
        let stranger = surface.alloc();
        assert_eq!(
            stack.handle_event(&Event::Click { target: stranger }, &mut sched, &mut surface),
            None
        );
    }

    #[test]
    fn cancel_timers_clears_pending_closes() {
        let mut surface = RecordingSurface::new();
        let mut sched = Scheduler::new();
        let mut stack = OverlayStack::new();

        stack.push(
            OverlayKind::Tool {
                name: "Tool".into(),
            },
            &mut surface,
        );
        let action = surface.mounts()[0].action.expect("action");
        stack.handle_event(&Event::Click { target: action }, &mut sched, &mut surface);
        assert_eq!(sched.pending(), 1);

        stack.cancel_timers(&mut sched);
        assert_eq!(sched.pending(), 0);
    }
}
