#![forbid(unsafe_code)]

//! Navigation chrome: hamburger toggle, anchor scrolling, scroll shadow.
//!
//! Stateless beyond two booleans; every operation is a direct class toggle
//! or a scroll request. Link clicks close the mobile menu and smooth-scroll
//! to the link's target section, offset by the fixed bar height.

use vitrine_core::{ClassName, ElementId, Event, Surface};

/// Viewport offset (px) past which the bar gets its `scrolled` treatment.
pub const SCROLL_SHADOW_THRESHOLD_PX: f32 = 100.0;

/// Fixed-bar allowance subtracted from anchor targets.
pub const ANCHOR_OFFSET_PX: f32 = 80.0;

/// A nav link and the section it anchors to, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// The clickable link element.
    pub link: ElementId,
    /// The section to scroll to; `None` for external links.
    pub target: Option<ElementId>,
}

/// The top navigation bar and mobile menu.
#[derive(Debug)]
pub struct NavBar {
    bar: ElementId,
    hamburger: ElementId,
    menu: ElementId,
    links: Vec<NavLink>,
    open: bool,
    scrolled: bool,
}

impl NavBar {
    #[must_use]
    pub fn new(
        bar: ElementId,
        hamburger: ElementId,
        menu: ElementId,
        links: Vec<NavLink>,
    ) -> Self {
        Self {
            bar,
            hamburger,
            menu,
            links,
            open: false,
            scrolled: false,
        }
    }

    /// Whether the mobile menu is open.
    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the bar carries the scrolled treatment.
    #[inline]
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Route one environment event. Returns whether it was consumed.
    ///
    /// Scroll events are never consumed; they are shared input.
    pub fn handle_event<S: Surface>(&mut self, event: &Event, surface: &mut S) -> bool {
        match event {
            Event::Click { target } if *target == self.hamburger => {
                self.open = !self.open;
                surface.set_class(self.hamburger, ClassName::Active, self.open);
                surface.set_class(self.menu, ClassName::Active, self.open);
                true
            }
            Event::Click { target } => {
                let Some(link) = self.links.iter().find(|l| l.link == *target).copied() else {
                    return false;
                };
                self.close_menu(surface);
                if let Some(section) = link.target {
                    let y = surface.offset_top(section) - ANCHOR_OFFSET_PX;
                    surface.scroll_to(y);
                }
                true
            }
            Event::Scroll { y } => {
                self.sync_scrolled(*y, surface);
                false
            }
            _ => false,
        }
    }

    /// Apply the scrolled treatment for a viewport offset. Idempotent.
    pub fn sync_scrolled<S: Surface>(&mut self, y: f32, surface: &mut S) {
        let on = y > SCROLL_SHADOW_THRESHOLD_PX;
        if on != self.scrolled {
            self.scrolled = on;
            surface.set_class(self.bar, ClassName::Scrolled, on);
        }
    }

    fn close_menu<S: Surface>(&mut self, surface: &mut S) {
        self.open = false;
        surface.remove_class(self.hamburger, ClassName::Active);
        surface.remove_class(self.menu, ClassName::Active);
    }
}
