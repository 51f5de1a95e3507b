#![forbid(unsafe_code)]

//! The page controller.
//!
//! [`Page`] is the single owner of the scheduler and every component, so
//! routing stays unambiguous: each event is offered to exactly one layer at
//! a time, top down, and each fired timer is claimed by exactly one owner.
//!
//! # Invariants
//!
//! - Open overlays shadow the page for Escape and for clicks on their own
//!   parts; everything else falls through.
//! - Every timer the components arm is routed back to its owner by
//!   [`Page::tick`]; after [`Page::teardown`] no timer remains scheduled.
//!
//! # Failure Modes
//!
//! - [`Page::mount`] rejects incomplete wiring with a [`WiringError`]
//!   instead of mounting a half-alive page.

use std::time::Duration;

use vitrine_core::{ClassName, ElementId, Event, Surface, WiringError};
use vitrine_runtime::{Debouncer, Scheduler};
use vitrine_widgets::{
    HeroSlider, NavBar, NavLink, OverlayKind, OverlayOutcome, OverlayStack, ProductSlider,
    ScrollReveal,
};
use web_time::Instant;

use crate::cards::{CardInteractions, CategoryCard, ProductCard, ToolCard, VideoPanel};

/// Trailing delay coalescing scroll re-syncs to roughly frame rate.
pub const SCROLL_DEBOUNCE: Duration = Duration::from_millis(16);

/// The static suggestion list shown in the search overlay.
pub const SEARCH_SUGGESTIONS: [&str; 5] = [
    "Glycolic Gloss Shampoo",
    "Hyaluronic Acid Serum",
    "Hair Color",
    "Makeup",
    "Skin Care",
];

/// Every element handle the page needs, resolved by the environment up
/// front. `search_button` is optional in the markup, so it arrives as an
/// `Option` and [`Page::mount`] turns its absence into a [`WiringError`].
#[derive(Clone, Debug)]
pub struct PageElements {
    pub body: ElementId,
    pub nav_bar: ElementId,
    pub hamburger: ElementId,
    pub nav_menu: ElementId,
    pub nav_links: Vec<NavLink>,
    pub hero_region: ElementId,
    pub hero_slides: Vec<ElementId>,
    pub hero_dots: Vec<ElementId>,
    pub product_region: ElementId,
    pub product_track: ElementId,
    pub product_dots: Vec<ElementId>,
    pub product_item_count: usize,
    pub product_visible_per_page: usize,
    pub reveal_targets: Vec<ElementId>,
    pub product_cards: Vec<ProductCard>,
    pub category_cards: Vec<CategoryCard>,
    pub video_panels: Vec<VideoPanel>,
    pub tool_cards: Vec<ToolCard>,
    pub search_button: Option<ElementId>,
}

/// The assembled page session.
#[derive(Debug)]
pub struct Page {
    sched: Scheduler,
    nav: NavBar,
    hero: HeroSlider,
    product: ProductSlider,
    reveal: ScrollReveal,
    overlays: OverlayStack,
    cards: CardInteractions,
    scroll_debounce: Debouncer,
    body: ElementId,
    search_button: ElementId,
    last_scroll_y: f32,
    opened: Instant,
}

impl Page {
    /// Wire and mount the page: validate the element bundle, sync initial
    /// classes, and arm both auto-advance timers.
    pub fn mount<S: Surface>(elements: PageElements, surface: &mut S) -> Result<Self, WiringError> {
        let search_button = elements
            .search_button
            .ok_or(WiringError::MissingElement("search button"))?;

        let mut sched = Scheduler::new();
        let nav = NavBar::new(
            elements.nav_bar,
            elements.hamburger,
            elements.nav_menu,
            elements.nav_links,
        );
        let mut hero = HeroSlider::new(
            elements.hero_region,
            elements.hero_slides,
            elements.hero_dots,
        )?;
        let mut product = ProductSlider::new(
            elements.product_region,
            elements.product_track,
            elements.product_dots,
            elements.product_item_count,
            elements.product_visible_per_page,
        )?;
        let reveal = ScrollReveal::new(elements.reveal_targets);
        let cards = CardInteractions::new(
            elements.product_cards,
            elements.category_cards,
            elements.video_panels,
            elements.tool_cards,
        );

        reveal.mount(surface);
        hero.mount(&mut sched, surface);
        product.mount(&mut sched, surface);

        tracing::info!(
            slides = hero.slide_count(),
            pages = product.pages(),
            "page mounted"
        );

        Ok(Self {
            sched,
            nav,
            hero,
            product,
            reveal,
            overlays: OverlayStack::new(),
            cards,
            scroll_debounce: Debouncer::new(SCROLL_DEBOUNCE),
            body: elements.body,
            search_button,
            last_scroll_y: 0.0,
            opened: Instant::now(),
        })
    }

    /// Route one environment event. Returns whether any layer consumed it.
    pub fn dispatch<S: Surface>(&mut self, event: &Event, surface: &mut S) -> bool {
        // Overlays shadow the page: Escape and clicks on overlay parts
        // never reach the components below.
        if let Some(outcome) = self.overlays.handle_event(event, &mut self.sched, surface) {
            if let OverlayOutcome::SuggestionPicked { query, .. } = &outcome {
                tracing::info!(query = %query, "search submitted");
            }
            return true;
        }

        match event {
            Event::Click { target } if *target == self.search_button => {
                self.overlays.push(
                    OverlayKind::Search {
                        suggestions: suggestions(),
                    },
                    surface,
                );
                return true;
            }
            Event::Loaded => {
                surface.add_class(self.body, ClassName::Loaded);
                return true;
            }
            Event::Scroll { y } => {
                // Immediate sync, plus a trailing debounced re-sync so the
                // state settles after a burst even if the last event is
                // dropped by the environment.
                self.last_scroll_y = *y;
                self.nav.sync_scrolled(*y, surface);
                self.scroll_debounce.trigger(&mut self.sched);
                return false;
            }
            Event::Intersection { target, ratio } => {
                return self.reveal.on_intersection(*target, *ratio, surface);
            }
            _ => {}
        }

        self.nav.handle_event(event, surface)
            || self.hero.handle_event(event, &mut self.sched, surface)
            || self.product.handle_event(event, &mut self.sched, surface)
            || self
                .cards
                .handle_event(event, &mut self.sched, surface, &mut self.overlays)
    }

    /// Advance virtual time and route every fired timer to its owner.
    pub fn tick<S: Surface>(&mut self, dt: Duration, surface: &mut S) {
        for id in self.sched.advance(dt) {
            if self.hero.on_timer(id, surface)
                || self.product.on_timer(id, surface)
                || self.overlays.on_timer(id, &mut self.sched, surface)
                || self.cards.on_timer(id, surface)
            {
                continue;
            }
            if self.scroll_debounce.on_timer(id) {
                self.nav.sync_scrolled(self.last_scroll_y, surface);
                continue;
            }
            tracing::warn!(id = id.raw(), "timer fired with no owner");
        }
    }

    /// Close everything and cancel every outstanding timer.
    pub fn teardown<S: Surface>(&mut self, surface: &mut S) {
        while self.overlays.pop(&mut self.sched, surface).is_some() {}
        self.overlays.cancel_timers(&mut self.sched);
        self.hero.cancel_timers(&mut self.sched);
        self.product.cancel_timers(&mut self.sched);
        self.cards.cancel_timers(&mut self.sched);
        self.scroll_debounce.cancel(&mut self.sched);
        tracing::info!(elapsed_ms = self.opened.elapsed().as_millis() as u64, "page torn down");
    }

    #[inline]
    #[must_use]
    pub fn hero(&self) -> &HeroSlider {
        &self.hero
    }

    #[inline]
    #[must_use]
    pub fn product(&self) -> &ProductSlider {
        &self.product
    }

    #[inline]
    #[must_use]
    pub fn nav(&self) -> &NavBar {
        &self.nav
    }

    #[inline]
    #[must_use]
    pub fn overlays(&self) -> &OverlayStack {
        &self.overlays
    }

    #[inline]
    #[must_use]
    pub fn reveal(&self) -> &ScrollReveal {
        &self.reveal
    }

    /// Timers currently scheduled, all owners combined.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.sched.pending()
    }
}

fn suggestions() -> Vec<String> {
    SEARCH_SUGGESTIONS.iter().map(|s| (*s).to_owned()).collect()
}
