#![forbid(unsafe_code)]

//! Card-level interactions: add-to-cart feedback, category press, video
//! play buttons, tool teasers.
//!
//! All of this is stateless event wiring plus short one-shot revert timers.
//! The only discipline is that every revert timer is owned here and
//! cancelled at teardown.

use std::time::Duration;

use vitrine_core::{ElementId, Event, Surface};
use vitrine_runtime::{Scheduler, TimerId};
use vitrine_widgets::{OverlayKind, OverlayStack};

/// How long the add-to-cart confirmation shows before reverting.
pub const CART_REVERT_DELAY: Duration = Duration::from_millis(2000);
/// How long a category card stays pressed.
pub const CATEGORY_PRESS_DELAY: Duration = Duration::from_millis(150);
/// Play-button scale while its video container is hovered.
pub const PLAY_HOVER_SCALE: f32 = 1.1;

const CART_CONFIRM_TEXT: &str = "Added!";
const CART_CONFIRM_BG: &str = "#28a745";
const CATEGORY_PRESS_SCALE: f32 = 0.95;

/// A product card with its add-to-cart button and resting label.
#[derive(Clone, Debug)]
pub struct ProductCard {
    pub add_to_cart: ElementId,
    pub label: String,
}

/// A category card and its display title.
#[derive(Clone, Debug)]
pub struct CategoryCard {
    pub card: ElementId,
    pub title: String,
}

/// A video placeholder container and its play button.
#[derive(Clone, Copy, Debug)]
pub struct VideoPanel {
    pub container: ElementId,
    pub play: ElementId,
}

/// A virtual-tool card with its try-now button and tool name.
#[derive(Clone, Debug)]
pub struct ToolCard {
    pub try_now: ElementId,
    pub title: String,
}

#[derive(Debug)]
enum Revert {
    Cart { button: ElementId, label: String },
    CategoryPress { card: ElementId },
}

/// Owner of the page's card wiring and revert timers.
#[derive(Debug)]
pub struct CardInteractions {
    products: Vec<ProductCard>,
    categories: Vec<CategoryCard>,
    videos: Vec<VideoPanel>,
    tools: Vec<ToolCard>,
    pending: Vec<(TimerId, Revert)>,
}

impl CardInteractions {
    #[must_use]
    pub fn new(
        products: Vec<ProductCard>,
        categories: Vec<CategoryCard>,
        videos: Vec<VideoPanel>,
        tools: Vec<ToolCard>,
    ) -> Self {
        Self {
            products,
            categories,
            videos,
            tools,
            pending: Vec::new(),
        }
    }

    /// Route one environment event. Returns whether it was consumed.
    pub fn handle_event<S: Surface>(
        &mut self,
        event: &Event,
        sched: &mut Scheduler,
        surface: &mut S,
        overlays: &mut OverlayStack,
    ) -> bool {
        match event {
            Event::Click { target } => self.handle_click(*target, sched, surface, overlays),
            Event::HoverEnter { target } => {
                let Some(panel) = self.videos.iter().find(|v| v.container == *target) else {
                    return false;
                };
                surface.set_scale(panel.play, PLAY_HOVER_SCALE);
                true
            }
            Event::HoverLeave { target } => {
                let Some(panel) = self.videos.iter().find(|v| v.container == *target) else {
                    return false;
                };
                surface.set_scale(panel.play, 1.0);
                true
            }
            _ => false,
        }
    }

    fn handle_click<S: Surface>(
        &mut self,
        target: ElementId,
        sched: &mut Scheduler,
        surface: &mut S,
        overlays: &mut OverlayStack,
    ) -> bool {
        if let Some(product) = self.products.iter().find(|p| p.add_to_cart == target) {
            surface.set_text(product.add_to_cart, CART_CONFIRM_TEXT);
            surface.set_background(product.add_to_cart, Some(CART_CONFIRM_BG));
            let timer = sched.schedule_once(CART_REVERT_DELAY);
            self.pending.push((
                timer,
                Revert::Cart {
                    button: product.add_to_cart,
                    label: product.label.clone(),
                },
            ));
            tracing::info!("product added to cart");
            return true;
        }

        if let Some(category) = self.categories.iter().find(|c| c.card == target) {
            surface.set_scale(category.card, CATEGORY_PRESS_SCALE);
            let timer = sched.schedule_once(CATEGORY_PRESS_DELAY);
            self.pending
                .push((timer, Revert::CategoryPress { card: category.card }));
            tracing::info!(category = %category.title, "navigating to category");
            return true;
        }

        if let Some(index) = self.videos.iter().position(|v| v.play == target) {
            overlays.push(OverlayKind::Video { number: index + 1 }, surface);
            return true;
        }

        if let Some(tool) = self.tools.iter().find(|t| t.try_now == target) {
            overlays.push(
                OverlayKind::Tool {
                    name: tool.title.clone(),
                },
                surface,
            );
            return true;
        }

        false
    }

    /// Route a fired timer. Returns whether a revert was applied.
    pub fn on_timer<S: Surface>(&mut self, id: TimerId, surface: &mut S) -> bool {
        let Some(pos) = self.pending.iter().position(|(timer, _)| *timer == id) else {
            return false;
        };
        let (_, revert) = self.pending.remove(pos);
        match revert {
            Revert::Cart { button, label } => {
                surface.set_text(button, &label);
                surface.set_background(button, None);
            }
            Revert::CategoryPress { card } => {
                surface.reset_transform(card);
            }
        }
        true
    }

    /// Cancel every pending revert (teardown).
    pub fn cancel_timers(&mut self, sched: &mut Scheduler) {
        for (timer, _) in self.pending.drain(..) {
            sched.cancel(timer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::RecordingSurface;

    fn wired() -> (CardInteractions, Scheduler, RecordingSurface, OverlayStack) {
        let mut surface = RecordingSurface::new();
        let products = vec![ProductCard {
            add_to_cart: surface.alloc(),
            label: "Add to Cart".into(),
        }];
        let categories = vec![CategoryCard {
            card: surface.alloc(),
            title: "Skin Care".into(),
        }];
        let videos = vec![VideoPanel {
            container: surface.alloc(),
            play: surface.alloc(),
        }];
        let tools = vec![ToolCard {
            try_now: surface.alloc(),
            title: "Shade Finder".into(),
        }];
        let cards = CardInteractions::new(products, categories, videos, tools);
        (cards, Scheduler::new(), surface, OverlayStack::new())
    }

    #[test]
    fn add_to_cart_confirms_then_reverts() {
        let (mut cards, mut sched, mut surface, mut overlays) = wired();
        let button = cards.products[0].add_to_cart;

        assert!(cards.handle_event(
            &Event::Click { target: button },
            &mut sched,
            &mut surface,
            &mut overlays,
        ));
        assert_eq!(surface.text_of(button), Some(CART_CONFIRM_TEXT));
        assert_eq!(
            surface.background_of(button),
            Some(&Some(CART_CONFIRM_BG.to_owned()))
        );

        let fired = sched.advance(CART_REVERT_DELAY);
        assert_eq!(fired.len(), 1);
        assert!(cards.on_timer(fired[0], &mut surface));
        assert_eq!(surface.text_of(button), Some("Add to Cart"));
        assert_eq!(surface.background_of(button), Some(&None));
    }

    #[test]
    fn category_press_scales_then_resets() {
        let (mut cards, mut sched, mut surface, mut overlays) = wired();
        let card = cards.categories[0].card;

        cards.handle_event(
            &Event::Click { target: card },
            &mut sched,
            &mut surface,
            &mut overlays,
        );
        assert_eq!(surface.scale_of(card), Some(CATEGORY_PRESS_SCALE));

        let fired = sched.advance(CATEGORY_PRESS_DELAY);
        assert!(cards.on_timer(fired[0], &mut surface));
        assert_eq!(surface.scale_of(card), None);
    }

    #[test]
    fn play_button_hover_and_click() {
        let (mut cards, mut sched, mut surface, mut overlays) = wired();
        let panel = cards.videos[0];

        cards.handle_event(
            &Event::HoverEnter {
                target: panel.container,
            },
            &mut sched,
            &mut surface,
            &mut overlays,
        );
        assert_eq!(surface.scale_of(panel.play), Some(PLAY_HOVER_SCALE));

        cards.handle_event(
            &Event::HoverLeave {
                target: panel.container,
            },
            &mut sched,
            &mut surface,
            &mut overlays,
        );
        assert_eq!(surface.scale_of(panel.play), Some(1.0));

        cards.handle_event(
            &Event::Click { target: panel.play },
            &mut sched,
            &mut surface,
            &mut overlays,
        );
        assert_eq!(overlays.depth(), 1);
    }

    #[test]
    fn tool_card_opens_tool_overlay() {
        let (mut cards, mut sched, mut surface, mut overlays) = wired();
        let try_now = cards.tools[0].try_now;

        cards.handle_event(
            &Event::Click { target: try_now },
            &mut sched,
            &mut surface,
            &mut overlays,
        );
        assert_eq!(overlays.depth(), 1);
        // Tool overlays come with an action button.
        assert!(surface.mounts()[0].action.is_some());
    }

    #[test]
    fn cancel_timers_drops_reverts() {
        let (mut cards, mut sched, mut surface, mut overlays) = wired();
        let button = cards.products[0].add_to_cart;

        cards.handle_event(
            &Event::Click { target: button },
            &mut sched,
            &mut surface,
            &mut overlays,
        );
        cards.cancel_timers(&mut sched);
        assert_eq!(sched.pending(), 0);
        // Confirmation text stays; nothing fires to revert it.
        assert!(sched.advance(CART_REVERT_DELAY * 2).is_empty());
        assert_eq!(surface.text_of(button), Some(CART_CONFIRM_TEXT));
    }

    #[test]
    fn unrelated_events_fall_through() {
        let (mut cards, mut sched, mut surface, mut overlays) = wired();
        let stranger = surface.alloc();
        assert!(!cards.handle_event(
            &Event::Click { target: stranger },
            &mut sched,
            &mut surface,
            &mut overlays,
        ));
        assert!(!cards.handle_event(&Event::Loaded, &mut sched, &mut surface, &mut overlays));
    }
}
