#![forbid(unsafe_code)]

//! The full marketing page, assembled.
//!
//! [`Page`] owns every component, the scheduler, and the event routing
//! policy: overlays shadow the page while open, sliders get their own
//! clicks and touches, and everything else falls through to the card
//! interactions. The environment drives it with exactly two calls —
//! [`Page::dispatch`] per event and [`Page::tick`] per elapsed interval.

pub mod cards;
pub mod page;

pub use cards::{
    CardInteractions, CategoryCard, PLAY_HOVER_SCALE, ProductCard, ToolCard, VideoPanel,
};
pub use page::{Page, PageElements, SCROLL_DEBOUNCE, SEARCH_SUGGESTIONS};
