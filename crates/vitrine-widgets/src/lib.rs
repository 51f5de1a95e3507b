#![forbid(unsafe_code)]

//! Presentation components for Vitrine.
//!
//! Each component owns its state exclusively and receives its element
//! handles at construction. Mutation happens only through the operations
//! defined here; the components emit their effects through a
//! [`Surface`](vitrine_core::Surface) and hold timers through
//! [`AutoAdvance`](vitrine_runtime::AutoAdvance) slots.

pub mod hero;
pub mod nav;
pub mod overlay;
pub mod product;
pub mod reveal;
pub mod swipe;

pub use hero::{HERO_DWELL, HeroSlider};
pub use nav::{ANCHOR_OFFSET_PX, NavBar, NavLink, SCROLL_SHADOW_THRESHOLD_PX};
pub use overlay::{
    NOTIFY_CLOSE_DELAY, OverlayId, OverlayKind, OverlayOutcome, OverlayStack,
};
pub use product::{PRODUCT_DWELL, ProductSlider, page_count};
pub use reveal::{REVEAL_RATIO, ScrollReveal};
pub use swipe::{SWIPE_THRESHOLD_PX, SwipeOutcome, SwipeTracker};
