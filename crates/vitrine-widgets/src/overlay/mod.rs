#![forbid(unsafe_code)]

//! Overlay layer: dialog kinds, the LIFO overlay stack, and close routing.
//!
//! Overlays are mounted into the environment on demand (video placeholder,
//! tool teaser, search). Each kind carries a stylesheet injected at most
//! once per page session. Escape closes the top overlay; clicking an
//! overlay's backdrop or close button closes that overlay.

mod kinds;
mod stack;

pub use kinds::{OverlayKind, SEARCH_STYLE_ID, TOOL_STYLE_ID, VIDEO_STYLE_ID};
pub use stack::{NOTIFY_CLOSE_DELAY, OverlayId, OverlayOutcome, OverlayStack};
