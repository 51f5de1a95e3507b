#![forbid(unsafe_code)]

//! Core types for Vitrine.
//!
//! Vitrine drives a presentation layer (rotating hero banner, paginated
//! product carousel, navigation chrome, overlay dialogs) against an
//! environment it does not own. This crate defines the seam between the
//! two sides:
//!
//! - [`ElementId`]: opaque handles to environment-owned elements, handed to
//!   components at construction (no global lookups).
//! - [`Surface`]: the full set of outputs the engine may produce (class
//!   toggles, transform writes, overlay mounts, stylesheet injection).
//! - [`Event`]: the inputs the environment feeds back in (clicks, hover,
//!   touch, keys, scroll, intersection reports).
//! - [`WiringError`] / [`IndexOutOfRange`]: explicit contract violations
//!   where the reference behavior was undefined.

pub mod element;
pub mod error;
pub mod event;
pub mod surface;

pub use element::{ClassName, ElementId};
pub use error::{IndexOutOfRange, WiringError};
pub use event::{Event, KeyCode, KeyEvent, Modifiers};
pub use surface::{OverlayMount, OverlayRequest, Surface};

#[cfg(feature = "test-helpers")]
pub use surface::recording::{RecordedOp, RecordingSurface};
