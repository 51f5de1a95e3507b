#![forbid(unsafe_code)]

//! The environment event model.
//!
//! Every mutation the engine performs happens inside the handling of exactly
//! one of these events (or a timer fire). Events run to completion before
//! the next one is dispatched; there is no preemption.
//!
//! Pointer and touch events carry the [`ElementId`] the environment resolved
//! them against, so routing stays explicit and components never consult
//! globals.

use bitflags::bitflags;

use crate::element::ElementId;

bitflags! {
    /// Keyboard modifier state attached to a key event.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
    }
}

/// Logical key identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Closes the top overlay.
    Escape,
    Enter,
    Char(char),
}

/// A key press reported by the environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A key press with no modifiers held.
    #[must_use]
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
        }
    }
}

/// One environment callback invocation.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Pointer click resolved to an element.
    Click { target: ElementId },
    /// Pointer entered an element's region.
    HoverEnter { target: ElementId },
    /// Pointer left an element's region.
    HoverLeave { target: ElementId },
    /// Touch began inside an element, at viewport x coordinate `x`.
    TouchStart { target: ElementId, x: f32 },
    /// Touch ended inside an element, at viewport x coordinate `x`.
    TouchEnd { target: ElementId, x: f32 },
    /// Keyboard input.
    Key(KeyEvent),
    /// Viewport scrolled to vertical offset `y` (px).
    Scroll { y: f32 },
    /// An observed element is `ratio` (0.0..=1.0) visible in the viewport.
    Intersection { target: ElementId, ratio: f32 },
    /// The page finished loading.
    Loaded,
}

impl Event {
    /// Shorthand for a plain Escape press.
    #[must_use]
    pub const fn escape() -> Self {
        Event::Key(KeyEvent::plain(KeyCode::Escape))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_shorthand() {
        let Event::Key(key) = Event::escape() else {
            panic!("expected a key event");
        };
        assert_eq!(key.code, KeyCode::Escape);
        assert!(key.modifiers.is_empty());
    }

    #[test]
    fn modifiers_compose() {
        let mods = Modifiers::SHIFT | Modifiers::CTRL;
        assert!(mods.contains(Modifiers::SHIFT));
        assert!(!mods.contains(Modifiers::ALT));
    }

    #[test]
    fn events_compare_by_payload() {
        let el = ElementId::new(1);
        assert_eq!(Event::Click { target: el }, Event::Click { target: el });
        assert_ne!(
            Event::Click { target: el },
            Event::Click {
                target: ElementId::new(2)
            }
        );
    }
}
