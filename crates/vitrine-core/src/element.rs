#![forbid(unsafe_code)]

//! Element handles and the class vocabulary.
//!
//! An [`ElementId`] is an opaque token minted by the environment. The engine
//! never dereferences it; it only passes it back through [`Surface`]
//! operations. Components receive every handle they need at construction,
//! which is what makes them testable without a rendered environment.
//!
//! [`Surface`]: crate::surface::Surface

use core::fmt;

/// Opaque handle to an environment-owned element.
///
/// Equality is identity: two handles compare equal iff the environment
/// minted them for the same element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    /// Wrap a raw environment token.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw token value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The fixed set of presentation classes the engine toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClassName {
    /// Marks the currently displayed slide, dot, or open menu.
    Active,
    /// Applied to the nav bar once the viewport scrolls past the threshold.
    Scrolled,
    /// Marks a reveal target once it has intersected the viewport.
    Visible,
    /// Tags an element as a reveal target at mount time.
    FadeIn,
    /// Applied to the body once the load event arrives.
    Loaded,
}

impl ClassName {
    /// The CSS class string the environment should apply.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ClassName::Active => "active",
            ClassName::Scrolled => "scrolled",
            ClassName::Visible => "visible",
            ClassName::FadeIn => "fade-in",
            ClassName::Loaded => "loaded",
        }
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_id_round_trip() {
        let el = ElementId::new(42);
        assert_eq!(el.raw(), 42);
        assert_eq!(el, ElementId::new(42));
        assert_ne!(el, ElementId::new(43));
    }

    #[test]
    fn element_id_display() {
        assert_eq!(ElementId::new(7).to_string(), "#7");
    }

    #[test]
    fn class_names_match_css_vocabulary() {
        assert_eq!(ClassName::Active.as_str(), "active");
        assert_eq!(ClassName::Scrolled.as_str(), "scrolled");
        assert_eq!(ClassName::Visible.as_str(), "visible");
        assert_eq!(ClassName::FadeIn.as_str(), "fade-in");
        assert_eq!(ClassName::Loaded.as_str(), "loaded");
    }

    #[test]
    fn class_name_display_matches_as_str() {
        assert_eq!(ClassName::FadeIn.to_string(), "fade-in");
    }
}
