#![forbid(unsafe_code)]

//! Error taxonomy.
//!
//! The reference behavior left two failure classes undefined: missing
//! expected elements and out-of-range index arguments. Both are upgraded to
//! explicit contract violations here, reported at the call site. There is no
//! recovery path for either; callers propagate.

use thiserror::Error;

/// A component was constructed against an incomplete or inconsistent set of
/// environment elements.
///
/// Raised only at construction time. A successfully constructed component
/// never re-validates its wiring.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WiringError {
    /// A required element handle was not provided.
    #[error("missing required element: {0}")]
    MissingElement(&'static str),

    /// A slider was given no slides to rotate through.
    #[error("slider requires at least one slide")]
    EmptySlides,

    /// A slider was given no items to page over.
    #[error("slider requires at least one item")]
    EmptyItems,

    /// The indicator dot list does not pair 1:1 with what it indicates.
    #[error("{what}: {dots} indicator dots for {expected} positions")]
    DotCountMismatch {
        /// Number of dot handles provided.
        dots: usize,
        /// Number of positions the dots must cover.
        expected: usize,
        /// Which slider the mismatch belongs to.
        what: &'static str,
    },

    /// Items-per-page must be non-zero for the page count to be defined.
    #[error("visible-per-page must be non-zero")]
    ZeroVisiblePerPage,
}

/// An absolute jump named an index outside the component's fixed range.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("index {index} out of range for {len} {what}")]
pub struct IndexOutOfRange {
    /// The requested index.
    pub index: usize,
    /// The fixed element count.
    pub len: usize,
    /// What is being indexed ("slides", "pages").
    pub what: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wiring_error_messages() {
        assert_eq!(
            WiringError::MissingElement("hero region").to_string(),
            "missing required element: hero region"
        );
        assert_eq!(
            WiringError::DotCountMismatch {
                dots: 2,
                expected: 5,
                what: "hero slides",
            }
            .to_string(),
            "hero slides: 2 indicator dots for 5 positions"
        );
    }

    #[test]
    fn index_error_message() {
        let err = IndexOutOfRange {
            index: 9,
            len: 3,
            what: "pages",
        };
        assert_eq!(err.to_string(), "index 9 out of range for 3 pages");
    }
}
