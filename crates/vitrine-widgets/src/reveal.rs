#![forbid(unsafe_code)]

//! Intersection-driven reveal animations.
//!
//! Elements registered at construction are tagged `fade-in` on mount. When
//! the environment reports one at least [`REVEAL_RATIO`] visible, it gains
//! `visible` exactly once; later reports are no-ops.

use vitrine_core::{ClassName, ElementId, Surface};

/// Visibility ratio at which a target reveals.
pub const REVEAL_RATIO: f32 = 0.1;

#[derive(Debug)]
struct Target {
    el: ElementId,
    revealed: bool,
}

/// One-shot reveal tracker over a fixed target set.
#[derive(Debug)]
pub struct ScrollReveal {
    targets: Vec<Target>,
}

impl ScrollReveal {
    #[must_use]
    pub fn new(targets: Vec<ElementId>) -> Self {
        Self {
            targets: targets
                .into_iter()
                .map(|el| Target {
                    el,
                    revealed: false,
                })
                .collect(),
        }
    }

    /// Tag every target as a fade-in candidate.
    pub fn mount<S: Surface>(&self, surface: &mut S) {
        for target in &self.targets {
            surface.add_class(target.el, ClassName::FadeIn);
        }
    }

    /// Number of targets revealed so far.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.targets.iter().filter(|t| t.revealed).count()
    }

    /// Process one intersection report. Returns whether it applied to a
    /// registered, not-yet-revealed target at or above the ratio.
    pub fn on_intersection<S: Surface>(
        &mut self,
        el: ElementId,
        ratio: f32,
        surface: &mut S,
    ) -> bool {
        if ratio < REVEAL_RATIO {
            return false;
        }
        let Some(target) = self.targets.iter_mut().find(|t| t.el == el) else {
            return false;
        };
        if target.revealed {
            return false;
        }
        target.revealed = true;
        surface.add_class(el, ClassName::Visible);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::RecordingSurface;

    fn wired(n: usize) -> (ScrollReveal, RecordingSurface, Vec<ElementId>) {
        let mut surface = RecordingSurface::new();
        let els = surface.alloc_n(n);
        let reveal = ScrollReveal::new(els.clone());
        reveal.mount(&mut surface);
        (reveal, surface, els)
    }

    #[test]
    fn mount_tags_all_targets() {
        let (_reveal, surface, els) = wired(3);
        for el in &els {
            assert!(surface.has_class(*el, ClassName::FadeIn));
            assert!(!surface.has_class(*el, ClassName::Visible));
        }
    }

    #[test]
    fn reveals_at_ratio_threshold() {
        let (mut reveal, mut surface, els) = wired(2);
        assert!(!reveal.on_intersection(els[0], 0.05, &mut surface));
        assert!(!surface.has_class(els[0], ClassName::Visible));

        assert!(reveal.on_intersection(els[0], 0.1, &mut surface));
        assert!(surface.has_class(els[0], ClassName::Visible));
        assert_eq!(reveal.revealed_count(), 1);
    }

    #[test]
    fn reveal_happens_once() {
        let (mut reveal, mut surface, els) = wired(1);
        assert!(reveal.on_intersection(els[0], 0.5, &mut surface));
        surface.clear_ops();
        assert!(!reveal.on_intersection(els[0], 0.9, &mut surface));
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn unregistered_elements_ignored() {
        let (mut reveal, mut surface, _) = wired(1);
        let stranger = surface.alloc();
        assert!(!reveal.on_intersection(stranger, 1.0, &mut surface));
    }
}
