#![forbid(unsafe_code)]

//! The output seam between the engine and its environment.
//!
//! [`Surface`] names every effect the engine is allowed to produce. All
//! operations are synchronous and infallible: by the time a component holds
//! an [`ElementId`] its wiring has been validated, and the environment owns
//! whatever happens after the op is applied.
//!
//! # Invariants
//!
//! - Ops are applied in call order within a single event turn.
//! - `add_class`/`remove_class` are idempotent from the engine's point of
//!   view; the environment may deduplicate.
//! - `mount_overlay` returns handles for exactly the parts named in the
//!   [`OverlayRequest`]; the engine never guesses at markup structure.

use crate::element::{ClassName, ElementId};

/// The overlay parts a caller needs handles for.
///
/// The engine knows each overlay kind's part structure; the environment
/// materializes the markup and hands the matching handles back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverlayRequest {
    /// Whether the overlay has a primary action button.
    pub action: bool,
    /// Whether the overlay has a text input.
    pub input: bool,
    /// Number of itemized children (e.g. search suggestions).
    pub items: usize,
}

/// Handles for a mounted overlay's interactive parts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayMount {
    /// The overlay root, which doubles as the click-to-dismiss backdrop.
    pub root: ElementId,
    /// The close button.
    pub close: ElementId,
    /// Primary action button, when requested.
    pub action: Option<ElementId>,
    /// Text input, when requested.
    pub input: Option<ElementId>,
    /// Itemized children, in request order.
    pub items: Vec<ElementId>,
}

/// Everything the engine may do to the environment.
pub trait Surface {
    /// Add a class to an element.
    fn add_class(&mut self, el: ElementId, class: ClassName);

    /// Remove a class from an element.
    fn remove_class(&mut self, el: ElementId, class: ClassName);

    /// Add or remove a class depending on `on`.
    fn set_class(&mut self, el: ElementId, class: ClassName, on: bool) {
        if on {
            self.add_class(el, class);
        } else {
            self.remove_class(el, class);
        }
    }

    /// Set a horizontal translation on an element, in percent of its width.
    fn set_translate_x(&mut self, el: ElementId, percent: f32);

    /// Set a uniform scale transform on an element.
    fn set_scale(&mut self, el: ElementId, factor: f32);

    /// Clear any inline transform, restoring the stylesheet default.
    fn reset_transform(&mut self, el: ElementId);

    /// Replace an element's text content.
    fn set_text(&mut self, el: ElementId, text: &str);

    /// Set an inline background color; `None` restores the stylesheet value.
    fn set_background(&mut self, el: ElementId, color: Option<&str>);

    /// Smooth-scroll the viewport to vertical offset `y` (px).
    fn scroll_to(&mut self, y: f32);

    /// Vertical offset of an element from the top of the document (px).
    fn offset_top(&self, el: ElementId) -> f32;

    /// Inject a stylesheet under the given id. Callers are responsible for
    /// once-per-session semantics; the environment applies unconditionally.
    fn inject_stylesheet(&mut self, id: &'static str, css: &str);

    /// Materialize overlay markup and return handles for its parts.
    fn mount_overlay(&mut self, markup: &str, request: OverlayRequest) -> OverlayMount;

    /// Remove a previously mounted element from the document.
    fn unmount(&mut self, el: ElementId);

    /// Give an element input focus.
    fn focus(&mut self, el: ElementId);
}

#[cfg(feature = "test-helpers")]
pub mod recording {
    //! A deterministic [`Surface`] double.
    //!
    //! `RecordingSurface` mints element handles, applies every op to an
    //! in-memory model, and keeps the raw op log so tests can assert both
    //! end state ("dot 2 is active") and behavior ("the stylesheet was
    //! injected exactly once").

    use ahash::{AHashMap, AHashSet};

    use super::{OverlayMount, OverlayRequest, Surface};
    use crate::element::{ClassName, ElementId};

    /// One recorded [`Surface`] op.
    #[derive(Clone, Debug, PartialEq)]
    pub enum RecordedOp {
        AddClass(ElementId, ClassName),
        RemoveClass(ElementId, ClassName),
        TranslateX(ElementId, f32),
        Scale(ElementId, f32),
        ResetTransform(ElementId),
        SetText(ElementId, String),
        SetBackground(ElementId, Option<String>),
        ScrollTo(f32),
        InjectStylesheet(&'static str),
        MountOverlay(ElementId),
        Unmount(ElementId),
        Focus(ElementId),
    }

    /// In-memory environment double.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        next_raw: u64,
        ops: Vec<RecordedOp>,
        classes: AHashMap<ElementId, AHashSet<ClassName>>,
        translate_x: AHashMap<ElementId, f32>,
        scales: AHashMap<ElementId, f32>,
        texts: AHashMap<ElementId, String>,
        backgrounds: AHashMap<ElementId, Option<String>>,
        offsets: AHashMap<ElementId, f32>,
        stylesheets: Vec<&'static str>,
        mounted: Vec<OverlayMount>,
        unmounted: AHashSet<ElementId>,
        focused: Option<ElementId>,
        scroll_y: f32,
    }

    impl RecordingSurface {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Mint a fresh element handle.
        pub fn alloc(&mut self) -> ElementId {
            self.next_raw += 1;
            ElementId::new(self.next_raw)
        }

        /// Mint `n` fresh element handles.
        pub fn alloc_n(&mut self, n: usize) -> Vec<ElementId> {
            (0..n).map(|_| self.alloc()).collect()
        }

        /// Configure the document offset reported for an element.
        pub fn set_offset_top(&mut self, el: ElementId, y: f32) {
            self.offsets.insert(el, y);
        }

        /// Whether the element currently carries the class.
        #[must_use]
        pub fn has_class(&self, el: ElementId, class: ClassName) -> bool {
            self.classes.get(&el).is_some_and(|set| set.contains(&class))
        }

        /// Indices within `els` that currently carry `Active`.
        #[must_use]
        pub fn active_indices(&self, els: &[ElementId]) -> Vec<usize> {
            els.iter()
                .enumerate()
                .filter(|(_, el)| self.has_class(**el, ClassName::Active))
                .map(|(i, _)| i)
                .collect()
        }

        #[must_use]
        pub fn translate_x_of(&self, el: ElementId) -> Option<f32> {
            self.translate_x.get(&el).copied()
        }

        #[must_use]
        pub fn scale_of(&self, el: ElementId) -> Option<f32> {
            self.scales.get(&el).copied()
        }

        #[must_use]
        pub fn text_of(&self, el: ElementId) -> Option<&str> {
            self.texts.get(&el).map(String::as_str)
        }

        #[must_use]
        pub fn background_of(&self, el: ElementId) -> Option<&Option<String>> {
            self.backgrounds.get(&el)
        }

        /// How many times a stylesheet id has been injected.
        #[must_use]
        pub fn stylesheet_count(&self, id: &str) -> usize {
            self.stylesheets.iter().filter(|s| **s == id).count()
        }

        /// Overlay mounts in mount order, including since-unmounted ones.
        #[must_use]
        pub fn mounts(&self) -> &[OverlayMount] {
            &self.mounted
        }

        /// Whether a mounted root is still in the document.
        #[must_use]
        pub fn is_mounted(&self, root: ElementId) -> bool {
            self.mounted.iter().any(|m| m.root == root) && !self.unmounted.contains(&root)
        }

        #[must_use]
        pub fn focused(&self) -> Option<ElementId> {
            self.focused
        }

        #[must_use]
        pub fn scroll_y(&self) -> f32 {
            self.scroll_y
        }

        /// The raw op log since construction or the last [`clear_ops`].
        ///
        /// [`clear_ops`]: Self::clear_ops
        #[must_use]
        pub fn ops(&self) -> &[RecordedOp] {
            &self.ops
        }

        pub fn clear_ops(&mut self) {
            self.ops.clear();
        }
    }

    impl Surface for RecordingSurface {
        fn add_class(&mut self, el: ElementId, class: ClassName) {
            self.ops.push(RecordedOp::AddClass(el, class));
            self.classes.entry(el).or_default().insert(class);
        }

        fn remove_class(&mut self, el: ElementId, class: ClassName) {
            self.ops.push(RecordedOp::RemoveClass(el, class));
            if let Some(set) = self.classes.get_mut(&el) {
                set.remove(&class);
            }
        }

        fn set_translate_x(&mut self, el: ElementId, percent: f32) {
            self.ops.push(RecordedOp::TranslateX(el, percent));
            self.translate_x.insert(el, percent);
        }

        fn set_scale(&mut self, el: ElementId, factor: f32) {
            self.ops.push(RecordedOp::Scale(el, factor));
            self.scales.insert(el, factor);
        }

        fn reset_transform(&mut self, el: ElementId) {
            self.ops.push(RecordedOp::ResetTransform(el));
            self.translate_x.remove(&el);
            self.scales.remove(&el);
        }

        fn set_text(&mut self, el: ElementId, text: &str) {
            self.ops.push(RecordedOp::SetText(el, text.to_owned()));
            self.texts.insert(el, text.to_owned());
        }

        fn set_background(&mut self, el: ElementId, color: Option<&str>) {
            let owned = color.map(str::to_owned);
            self.ops.push(RecordedOp::SetBackground(el, owned.clone()));
            self.backgrounds.insert(el, owned);
        }

        fn scroll_to(&mut self, y: f32) {
            self.ops.push(RecordedOp::ScrollTo(y));
            self.scroll_y = y;
        }

        fn offset_top(&self, el: ElementId) -> f32 {
            self.offsets.get(&el).copied().unwrap_or(0.0)
        }

        fn inject_stylesheet(&mut self, id: &'static str, _css: &str) {
            self.ops.push(RecordedOp::InjectStylesheet(id));
            self.stylesheets.push(id);
        }

        fn mount_overlay(&mut self, _markup: &str, request: OverlayRequest) -> OverlayMount {
            let root = self.alloc();
            let close = self.alloc();
            let action = request.action.then(|| self.alloc());
            let input = request.input.then(|| self.alloc());
            let items = self.alloc_n(request.items);
            let mount = OverlayMount {
                root,
                close,
                action,
                input,
                items,
            };
            self.ops.push(RecordedOp::MountOverlay(root));
            self.mounted.push(mount.clone());
            self.unmounted.remove(&root);
            mount
        }

        fn unmount(&mut self, el: ElementId) {
            self.ops.push(RecordedOp::Unmount(el));
            self.unmounted.insert(el);
        }

        fn focus(&mut self, el: ElementId) {
            self.ops.push(RecordedOp::Focus(el));
            self.focused = Some(el);
        }
    }

}
