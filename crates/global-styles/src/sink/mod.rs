//! Where resolved styles go.
//!
//! The same resolved [`Stylesheet`](global_styles_tokens::Stylesheet) is
//! delivered two ways:
//!
//! - [`OneShotSink`]: rendered once into a response, as text or as a
//!   `<style>` element.
//! - [`LiveSink`]: written into a [`StyleSurface`] on every change, reusing
//!   the node the one-shot path emitted when there is one.
//!
//! Both address the style node by the same identifier, so a page rendered
//! by the one-shot sink and then taken over by a live session never ends up
//! with two copies of the variables.

mod document;
mod live;
mod oneshot;

pub use document::{HeadDocument, StyleElement};
pub use live::{LiveSink, DEFAULT_EDITOR_RULE};
pub use oneshot::OneShotSink;

/// Identifier of the style node holding the custom properties.
pub const DEFAULT_NODE_ID: &str = "wp-global-styles-tag";

/// Class marking the element whose subtree uses global styles.
pub const WRAPPER_CLASS: &str = "wp-gs";

/// A document that can hold identified style nodes.
pub trait StyleSurface {
    /// Handle to a style node.
    type Node: Copy;

    /// Returns the node with `id`, if present.
    fn find(&self, id: &str) -> Option<Self::Node>;

    /// Creates an empty node with `id`.
    fn create(&mut self, id: &str) -> Self::Node;

    /// Replaces the whole text content of `node`.
    fn replace_text(&mut self, node: Self::Node, text: &str);

    /// Adds `class` to the styled root element. Surfaces without such an
    /// element ignore it.
    fn add_root_class(&mut self, _class: &str) {}
}
