//! Rendering into a response payload.

use global_styles_tokens::Stylesheet;

use super::DEFAULT_NODE_ID;

/// Renders a stylesheet once, for inclusion in a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneShotSink {
    node_id: String,
}

impl Default for OneShotSink {
    fn default() -> Self {
        Self::new(DEFAULT_NODE_ID)
    }
}

impl OneShotSink {
    pub fn new(node_id: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
        }
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    /// The CSS text, or `None` when there is nothing to apply.
    pub fn render(&self, stylesheet: &Stylesheet) -> Option<String> {
        if stylesheet.is_empty() {
            return None;
        }
        Some(stylesheet.to_css())
    }

    /// The CSS wrapped in a `<style>` element carrying the node id.
    pub fn render_tag(&self, stylesheet: &Stylesheet) -> Option<String> {
        let css = self.render(stylesheet)?;
        Some(format!("<style id=\"{}\">\n{}\n</style>", self.node_id, css))
    }
}
