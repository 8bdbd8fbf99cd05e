//! Continuous application to an editing surface.

use global_styles_tokens::Stylesheet;
use tracing::debug;

use super::{StyleSurface, DEFAULT_NODE_ID, WRAPPER_CLASS};

/// Rule appended after the custom properties in the editor, so the canvas
/// picks up the background color.
pub const DEFAULT_EDITOR_RULE: &str =
    ".editor-styles-wrapper { background-color: var(--wp--color--background); }";

/// Writes stylesheets into a [`StyleSurface`].
///
/// Applying is idempotent: the node is looked up by id and created only
/// if missing, and its content is replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveSink {
    node_id: String,
    extra_rules: Vec<String>,
}

impl Default for LiveSink {
    fn default() -> Self {
        Self::new(DEFAULT_NODE_ID).with_extra_rules([DEFAULT_EDITOR_RULE])
    }
}

impl LiveSink {
    /// A sink with no extra rules.
    pub fn new(node_id: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            extra_rules: Vec::new(),
        }
    }

    pub fn with_extra_rules<I, R>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        self.extra_rules = rules.into_iter().map(Into::into).collect();
        self
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    pub fn extra_rules(&self) -> &[String] {
        &self.extra_rules
    }

    /// The full text written into the node.
    pub fn content(&self, stylesheet: &Stylesheet) -> String {
        let mut content = stylesheet.to_css();
        for rule in &self.extra_rules {
            content.push('\n');
            content.push_str(rule);
        }
        content
    }

    /// Replaces the node's content with `stylesheet`.
    pub fn apply<S: StyleSurface>(&self, surface: &mut S, stylesheet: &Stylesheet) {
        let node = match surface.find(&self.node_id) {
            Some(node) => node,
            None => {
                debug!(node_id = %self.node_id, "creating style node");
                surface.create(&self.node_id)
            }
        };
        surface.add_root_class(WRAPPER_CLASS);
        surface.replace_text(node, &self.content(stylesheet));
        debug!(node_id = %self.node_id, declarations = stylesheet.len(), "styles applied");
    }
}
