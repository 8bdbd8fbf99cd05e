//! An in-memory document head.

use super::StyleSurface;

/// A `<style>` element in a [`HeadDocument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleElement {
    pub id: String,
    pub text: String,
}

/// Style elements of a page head plus the classes on its styled root.
///
/// Server-rendered `<style>` tags can be [`ingest`](Self::ingest)ed so a
/// live session updates them in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadDocument {
    elements: Vec<StyleElement>,
    root_classes: Vec<String>,
}

impl HeadDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[StyleElement] {
        &self.elements
    }

    pub fn root_classes(&self) -> &[String] {
        &self.root_classes
    }

    pub fn has_root_class(&self, class: &str) -> bool {
        self.root_classes.iter().any(|c| c == class)
    }

    /// Text of the first element with `id`.
    pub fn text_of(&self, id: &str) -> Option<&str> {
        self.elements
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.text.as_str())
    }

    /// Number of elements with `id`.
    pub fn count(&self, id: &str) -> usize {
        self.elements.iter().filter(|e| e.id == id).count()
    }

    /// Adds a `<style id="...">...</style>` tag as rendered by
    /// [`OneShotSink::render_tag`](super::OneShotSink::render_tag).
    ///
    /// Returns false, leaving the document unchanged, if `tag` is not such
    /// an element.
    pub fn ingest(&mut self, tag: &str) -> bool {
        match parse_style_tag(tag) {
            Some((id, text)) => {
                self.elements.push(StyleElement {
                    id: id.to_string(),
                    text: text.to_string(),
                });
                true
            }
            None => false,
        }
    }

    /// Renders every element back into tags, one per line.
    pub fn to_html(&self) -> String {
        self.elements
            .iter()
            .map(|e| format!("<style id=\"{}\">\n{}\n</style>", e.id, e.text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn parse_style_tag(tag: &str) -> Option<(&str, &str)> {
    let rest = tag.trim().strip_prefix("<style id=\"")?;
    let (id, rest) = rest.split_once('"')?;
    let rest = rest.trim_start().strip_prefix('>')?;
    let body = rest.strip_suffix("</style>")?;
    let body = body.strip_prefix('\n').unwrap_or(body);
    let body = body.strip_suffix('\n').unwrap_or(body);
    (!id.is_empty()).then_some((id, body))
}

impl StyleSurface for HeadDocument {
    type Node = usize;

    fn find(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    fn create(&mut self, id: &str) -> usize {
        self.elements.push(StyleElement {
            id: id.to_string(),
            text: String::new(),
        });
        self.elements.len() - 1
    }

    fn replace_text(&mut self, node: usize, text: &str) {
        if let Some(element) = self.elements.get_mut(node) {
            element.text = text.to_string();
        }
    }

    fn add_root_class(&mut self, class: &str) {
        if !self.has_root_class(class) {
            self.root_classes.push(class.to_string());
        }
    }
}
