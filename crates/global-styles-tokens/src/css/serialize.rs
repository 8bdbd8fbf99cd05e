//! Flattening style trees into CSS custom properties.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::value::{escape_name, is_safe_value};
use crate::tree::{StyleNode, StyleTree};

pub const DEFAULT_PREFIX: &str = "wp";
pub const DEFAULT_TOKEN: &str = "--";
pub const DEFAULT_SELECTOR: &str = ":root";

/// Naming options for emitted custom properties.
///
/// A leaf at `color.text` becomes `--{prefix}{token}color{token}text`,
/// i.e. `--wp--color--text` with the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CssVarOptions {
    pub prefix: String,
    pub token: String,
    pub selector: String,
}

impl Default for CssVarOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            token: DEFAULT_TOKEN.to_string(),
            selector: DEFAULT_SELECTOR.to_string(),
        }
    }
}

impl CssVarOptions {
    /// Builds the custom property name for a path of keys.
    pub fn property_name<S: AsRef<str>>(&self, path: &[S]) -> String {
        let mut name = String::from("--");
        if !self.prefix.is_empty() {
            name.push_str(&self.prefix);
            name.push_str(&self.token);
        }
        let segments: Vec<String> = path
            .iter()
            .map(|segment| segment.as_ref().replace('/', "-"))
            .collect();
        name.push_str(&segments.join(&self.token));
        escape_name(&name)
    }
}

/// One custom property declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub value: String,
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.name, self.value)
    }
}

/// A single rule holding the flattened declarations.
///
/// Renders as:
///
/// ```text
/// :root {
///     --wp--color--text: black;
/// }
/// ```
///
/// with one tab of indentation per declaration. An empty stylesheet
/// renders as `:root {\n}` and reports [`is_empty`](Stylesheet::is_empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    selector: String,
    declarations: Vec<Declaration>,
}

impl Stylesheet {
    pub fn new(selector: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            selector: selector.into(),
            declarations,
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Looks up a declaration value by property name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.value.as_str())
    }

    /// True when there is nothing to apply.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selector)?;
        for declaration in &self.declarations {
            writeln!(f, "\t{}", declaration)?;
        }
        write!(f, "}}")
    }
}

/// Flattens `tree` depth-first into declarations, in tree order.
///
/// Null and blank leaves are skipped. Values that could escape the
/// declaration are dropped with a warning.
pub fn flatten(tree: &StyleTree, options: &CssVarOptions) -> Vec<Declaration> {
    let mut out = Vec::new();
    let mut path = Vec::new();
    flatten_into(tree, options, &mut path, &mut out);
    out
}

fn flatten_into<'a>(
    tree: &'a StyleTree,
    options: &CssVarOptions,
    path: &mut Vec<&'a str>,
    out: &mut Vec<Declaration>,
) {
    for (key, node) in tree.iter() {
        path.push(key);
        match node {
            StyleNode::Branch(child) => flatten_into(child, options, path, out),
            StyleNode::Leaf(scalar) if scalar.is_blank() => {}
            StyleNode::Leaf(scalar) => {
                let name = options.property_name(path.as_slice());
                let value = scalar.to_string();
                if is_safe_value(&value) {
                    out.push(Declaration { name, value });
                } else {
                    warn!(property = %name, value = %value, "dropping unsafe custom property value");
                }
            }
        }
        path.pop();
    }
}

/// Serializes `tree` into a single-rule stylesheet.
pub fn serialize(tree: &StyleTree, options: &CssVarOptions) -> Stylesheet {
    Stylesheet::new(options.selector.clone(), flatten(tree, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree(value: serde_json::Value) -> StyleTree {
        StyleTree::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_tree() {
        let sheet = serialize(&StyleTree::new(), &CssVarOptions::default());
        assert!(sheet.is_empty());
        assert_eq!(sheet.to_css(), ":root {\n}");
    }

    #[test]
    fn test_nested_names_and_order() {
        let sheet = serialize(
            &tree(json!({
                "typography": {"font-size": "16px", "line-height": 1.5},
                "color": {"text": "black", "background": "white"}
            })),
            &CssVarOptions::default(),
        );
        assert_eq!(
            sheet.to_css(),
            ":root {\n\
             \t--wp--typography--font-size: 16px;\n\
             \t--wp--typography--line-height: 1.5;\n\
             \t--wp--color--text: black;\n\
             \t--wp--color--background: white;\n\
             }"
        );
    }

    #[test]
    fn test_custom_prefix_and_token() {
        let options = CssVarOptions {
            prefix: "theme".into(),
            token: "_".into(),
            selector: ".editor".into(),
        };
        let sheet = serialize(&tree(json!({"color": {"text": "red"}})), &options);
        assert_eq!(sheet.to_css(), ".editor {\n\t--theme_color_text: red;\n}");
    }

    #[test]
    fn test_empty_prefix() {
        let options = CssVarOptions {
            prefix: String::new(),
            ..CssVarOptions::default()
        };
        assert_eq!(options.property_name(&["color", "text"]), "--color--text");
    }

    #[test]
    fn test_slash_in_keys() {
        let options = CssVarOptions::default();
        assert_eq!(options.property_name(&["core/heading", "size"]), "--wp--core-heading--size");
    }

    #[test]
    fn test_skips_blank_and_unsafe() {
        let sheet = serialize(
            &tree(json!({"color": {"text": null, "background": "", "primary": "red; x: y", "link": "blue"}})),
            &CssVarOptions::default(),
        );
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.get("--wp--color--link"), Some("blue"));
    }

    #[test]
    fn test_zero_is_emitted() {
        let sheet = serialize(&tree(json!({"spacing": {"gap": 0}})), &CssVarOptions::default());
        assert_eq!(sheet.get("--wp--spacing--gap"), Some("0"));
    }
}
