//! Key casing and tree normalization.
//!
//! Style trees travel in two casings. Persisted documents and emitted CSS
//! use the token casing (`font-size-heading-1`); in-memory manipulation
//! uses the internal casing (`fontSizeHeading1`). Both are produced from
//! the same word split, so converting a token-cased tree to internal
//! casing and back is lossless.
//!
//! Word boundaries are any non-alphanumeric character, a lowercase letter
//! followed by an uppercase one, a change between letters and digits, and
//! the end of an acronym (`CSSValue` splits as `CSS` + `Value`).
//! Consecutive single-letter words read back as one acronym, so `a-b-c`
//! becomes `aBC` and then `a-bc`.

use super::node::{StyleNode, StyleTree};

/// The key casing conventions used by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCase {
    /// CSS-token casing: `font-size-heading-1`.
    Token,
    /// In-memory casing: `fontSizeHeading1`.
    Internal,
}

impl KeyCase {
    /// Converts a single key to this casing.
    pub fn apply(self, key: &str) -> String {
        match self {
            KeyCase::Token => to_token_case(key),
            KeyCase::Internal => to_internal_case(key),
        }
    }
}

/// Rewrites every key of `tree` with `transform`, recursively.
///
/// Structure, order and leaf values are preserved. Leaves (including
/// lists) are never recursed into. When two keys map to the same
/// transformed key, the later entry wins and keeps the earlier position.
pub fn normalize<F>(tree: &StyleTree, transform: F) -> StyleTree
where
    F: Fn(&str) -> String,
{
    normalize_with(tree, &transform)
}

fn normalize_with<F>(tree: &StyleTree, transform: &F) -> StyleTree
where
    F: Fn(&str) -> String,
{
    let mut out = StyleTree::new();
    for (key, node) in tree.iter() {
        let node = match node {
            StyleNode::Branch(child) => StyleNode::Branch(normalize_with(child, transform)),
            StyleNode::Leaf(scalar) => StyleNode::Leaf(scalar.clone()),
        };
        out.insert(transform(key), node);
    }
    out
}

impl StyleTree {
    /// Returns a copy of this tree with every key converted to `case`.
    pub fn to_case(&self, case: KeyCase) -> StyleTree {
        normalize(self, |key| case.apply(key))
    }
}

/// Splits a key into lowercase-insensitive words.
pub fn split_words(key: &str) -> Vec<&str> {
    let mut words = Vec::new();
    for chunk in key.split(|c: char| !c.is_alphanumeric()) {
        if chunk.is_empty() {
            continue;
        }
        let chars: Vec<(usize, char)> = chunk.char_indices().collect();
        let mut start = 0;
        for i in 1..chars.len() {
            let (idx, cur) = chars[i];
            let prev = chars[i - 1].1;
            let next = chars.get(i + 1).map(|(_, c)| *c);
            let boundary = (prev.is_lowercase() && cur.is_uppercase())
                || (prev.is_alphabetic() && cur.is_numeric())
                || (prev.is_numeric() && cur.is_alphabetic())
                || (prev.is_uppercase()
                    && cur.is_uppercase()
                    && next.is_some_and(|n| n.is_lowercase()));
            if boundary {
                words.push(&chunk[start..idx]);
                start = idx;
            }
        }
        words.push(&chunk[start..]);
    }
    words
}

/// Converts a key to token casing: lowercase words joined by `-`.
pub fn to_token_case(key: &str) -> String {
    split_words(key)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Converts a key to internal casing: lower camel case.
pub fn to_internal_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for (i, word) in split_words(key).iter().enumerate() {
        let lower = word.to_lowercase();
        if i == 0 {
            out.push_str(&lower);
            continue;
        }
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("font-size"), ["font", "size"]);
        assert_eq!(split_words("fontSizeHeading1"), ["font", "Size", "Heading", "1"]);
        assert_eq!(split_words("CSSValue"), ["CSS", "Value"]);
        assert_eq!(split_words("__line_height__"), ["line", "height"]);
        assert!(split_words("--").is_empty());
    }

    #[test]
    fn test_to_token_case() {
        assert_eq!(to_token_case("fontSizeHeading1"), "font-size-heading-1");
        assert_eq!(to_token_case("lineHeight"), "line-height");
        assert_eq!(to_token_case("font_weight"), "font-weight");
        assert_eq!(to_token_case("text"), "text");
    }

    #[test]
    fn test_to_internal_case() {
        assert_eq!(to_internal_case("font-size-heading-1"), "fontSizeHeading1");
        assert_eq!(to_internal_case("line-height"), "lineHeight");
        assert_eq!(to_internal_case("FontScale"), "fontScale");
        assert_eq!(to_internal_case("background"), "background");
    }

    #[test]
    fn test_normalize_nested_tree() {
        let tree = StyleTree::from_value(json!({
            "color": {"text": "#000"},
            "typography": {"font-size": "16px", "line-height": 1.5}
        }))
        .unwrap();

        let internal = tree.to_case(KeyCase::Internal);
        assert_eq!(
            internal.to_json(),
            json!({
                "color": {"text": "#000"},
                "typography": {"fontSize": "16px", "lineHeight": 1.5}
            })
        );
        assert_eq!(internal.to_case(KeyCase::Token), tree);
    }

    #[test]
    fn test_normalize_does_not_touch_list_contents() {
        let tree = StyleTree::from_value(json!({"font-family": [{"font-name": "Inter"}]})).unwrap();
        let internal = tree.to_case(KeyCase::Internal);
        assert_eq!(internal.to_json(), json!({"fontFamily": [{"font-name": "Inter"}]}));
    }

    #[test]
    fn test_normalize_collapsing_keys_last_wins() {
        let tree = StyleTree::from_value(json!({"fontSize": "14px", "font-size": "16px"})).unwrap();
        let internal = tree.to_case(KeyCase::Internal);
        assert_eq!(internal.len(), 1);
        assert_eq!(internal.to_json(), json!({"fontSize": "16px"}));
    }

    #[test]
    fn test_normalize_with_custom_transform() {
        let tree = StyleTree::new().with("a", 1i64).with("b", StyleTree::new().with("c", 2i64));
        let upper = normalize(&tree, |k| k.to_uppercase());
        assert_eq!(upper.to_json(), json!({"A": 1, "B": {"C": 2}}));
    }
}
