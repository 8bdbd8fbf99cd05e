//! Style tree node types.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::TokenError;

/// A leaf value in a style tree.
///
/// Lists are kept as opaque JSON values: nothing in the pipeline looks
/// inside them.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Number(f64),
    Bool(bool),
    List(Vec<Value>),
    Null,
}

impl Scalar {
    /// Returns the text content, if this is a text scalar.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric content, if this is a number scalar.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// True for values that carry nothing worth emitting.
    pub fn is_blank(&self) -> bool {
        match self {
            Scalar::Null => true,
            Scalar::Text(s) => s.trim().is_empty(),
            Scalar::List(items) => items.is_empty(),
            _ => false,
        }
    }

    fn to_json(&self) -> Value {
        match self {
            Scalar::Text(s) => Value::String(s.clone()),
            Scalar::Number(n) => number_to_json(*n),
            Scalar::Bool(b) => Value::Bool(*b),
            Scalar::List(items) => Value::Array(items.clone()),
            Scalar::Null => Value::Null,
        }
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => f.write_str(&format_number(*n)),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::List(items) => {
                let parts: Vec<String> = items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect();
                f.write_str(&parts.join(", "))
            }
            Scalar::Null => Ok(()),
        }
    }
}

/// Formats a number without a trailing `.0` for integral values.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 9.0e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

fn number_to_json(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < 9.0e15 {
        Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(n)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(n as f64)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

/// A node in a style tree: either a leaf value or a nested tree.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleNode {
    Leaf(Scalar),
    Branch(StyleTree),
}

impl StyleNode {
    pub fn as_branch(&self) -> Option<&StyleTree> {
        match self {
            StyleNode::Branch(tree) => Some(tree),
            StyleNode::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&Scalar> {
        match self {
            StyleNode::Leaf(scalar) => Some(scalar),
            StyleNode::Branch(_) => None,
        }
    }

    fn from_json(value: Value) -> Self {
        match value {
            Value::Object(map) => StyleNode::Branch(StyleTree::from_map(map)),
            Value::String(s) => StyleNode::Leaf(Scalar::Text(s)),
            Value::Number(n) => StyleNode::Leaf(n.as_f64().map(Scalar::Number).unwrap_or(Scalar::Null)),
            Value::Bool(b) => StyleNode::Leaf(Scalar::Bool(b)),
            Value::Array(items) => StyleNode::Leaf(Scalar::List(items)),
            Value::Null => StyleNode::Leaf(Scalar::Null),
        }
    }

    fn to_json(&self) -> Value {
        match self {
            StyleNode::Leaf(scalar) => scalar.to_json(),
            StyleNode::Branch(tree) => tree.to_json(),
        }
    }
}

impl From<Scalar> for StyleNode {
    fn from(scalar: Scalar) -> Self {
        StyleNode::Leaf(scalar)
    }
}

macro_rules! leaf_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for StyleNode {
                fn from(value: $ty) -> Self {
                    StyleNode::Leaf(Scalar::from(value))
                }
            }
        )*
    };
}

leaf_from!(&str, String, f64, i64, bool);

impl From<StyleTree> for StyleNode {
    fn from(tree: StyleTree) -> Self {
        StyleNode::Branch(tree)
    }
}

/// An insertion-ordered mapping from keys to style nodes.
///
/// Iteration order is the order keys were first inserted; replacing the
/// value of an existing key keeps its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleTree {
    entries: IndexMap<String, StyleNode>,
}

impl StyleTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a tree from a JSON document whose root is an object.
    pub fn from_json_str(json: &str) -> Result<Self, TokenError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Converts a JSON value whose root is an object.
    pub fn from_value(value: Value) -> Result<Self, TokenError> {
        match value {
            Value::Object(map) => Ok(Self::from_map(map)),
            Value::Null => Err(TokenError::NotAnObject("null")),
            Value::Bool(_) => Err(TokenError::NotAnObject("a boolean")),
            Value::Number(_) => Err(TokenError::NotAnObject("a number")),
            Value::String(_) => Err(TokenError::NotAnObject("a string")),
            Value::Array(_) => Err(TokenError::NotAnObject("an array")),
        }
    }

    fn from_map(map: Map<String, Value>) -> Self {
        map.into_iter()
            .map(|(key, value)| (key, StyleNode::from_json(value)))
            .collect()
    }

    /// Converts the tree back into a JSON object value.
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(key, node)| (key.clone(), node.to_json()))
            .collect();
        Value::Object(map)
    }

    /// Serializes the tree as compact JSON.
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&StyleNode> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the leaf stored under `key`, if it is a leaf.
    pub fn leaf(&self, key: &str) -> Option<&Scalar> {
        self.get(key).and_then(StyleNode::as_leaf)
    }

    /// Returns the subtree stored under `key`, if it is a branch.
    pub fn branch(&self, key: &str) -> Option<&StyleTree> {
        self.get(key).and_then(StyleNode::as_branch)
    }

    /// Returns the subtree under `key`, creating it (or replacing a leaf)
    /// when needed.
    pub fn branch_mut(&mut self, key: &str) -> &mut StyleTree {
        let node = self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| StyleNode::Branch(StyleTree::new()));
        if !matches!(node, StyleNode::Branch(_)) {
            *node = StyleNode::Branch(StyleTree::new());
        }
        match node {
            StyleNode::Branch(tree) => tree,
            StyleNode::Leaf(_) => unreachable!("node was just made a branch"),
        }
    }

    /// Follows a path of keys through nested branches.
    pub fn get_path(&self, path: &[&str]) -> Option<&StyleNode> {
        let (last, parents) = path.split_last()?;
        let mut current = self;
        for key in parents {
            current = current.branch(key)?;
        }
        current.get(last)
    }

    /// Inserts a node, returning the previous one. Existing keys keep
    /// their position.
    pub fn insert(&mut self, key: impl Into<String>, node: impl Into<StyleNode>) -> Option<StyleNode> {
        self.entries.insert(key.into(), node.into())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, node: impl Into<StyleNode>) -> Self {
        self.insert(key, node);
        self
    }

    /// Removes a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<StyleNode> {
        self.entries.shift_remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &StyleNode)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }
}

impl FromIterator<(String, StyleNode)> for StyleTree {
    fn from_iter<I: IntoIterator<Item = (String, StyleNode)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for StyleTree {
    type Item = (String, StyleNode);
    type IntoIter = indexmap::map::IntoIter<String, StyleNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for StyleTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for StyleTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        StyleTree::from_value(value).map_err(serde::de::Error::custom)
    }
}
