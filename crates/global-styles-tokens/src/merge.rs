//! Layered deep merge.
//!
//! Layers are applied lowest priority first. For a key present in several
//! layers, two branches merge recursively; in every other combination the
//! higher-priority node replaces the lower one outright. Scalars are never
//! merged partially, so a user-supplied list replaces a theme list whole.
//!
//! Keys keep the position at which they first appeared; keys introduced by
//! a higher layer are appended after the existing ones.

use crate::tree::{StyleNode, StyleTree};

/// Merges the three layers with priority `user > theme > core`.
///
/// Absent layers contribute nothing.
pub fn merge(core: &StyleTree, theme: Option<&StyleTree>, user: Option<&StyleTree>) -> StyleTree {
    merge_layers([Some(core), theme, user].into_iter().flatten())
}

/// Merges any number of layers, later layers taking priority.
pub fn merge_layers<'a, I>(layers: I) -> StyleTree
where
    I: IntoIterator<Item = &'a StyleTree>,
{
    let mut merged = StyleTree::new();
    for layer in layers {
        merged.merge_from(layer);
    }
    merged
}

impl StyleTree {
    /// Deep-merges `other` into `self`, `other` taking priority.
    pub fn merge_from(&mut self, other: &StyleTree) {
        for (key, incoming) in other.iter() {
            match incoming {
                StyleNode::Branch(incoming_tree) => {
                    let both_branches = matches!(self.get(key), Some(StyleNode::Branch(_)));
                    if both_branches {
                        self.branch_mut(key).merge_from(incoming_tree);
                    } else {
                        self.insert(key.clone(), StyleNode::Branch(incoming_tree.clone()));
                    }
                }
                StyleNode::Leaf(scalar) => {
                    self.insert(key.clone(), StyleNode::Leaf(scalar.clone()));
                }
            }
        }
    }

    /// Returns `self` deep-merged with `other`, `other` taking priority.
    pub fn merged_with(mut self, other: &StyleTree) -> StyleTree {
        self.merge_from(other);
        self
    }
}
