//! The full resolution pass.
//!
//! `resolve` is a pure function of its three layers: each layer is
//! normalized to internal casing, the layers are merged, derived
//! typography is computed and written, and the result is converted back to
//! token casing and serialized. Callers decide when to run it and where
//! the output goes.

use crate::css::{serialize, CssVarOptions, Stylesheet};
use crate::derive::derive;
use crate::error::TokenError;
use crate::merge::merge_layers;
use crate::schema::{ColorTokens, TypographyTokens};
use crate::tree::{KeyCase, StyleTree};

/// Output of a resolution pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    /// The merged and derived tree, token-cased.
    pub tree: StyleTree,
    /// The serialized custom properties.
    pub stylesheet: Stylesheet,
}

impl Resolved {
    pub fn colors(&self) -> ColorTokens {
        ColorTokens::from_tree(&self.tree, KeyCase::Token)
    }

    pub fn typography(&self) -> Result<TypographyTokens, TokenError> {
        TypographyTokens::from_tree(&self.tree, KeyCase::Token)
    }

    pub fn css(&self) -> String {
        self.stylesheet.to_css()
    }
}

/// Merges the layers and derives computed tokens, without serializing.
///
/// The returned tree is token-cased.
pub fn resolve_tree(
    core: &StyleTree,
    theme: Option<&StyleTree>,
    user: Option<&StyleTree>,
) -> Result<StyleTree, TokenError> {
    let layers: Vec<StyleTree> = [Some(core), theme, user]
        .into_iter()
        .flatten()
        .map(|layer| layer.to_case(KeyCase::Internal))
        .collect();
    let mut merged = merge_layers(layers.iter());

    let base = TypographyTokens::from_tree(&merged, KeyCase::Internal)?;
    derive(&base)?.apply(&mut merged, KeyCase::Internal);

    Ok(merged.to_case(KeyCase::Token))
}

/// Runs the whole pipeline over the three layers.
pub fn resolve(
    core: &StyleTree,
    theme: Option<&StyleTree>,
    user: Option<&StyleTree>,
    options: &CssVarOptions,
) -> Result<Resolved, TokenError> {
    let tree = resolve_tree(core, theme, user)?;
    let stylesheet = serialize(&tree, options);
    Ok(Resolved { tree, stylesheet })
}
