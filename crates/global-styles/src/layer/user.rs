//! Site-owner edits, persisted in a record store.

use global_styles_tokens::derive::derive;
use global_styles_tokens::schema::{COLOR, TYPOGRAPHY};
use global_styles_tokens::{
    is_derived_field, ColorTokens, KeyCase, Scalar, StyleNode, StyleTree, TokenError,
    TypographyTokens,
};
use tracing::{debug, warn};

use crate::error::StylesError;
use crate::store::{RecordId, RecordStore};

/// Content of a freshly created user record.
pub const EMPTY_RECORD: &str = "{}";

/// The highest-priority layer.
///
/// The record is read on every [`load`](Self::load), so edits made by
/// other sessions are picked up on the next resolution. Writes replace
/// the whole record; concurrent writers resolve as last write wins.
#[derive(Debug)]
pub struct UserLayer<S> {
    store: S,
    id: RecordId,
}

impl<S: RecordStore> UserLayer<S> {
    pub fn new(store: S, id: RecordId) -> Self {
        Self { store, id }
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reads the user tree.
    ///
    /// A missing record is an empty tree. A record that is not a valid
    /// style tree is logged and also treated as empty. A record whose
    /// typography could never resolve, such as a font size of `large`, is
    /// logged and loses its typography domain; the rest is kept.
    ///
    /// # Errors
    ///
    /// Returns [`StylesError::Store`] if the store cannot be read.
    pub fn load(&self) -> Result<StyleTree, StylesError> {
        let Some(content) = self.store.get(&self.id)? else {
            debug!(record = %self.id, "no user styles record");
            return Ok(StyleTree::new());
        };
        let mut tree = match StyleTree::from_json_str(&content) {
            Ok(tree) => tree,
            Err(e) => {
                warn!(record = %self.id, error = %e, "malformed user styles record, ignoring it");
                return Ok(StyleTree::new());
            }
        };
        if let Err(e) = check_typography(&tree) {
            warn!(record = %self.id, error = %e, "invalid typography in user styles record, ignoring it");
            let keys: Vec<String> = tree
                .keys()
                .filter(|key| KeyCase::Token.apply(key) == TYPOGRAPHY)
                .cloned()
                .collect();
            for key in keys {
                tree.remove(&key);
            }
        }
        Ok(tree)
    }

    /// Creates the record with empty content if it does not exist yet.
    pub fn ensure_record(&self) -> Result<&RecordId, StylesError> {
        if self.store.get(&self.id)?.is_none() {
            self.store.replace(&self.id, EMPTY_RECORD)?;
            debug!(record = %self.id, "user styles record created");
        }
        Ok(&self.id)
    }

    /// Replaces the record with `tree`, written in token casing.
    pub fn save(&self, tree: &StyleTree) -> Result<(), StylesError> {
        let content = tree.to_case(KeyCase::Token).to_json_string();
        self.store.replace(&self.id, &content)?;
        Ok(())
    }

    /// Merges color edits over the stored user tree and saves it.
    ///
    /// Returns the saved tree.
    pub fn set_color(&self, colors: &ColorTokens) -> Result<StyleTree, StylesError> {
        self.patch(COLOR, colors.to_tree(KeyCase::Internal))
    }

    /// Merges typography edits over the stored user tree and saves it.
    ///
    /// # Errors
    ///
    /// Returns [`StylesError::Token`] if a value could never resolve, such
    /// as a font scale of zero. Nothing is written in that case.
    pub fn set_typography(&self, typography: &TypographyTokens) -> Result<StyleTree, StylesError> {
        self.patch(TYPOGRAPHY, typography.to_tree(KeyCase::Internal))
    }

    /// Sets one field of one domain.
    ///
    /// # Errors
    ///
    /// Returns [`StylesError::DerivedField`] for typography fields that are
    /// always computed, such as `font-size-heading-1`, and
    /// [`StylesError::Token`] for typography values that could never
    /// resolve. Nothing is written in either case.
    pub fn set_field(
        &self,
        domain: &str,
        field: &str,
        value: impl Into<Scalar>,
    ) -> Result<StyleTree, StylesError> {
        if KeyCase::Token.apply(domain) == TYPOGRAPHY && is_derived_field(field) {
            return Err(StylesError::DerivedField(KeyCase::Token.apply(field)));
        }
        let patch = StyleTree::new().with(KeyCase::Internal.apply(field), StyleNode::Leaf(value.into()));
        self.patch(domain, patch)
    }

    fn patch(&self, domain: &str, fields: StyleTree) -> Result<StyleTree, StylesError> {
        let domain = KeyCase::Internal.apply(domain);
        let patch = StyleTree::new().with(domain.as_str(), fields);

        let updated = self.load()?.to_case(KeyCase::Internal).merged_with(&patch);
        check_typography(&updated)?;
        self.save(&updated)?;
        debug!(record = %self.id, domain = %domain, "user styles updated");
        Ok(updated.to_case(KeyCase::Token))
    }
}

/// Fails if the typography of `tree` could never resolve.
fn check_typography(tree: &StyleTree) -> Result<(), TokenError> {
    let internal = tree.to_case(KeyCase::Internal);
    derive(&TypographyTokens::from_tree(&internal, KeyCase::Internal)?)?;
    Ok(())
}
