//! Packaged default styles.

use std::path::{Path, PathBuf};

use global_styles_tokens::StyleTree;
use tracing::debug;

use crate::error::StylesError;

const BUNDLED: &str = include_str!("../../assets/default-global-styles.json");

/// The lowest-priority layer.
#[derive(Debug, Clone, PartialEq)]
pub struct CoreDefaults {
    tree: StyleTree,
    source_path: Option<PathBuf>,
}

impl CoreDefaults {
    /// The defaults compiled into this crate.
    pub fn bundled() -> Result<Self, StylesError> {
        Self::from_json(BUNDLED)
    }

    /// Loads defaults from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`StylesError::Load`] if the file cannot be read and
    /// [`StylesError::Parse`] if it is not a style tree.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StylesError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| StylesError::load(path, e))?;
        let tree = StyleTree::from_json_str(&content)
            .map_err(|e| StylesError::parse(path.display().to_string(), e))?;
        debug!(path = %path.display(), keys = tree.len(), "core defaults loaded");
        Ok(Self {
            tree,
            source_path: Some(path.to_path_buf()),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, StylesError> {
        let tree = StyleTree::from_json_str(json).map_err(|e| StylesError::parse("core defaults", e))?;
        Ok(Self::from_tree(tree))
    }

    pub fn from_tree(tree: StyleTree) -> Self {
        Self {
            tree,
            source_path: None,
        }
    }

    pub fn tree(&self) -> &StyleTree {
        &self.tree
    }

    /// Returns the source file path, if loaded with [`from_file`](Self::from_file).
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }
}
