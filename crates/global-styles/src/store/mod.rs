//! Persistence for the user layer.
//!
//! The user layer lives in a single record per theme, addressed by a
//! [`RecordId`]. A [`RecordStore`] is an opaque key-value service: it
//! returns the record's raw text and replaces it wholesale. Parsing and
//! casing are the caller's concern.
//!
//! Two stores are provided:
//!
//! - [`MemoryStore`]: records in a map, for tests and embedding.
//! - [`FileStore`]: one `<id>.json` file per record in a directory.
//!
//! Writes are last-write-wins; there is no versioning or retry.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Record name prefix for per-theme user styles.
pub const RECORD_PREFIX: &str = "wp-global-styles-";

/// Identifier of a persisted user-styles record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The record holding user styles for the theme with `text_domain`.
    ///
    /// ```rust
    /// use global_styles::RecordId;
    ///
    /// assert_eq!(RecordId::for_theme("TwentyTwentyOne").as_str(), "wp-global-styles-twentytwentyone");
    /// ```
    pub fn for_theme(text_domain: &str) -> Self {
        Self(format!("{}{}", RECORD_PREFIX, text_domain.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key-value storage for user style records.
pub trait RecordStore {
    /// Returns the record content, or `None` if it does not exist.
    fn get(&self, id: &RecordId) -> Result<Option<String>, StoreError>;

    /// Creates or replaces the record content.
    fn replace(&self, id: &RecordId, content: &str) -> Result<(), StoreError>;
}

impl<T: RecordStore + ?Sized> RecordStore for &T {
    fn get(&self, id: &RecordId) -> Result<Option<String>, StoreError> {
        (**self).get(id)
    }

    fn replace(&self, id: &RecordId, content: &str) -> Result<(), StoreError> {
        (**self).replace(id, content)
    }
}

impl<T: RecordStore + ?Sized> RecordStore for Box<T> {
    fn get(&self, id: &RecordId) -> Result<Option<String>, StoreError> {
        (**self).get(id)
    }

    fn replace(&self, id: &RecordId, content: &str) -> Result<(), StoreError> {
        (**self).replace(id, content)
    }
}

impl<T: RecordStore + ?Sized> RecordStore for std::sync::Arc<T> {
    fn get(&self, id: &RecordId) -> Result<Option<String>, StoreError> {
        (**self).get(id)
    }

    fn replace(&self, id: &RecordId, content: &str) -> Result<(), StoreError> {
        (**self).replace(id, content)
    }
}
