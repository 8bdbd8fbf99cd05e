//! Error types for the global styles facade.

use std::io;
use std::path::PathBuf;

use global_styles_tokens::TokenError;

use crate::store::RecordId;

/// Errors raised by a [`RecordStore`](crate::store::RecordStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing medium failed.
    #[error("Failed to access record '{id}': {source}")]
    Io {
        id: RecordId,
        #[source]
        source: io::Error,
    },

    /// The store refused the write.
    #[error("Record '{id}' rejected: {message}")]
    Rejected { id: RecordId, message: String },
}

impl StoreError {
    pub fn io(id: &RecordId, source: io::Error) -> Self {
        Self::Io {
            id: id.clone(),
            source,
        }
    }

    pub fn rejected(id: &RecordId, message: impl Into<String>) -> Self {
        Self::Rejected {
            id: id.clone(),
            message: message.into(),
        }
    }
}

/// Errors returned by the global styles context and its layers.
#[derive(Debug, thiserror::Error)]
pub enum StylesError {
    /// A required resource could not be read.
    #[error("Failed to load {}: {message}", .path.display())]
    Load { path: PathBuf, message: String },

    /// A required resource was read but is not a valid style tree.
    #[error("Failed to parse {what}: {message}")]
    Parse { what: String, message: String },

    /// The token pipeline rejected the merged styles.
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Persisting user styles failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An edit targeted a value that is always computed.
    #[error("'{0}' is derived from the base typography and cannot be set")]
    DerivedField(String),

    /// The configuration file is invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl StylesError {
    pub(crate) fn load(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Load {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub(crate) fn parse(what: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            what: what.into(),
            message: message.to_string(),
        }
    }
}
