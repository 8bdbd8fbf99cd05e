//! Error types for token resolution.
//!
//! [`TokenError`] is the error type for every fallible operation in this
//! crate. Missing layers and missing fields are not errors: they resolve to
//! empty trees or to skipped derived values.

use thiserror::Error;

/// Error returned by the token pipeline.
#[derive(Debug, Error)]
pub enum TokenError {
    /// A base typography value is present but unusable.
    #[error("invalid value '{value}' for '{field}': {reason}")]
    InvalidNumber {
        /// Token-cased field name, e.g. `font-scale`.
        field: &'static str,
        /// The offending value as written in the tree.
        value: String,
        /// What constraint it violates.
        reason: &'static str,
    },

    /// A style tree document could not be parsed.
    #[error("invalid style tree: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed, but its root is not a mapping.
    #[error("style tree root must be an object, found {0}")]
    NotAnObject(&'static str),
}

impl TokenError {
    pub(crate) fn invalid(field: &'static str, value: impl ToString, reason: &'static str) -> Self {
        TokenError::InvalidNumber {
            field,
            value: value.to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_number_display() {
        let err = TokenError::invalid("font-scale", -1.0, "must be greater than zero");
        let msg = err.to_string();
        assert!(msg.contains("font-scale"));
        assert!(msg.contains("-1"));
        assert!(msg.contains("greater than zero"));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: TokenError = json_err.into();
        assert!(matches!(err, TokenError::Json(_)));
    }
}
