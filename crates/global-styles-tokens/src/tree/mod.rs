//! Style trees and key casing.
//!
//! A [`StyleTree`] is an ordered mapping from keys to [`StyleNode`]s, each
//! either a [`Scalar`] leaf or a nested tree. Trees are read from and
//! written to JSON objects with key order preserved.
//!
//! ```rust
//! use global_styles_tokens::{KeyCase, StyleTree};
//!
//! let tree = StyleTree::from_json_str(r#"{"typography": {"font-size": "16px"}}"#).unwrap();
//! let internal = tree.to_case(KeyCase::Internal);
//! assert!(internal.get_path(&["typography", "fontSize"]).is_some());
//! ```

mod case;
mod node;

pub use case::{normalize, split_words, to_internal_case, to_token_case, KeyCase};
pub use node::{format_number, Scalar, StyleNode, StyleTree};
