//! # Global Styles Tokens - Layered Style Resolution
//!
//! `global-styles-tokens` turns layered style trees into CSS custom
//! properties. It is the pure core of the `global-styles` crate: no I/O,
//! no shared state, the same inputs always give byte-identical output.
//!
//! ## Pipeline
//!
//! 1. **Normalize** ([`normalize`], [`StyleTree::to_case`]): rewrite keys to
//!    one casing so layers written as `font-size` and `fontSize` line up.
//! 2. **Merge** ([`merge`]): deep-merge `core`, `theme` and `user`, the
//!    user layer winning.
//! 3. **Derive** ([`derive`]): compute heading sizes, heading line height
//!    and heading weight from the merged base typography.
//! 4. **Serialize** ([`serialize`]): flatten into `--wp--domain--field`
//!    declarations under a single `:root` rule.
//!
//! [`resolve`] runs all four.
//!
//! ## Quick Start
//!
//! ```rust
//! use global_styles_tokens::{resolve, CssVarOptions, StyleTree};
//!
//! let core = StyleTree::from_json_str(r#"{
//!     "color": {"text": "black"},
//!     "typography": {"font-size": "16px", "font-scale": 1.2, "line-height": 1.5, "font-weight": 400}
//! }"#).unwrap();
//! let user = StyleTree::from_json_str(r#"{"typography": {"font-size": "20px"}}"#).unwrap();
//!
//! let resolved = resolve(&core, None, Some(&user), &CssVarOptions::default()).unwrap();
//! assert_eq!(resolved.stylesheet.get("--wp--typography--font-size"), Some("20px"));
//! assert_eq!(resolved.stylesheet.get("--wp--typography--font-size-heading-1"), Some("49.77px"));
//! ```
//!
//! ## Derived Fields
//!
//! Heading tokens are always recomputed. A value for `font-size-heading-1`
//! supplied by any layer is replaced, never emitted.

pub mod css;
pub mod derive;
mod error;
pub mod merge;
mod resolve;
pub mod schema;
pub mod tree;

pub use error::TokenError;

pub use css::{flatten, serialize, CssVarOptions, Declaration, Stylesheet};
pub use derive::{derive, DerivedTypography};
pub use merge::{merge, merge_layers};
pub use resolve::{resolve, resolve_tree, Resolved};
pub use schema::{is_derived_field, ColorTokens, TypographyTokens};
pub use tree::{normalize, KeyCase, Scalar, StyleNode, StyleTree};
