//! # Global Styles - Theme-Wide Design Tokens
//!
//! `global-styles` resolves a site's design tokens from three layers
//! (packaged core defaults, the active theme and the site owner's edits)
//! and delivers them as CSS custom properties, either once per page or
//! continuously into a live editor.
//!
//! The pure pipeline lives in [`global_styles_tokens`] and is re-exported
//! here. This crate adds the layer sources, persistence and sinks around it.
//!
//! ## Quick Start
//!
//! ```rust
//! use global_styles::{GlobalStyles, GlobalStylesConfig, MemoryStore};
//!
//! let styles = GlobalStyles::from_config(GlobalStylesConfig::default(), None, MemoryStore::new()).unwrap();
//! styles.user().set_field("color", "text", "tomato").unwrap();
//!
//! let resolved = styles.resolve().unwrap();
//! assert_eq!(resolved.stylesheet.get("--wp--color--text"), Some("tomato"));
//! assert_eq!(resolved.stylesheet.get("--wp--typography--font-size-heading-1"), Some("39.81px"));
//! ```
//!
//! ## Layers
//!
//! | Layer | Source | When absent |
//! |-------|--------|-------------|
//! | core | [`CoreDefaults`] | initialisation fails |
//! | theme | [`ThemeLayer`] | no theme support, nothing rendered once |
//! | user | [`UserLayer`] over a [`RecordStore`] | empty |
//!
//! ## Sinks
//!
//! [`OneShotSink`] renders text for a response. [`LiveSink`] keeps a
//! [`StyleSurface`] updated; [`Session`] drives it from user edits.

mod config;
mod context;
mod error;
pub mod layer;
mod session;
pub mod sink;
pub mod store;

pub use global_styles_tokens as tokens;
pub use global_styles_tokens::{
    resolve, ColorTokens, CssVarOptions, KeyCase, Resolved, Scalar, StyleNode, StyleTree,
    Stylesheet, TokenError, TypographyTokens,
};

pub use config::{GlobalStylesConfig, DEFAULT_TEXT_DOMAIN};
pub use context::{EditorSettings, GlobalStyles};
pub use error::{StoreError, StylesError};
pub use layer::{CoreDefaults, ThemeLayer, UserLayer, DEFAULT_THEME_FILE};
pub use session::Session;
pub use sink::{
    HeadDocument, LiveSink, OneShotSink, StyleSurface, DEFAULT_EDITOR_RULE, DEFAULT_NODE_ID, WRAPPER_CLASS,
};
pub use store::{FileStore, MemoryStore, RecordId, RecordStore};
