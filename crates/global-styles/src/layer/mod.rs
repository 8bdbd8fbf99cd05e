//! The three style layers.
//!
//! Resolution always reads `core`, then `theme`, then `user`:
//!
//! - [`CoreDefaults`]: packaged defaults. Always present; failing to load
//!   them is fatal.
//! - [`ThemeLayer`]: the active theme's `experimental-theme.json`. Its
//!   absence means the theme does not support global styles.
//! - [`UserLayer`]: site-owner edits, persisted through a
//!   [`RecordStore`](crate::store::RecordStore).
//!
//! Layers hand back raw [`StyleTree`](global_styles_tokens::StyleTree)s in
//! whatever casing they were written in. Normalization happens in the
//! pipeline.

mod defaults;
mod theme;
mod user;

pub use defaults::CoreDefaults;
pub use theme::{ThemeLayer, DEFAULT_THEME_FILE};
pub use user::UserLayer;
