//! CSS custom property generation.
//!
//! [`serialize`] walks a resolved tree and emits one custom property per
//! leaf, in tree order. Order matters: consumers may rely on later
//! declarations overriding earlier ones in the same rule.

mod serialize;
mod value;

pub use serialize::{
    flatten, serialize, CssVarOptions, Declaration, Stylesheet, DEFAULT_PREFIX, DEFAULT_SELECTOR,
    DEFAULT_TOKEN,
};
pub use value::{escape_name, is_safe_value};
