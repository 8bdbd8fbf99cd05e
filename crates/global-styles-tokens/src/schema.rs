//! Typed views over the known style domains.
//!
//! Two domains have a fixed schema: `color` and `typography`. Everything
//! else in a style tree passes through the pipeline untouched. Field
//! names here are token-cased; pass the casing of the tree being read so
//! the lookup matches.

use crate::error::TokenError;
use crate::tree::{format_number, KeyCase, Scalar, StyleTree};

pub const COLOR: &str = "color";
pub const TYPOGRAPHY: &str = "typography";

pub const TEXT: &str = "text";
pub const BACKGROUND: &str = "background";
pub const PRIMARY: &str = "primary";

pub const FONT_SIZE: &str = "font-size";
pub const FONT_SCALE: &str = "font-scale";
pub const LINE_HEIGHT: &str = "line-height";
pub const FONT_WEIGHT: &str = "font-weight";

pub const LINE_HEIGHT_HEADING: &str = "line-height-heading";
pub const FONT_WEIGHT_HEADING: &str = "font-weight-heading";
pub const FONT_SIZE_HEADINGS: [&str; 6] = [
    "font-size-heading-1",
    "font-size-heading-2",
    "font-size-heading-3",
    "font-size-heading-4",
    "font-size-heading-5",
    "font-size-heading-6",
];

/// Returns true if `key` (in either casing) names a derived typography field.
pub fn is_derived_field(key: &str) -> bool {
    let key = KeyCase::Token.apply(key);
    key == LINE_HEIGHT_HEADING || key == FONT_WEIGHT_HEADING || FONT_SIZE_HEADINGS.contains(&key.as_str())
}

/// Parses a pixel length: `16`, `16.5`, `"16px"` or `" 16 px "`.
///
/// A value never gains a second unit: the number is extracted once and
/// re-suffixed by [`px`].
pub fn parse_px(scalar: &Scalar) -> Option<f64> {
    let n = match scalar {
        Scalar::Number(n) => *n,
        Scalar::Text(s) => {
            let s = s.trim();
            let s = s.strip_suffix("px").unwrap_or(s).trim();
            s.parse::<f64>().ok()?
        }
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Parses a unitless number, accepting numeric strings.
pub fn parse_number(scalar: &Scalar) -> Option<f64> {
    let n = match scalar {
        Scalar::Number(n) => *n,
        Scalar::Text(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Formats a pixel length as text, e.g. `39.81px`.
pub fn px(n: f64) -> String {
    format!("{}px", format_number(n))
}

/// The `color` domain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorTokens {
    pub text: Option<String>,
    pub background: Option<String>,
    pub primary: Option<String>,
}

impl ColorTokens {
    /// Reads the `color` domain of `tree`. Missing or non-text values are `None`.
    pub fn from_tree(tree: &StyleTree, case: KeyCase) -> Self {
        let Some(color) = tree.branch(&case.apply(COLOR)) else {
            return Self::default();
        };
        let read = |field: &str| {
            color
                .leaf(&case.apply(field))
                .filter(|s| !s.is_blank())
                .map(|s| s.to_string())
        };
        Self {
            text: read(TEXT),
            background: read(BACKGROUND),
            primary: read(PRIMARY),
        }
    }

    /// Builds a `color` domain subtree holding the fields that are set.
    pub fn to_tree(&self, case: KeyCase) -> StyleTree {
        let mut tree = StyleTree::new();
        for (field, value) in [
            (TEXT, &self.text),
            (BACKGROUND, &self.background),
            (PRIMARY, &self.primary),
        ] {
            if let Some(value) = value {
                tree.insert(case.apply(field), value.as_str());
            }
        }
        tree
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.background.is_none() && self.primary.is_none()
    }
}

/// The base fields of the `typography` domain.
///
/// `font_size` is in pixels; the other fields are unitless.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TypographyTokens {
    pub font_size: Option<f64>,
    pub font_scale: Option<f64>,
    pub line_height: Option<f64>,
    pub font_weight: Option<f64>,
}

impl TypographyTokens {
    /// Reads the base typography fields of `tree`.
    ///
    /// Missing fields are `None`. A field that is present but not numeric
    /// is an error.
    pub fn from_tree(tree: &StyleTree, case: KeyCase) -> Result<Self, TokenError> {
        let Some(typography) = tree.branch(&case.apply(TYPOGRAPHY)) else {
            return Ok(Self::default());
        };

        let read = |field: &'static str, parse: fn(&Scalar) -> Option<f64>| {
            match typography.leaf(&case.apply(field)) {
                None => Ok(None),
                Some(scalar) if scalar.is_blank() => Ok(None),
                Some(scalar) => parse(scalar)
                    .map(Some)
                    .ok_or_else(|| TokenError::invalid(field, scalar, "not a number")),
            }
        };

        Ok(Self {
            font_size: read(FONT_SIZE, parse_px)?,
            font_scale: read(FONT_SCALE, parse_number)?,
            line_height: read(LINE_HEIGHT, parse_number)?,
            font_weight: read(FONT_WEIGHT, parse_number)?,
        })
    }

    /// Builds a `typography` subtree holding the fields that are set.
    /// The font size is written with its `px` unit.
    pub fn to_tree(&self, case: KeyCase) -> StyleTree {
        let mut tree = StyleTree::new();
        if let Some(size) = self.font_size {
            tree.insert(case.apply(FONT_SIZE), px(size));
        }
        for (field, value) in [
            (FONT_SCALE, self.font_scale),
            (LINE_HEIGHT, self.line_height),
            (FONT_WEIGHT, self.font_weight),
        ] {
            if let Some(value) = value {
                tree.insert(case.apply(field), value);
            }
        }
        tree
    }

    pub fn is_empty(&self) -> bool {
        self.font_size.is_none()
            && self.font_scale.is_none()
            && self.line_height.is_none()
            && self.font_weight.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_px_never_double_applies() {
        assert_eq!(parse_px(&Scalar::from("16px")), Some(16.0));
        assert_eq!(parse_px(&Scalar::from(" 16.5 px ")), Some(16.5));
        assert_eq!(parse_px(&Scalar::Number(20.0)), Some(20.0));
        assert_eq!(parse_px(&Scalar::from("1rem")), None);
        assert_eq!(px(parse_px(&Scalar::from("16px")).unwrap()), "16px");
    }

    #[test]
    fn test_typography_from_internal_tree() {
        let tree = StyleTree::from_value(json!({
            "typography": {"fontSize": "16px", "fontScale": 1.2, "lineHeight": "1.5", "fontWeight": 400}
        }))
        .unwrap();
        let tokens = TypographyTokens::from_tree(&tree, KeyCase::Internal).unwrap();
        assert_eq!(tokens.font_size, Some(16.0));
        assert_eq!(tokens.font_scale, Some(1.2));
        assert_eq!(tokens.line_height, Some(1.5));
        assert_eq!(tokens.font_weight, Some(400.0));
    }

    #[test]
    fn test_typography_missing_fields() {
        let tree = StyleTree::from_value(json!({"typography": {"font-size": "16px"}})).unwrap();
        let tokens = TypographyTokens::from_tree(&tree, KeyCase::Token).unwrap();
        assert_eq!(tokens.font_size, Some(16.0));
        assert_eq!(tokens.font_scale, None);
        assert!(TypographyTokens::from_tree(&StyleTree::new(), KeyCase::Token)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_typography_rejects_non_numeric() {
        let tree = StyleTree::from_value(json!({"typography": {"font-size": "1rem"}})).unwrap();
        let err = TypographyTokens::from_tree(&tree, KeyCase::Token).unwrap_err();
        assert!(matches!(err, TokenError::InvalidNumber { field: "font-size", .. }));
    }

    #[test]
    fn test_color_round_trip() {
        let colors = ColorTokens {
            text: Some("#111".into()),
            background: None,
            primary: Some("teal".into()),
        };
        let tree = StyleTree::new().with(COLOR, colors.to_tree(KeyCase::Token));
        assert_eq!(ColorTokens::from_tree(&tree, KeyCase::Token), colors);
    }

    #[test]
    fn test_is_derived_field() {
        assert!(is_derived_field("font-size-heading-3"));
        assert!(is_derived_field("fontSizeHeading3"));
        assert!(is_derived_field("lineHeightHeading"));
        assert!(!is_derived_field("font-size"));
    }
}
