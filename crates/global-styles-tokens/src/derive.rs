//! Derived typography tokens.
//!
//! Heading tokens are computed from the resolved base typography rather
//! than stored. They are recomputed on every resolution and replace any
//! value a layer may have supplied for them.
//!
//! | Field | Formula |
//! |-------|---------|
//! | `line-height-heading` | `round(line-height * 0.8, 2)` |
//! | `font-size-heading-N` | `round(font-scale ^ m(N) * font-size, 2)` px |
//! | `font-weight-heading` | `floor(font-weight * 1.5)` |
//!
//! with `m = {1: 5, 2: 4, 3: 3, 4: 2, 5: 1, 6: 0.5}`.

use tracing::debug;

use crate::error::TokenError;
use crate::schema::{
    px, TypographyTokens, FONT_SCALE, FONT_SIZE, FONT_SIZE_HEADINGS, FONT_WEIGHT,
    FONT_WEIGHT_HEADING, LINE_HEIGHT, LINE_HEIGHT_HEADING, TYPOGRAPHY,
};
use crate::tree::{KeyCase, StyleNode, StyleTree};

/// Exponent applied to the font scale for heading levels 1 through 6.
pub const HEADING_MULTIPLIERS: [f64; 6] = [5.0, 4.0, 3.0, 2.0, 1.0, 0.5];

pub const LINE_HEIGHT_HEADING_FACTOR: f64 = 0.8;
pub const FONT_WEIGHT_HEADING_FACTOR: f64 = 1.5;

/// Tokens computed from base typography.
///
/// Each group is `None` when one of its inputs was missing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DerivedTypography {
    /// Heading font sizes in pixels, level 1 first.
    pub font_size_headings: Option<[f64; 6]>,
    pub line_height_heading: Option<f64>,
    pub font_weight_heading: Option<f64>,
}

/// Computes the derived heading tokens.
///
/// Inputs are validated at this boundary: a font scale must be greater
/// than zero and sizes, line heights and weights must not be negative.
/// A scale of exactly 1 and a size of 0 are valid. Inputs whose results
/// overflow, such as a font scale of `1e100`, are rejected.
pub fn derive(base: &TypographyTokens) -> Result<DerivedTypography, TokenError> {
    validate(base)?;

    let font_size_headings = match (base.font_size, base.font_scale) {
        (Some(size), Some(scale)) => {
            let sizes = HEADING_MULTIPLIERS.map(|m| round2(scale.powf(m) * size));
            if sizes.iter().any(|size| !size.is_finite()) {
                return Err(TokenError::invalid(FONT_SCALE, scale, "result is not finite"));
            }
            Some(sizes)
        }
        _ => None,
    };
    let line_height_heading = base
        .line_height
        .map(|lh| finite(LINE_HEIGHT, lh, round2(lh * LINE_HEIGHT_HEADING_FACTOR)))
        .transpose()?;
    let font_weight_heading = base
        .font_weight
        .map(|fw| finite(FONT_WEIGHT, fw, (fw * FONT_WEIGHT_HEADING_FACTOR).floor()))
        .transpose()?;

    Ok(DerivedTypography {
        font_size_headings,
        line_height_heading,
        font_weight_heading,
    })
}

fn finite(field: &'static str, input: f64, result: f64) -> Result<f64, TokenError> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(TokenError::invalid(field, input, "result is not finite"))
    }
}

fn validate(base: &TypographyTokens) -> Result<(), TokenError> {
    if let Some(scale) = base.font_scale {
        if scale <= 0.0 {
            return Err(TokenError::invalid(FONT_SCALE, scale, "must be greater than zero"));
        }
    }
    for (field, value) in [
        (FONT_SIZE, base.font_size),
        (LINE_HEIGHT, base.line_height),
        (FONT_WEIGHT, base.font_weight),
    ] {
        if let Some(value) = value {
            if value < 0.0 {
                return Err(TokenError::invalid(field, value, "must not be negative"));
            }
        }
    }
    Ok(())
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl DerivedTypography {
    pub fn is_empty(&self) -> bool {
        self.font_size_headings.is_none()
            && self.line_height_heading.is_none()
            && self.font_weight_heading.is_none()
    }

    /// Writes the derived fields into the `typography` domain of `tree`.
    ///
    /// Any existing value for a derived field is removed first, so derived
    /// fields always follow the base fields in declaration order and a
    /// layer can never supply one, even when it cannot be computed.
    pub fn apply(&self, tree: &mut StyleTree, case: KeyCase) {
        let domain = case.apply(TYPOGRAPHY);
        if self.is_empty() && tree.branch(&domain).is_none() {
            return;
        }
        let typography = tree.branch_mut(&domain);

        let sizes: Option<[StyleNode; 6]> = self.font_size_headings.map(|sizes| sizes.map(|size| px(size).into()));
        let mut fields: Vec<(&str, Option<StyleNode>)> = Vec::new();
        fields.push((LINE_HEIGHT_HEADING, self.line_height_heading.map(Into::into)));
        for (i, field) in FONT_SIZE_HEADINGS.iter().enumerate() {
            fields.push((*field, sizes.as_ref().map(|sizes| sizes[i].clone())));
        }
        fields.push((FONT_WEIGHT_HEADING, self.font_weight_heading.map(Into::into)));

        for (field, value) in fields {
            let key = case.apply(field);
            if typography.remove(&key).is_some() {
                debug!(field, "layer-supplied derived token replaced");
            }
            if let Some(value) = value {
                typography.insert(key, value);
            }
        }
    }
}
