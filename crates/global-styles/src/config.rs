//! Configuration for a global styles context.
//!
//! Every field has a default matching the block editor's conventions, so
//! an empty YAML document is a valid configuration:
//!
//! ```yaml
//! css:
//!   prefix: wp
//!   token: "--"
//!   selector: ":root"
//! node_id: wp-global-styles-tag
//! theme_file_name: experimental-theme.json
//! text_domain: twentytwentyone
//! editor_rules:
//!   - ".editor-styles-wrapper { background-color: var(--wp--color--background); }"
//! ```

use std::path::Path;

use global_styles_tokens::CssVarOptions;
use serde::{Deserialize, Serialize};

use crate::error::StylesError;
use crate::layer::DEFAULT_THEME_FILE;
use crate::sink::{DEFAULT_EDITOR_RULE, DEFAULT_NODE_ID};

/// Text domain used when none is configured.
pub const DEFAULT_TEXT_DOMAIN: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalStylesConfig {
    /// Naming of the emitted custom properties.
    pub css: CssVarOptions,
    /// Identifier of the style node shared by the one-shot and live sinks.
    pub node_id: String,
    /// File name a theme provides its styles in.
    pub theme_file_name: String,
    /// Rules appended after the custom properties by the live sink.
    pub editor_rules: Vec<String>,
    /// The active theme's text domain, used to name the user record.
    pub text_domain: String,
}

impl Default for GlobalStylesConfig {
    fn default() -> Self {
        Self {
            css: CssVarOptions::default(),
            node_id: DEFAULT_NODE_ID.to_string(),
            theme_file_name: DEFAULT_THEME_FILE.to_string(),
            editor_rules: vec![DEFAULT_EDITOR_RULE.to_string()],
            text_domain: DEFAULT_TEXT_DOMAIN.to_string(),
        }
    }
}

impl GlobalStylesConfig {
    /// Parses a configuration from YAML. Missing fields take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, StylesError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| StylesError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StylesError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| StylesError::load(path, e))?;
        Self::from_yaml(&content)
    }

    pub fn validate(&self) -> Result<(), StylesError> {
        if self.node_id.trim().is_empty() {
            return Err(StylesError::Config("node_id must not be empty".into()));
        }
        if self.theme_file_name.trim().is_empty() {
            return Err(StylesError::Config("theme_file_name must not be empty".into()));
        }
        if self.css.selector.trim().is_empty() {
            return Err(StylesError::Config("css.selector must not be empty".into()));
        }
        Ok(())
    }
}
