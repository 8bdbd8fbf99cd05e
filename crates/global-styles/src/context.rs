//! The global styles context.
//!
//! [`GlobalStyles`] holds everything a resolution needs: configuration,
//! the three layers and the store behind the user layer. There is no
//! global state; hosts create one context and pass it where styles are
//! rendered.

use std::path::Path;

use global_styles_tokens::{merge_layers, resolve, KeyCase, Resolved, StyleTree};
use serde::Serialize;
use tracing::debug;

use crate::config::GlobalStylesConfig;
use crate::error::StylesError;
use crate::layer::{CoreDefaults, ThemeLayer, UserLayer};
use crate::sink::{LiveSink, OneShotSink, WRAPPER_CLASS};
use crate::store::{RecordId, RecordStore};

/// What the editor needs to render styles live.
///
/// The editor merges unsaved user edits over `base_styles` itself and
/// saves them to `user_record_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSettings {
    /// `core` merged with `theme`, token-cased.
    pub base_styles: StyleTree,
    pub user_record_id: RecordId,
}

#[derive(Debug)]
pub struct GlobalStyles<S> {
    config: GlobalStylesConfig,
    core: CoreDefaults,
    theme: Option<ThemeLayer>,
    user: UserLayer<S>,
}

impl<S: RecordStore> GlobalStyles<S> {
    /// Assembles a context from already loaded layers.
    ///
    /// The user record is named after the configured text domain.
    pub fn new(
        config: GlobalStylesConfig,
        core: CoreDefaults,
        theme: Option<ThemeLayer>,
        store: S,
    ) -> Self {
        let user = UserLayer::new(store, RecordId::for_theme(&config.text_domain));
        Self {
            config,
            core,
            theme,
            user,
        }
    }

    /// Uses the bundled core defaults and looks for the theme file in
    /// `theme_dir`.
    pub fn from_config(
        config: GlobalStylesConfig,
        theme_dir: Option<&Path>,
        store: S,
    ) -> Result<Self, StylesError> {
        let core = CoreDefaults::bundled()?;
        let theme = theme_dir.and_then(|dir| ThemeLayer::discover(dir, &config.theme_file_name));
        Ok(Self::new(config, core, theme, store))
    }

    pub fn config(&self) -> &GlobalStylesConfig {
        &self.config
    }

    pub fn core(&self) -> &CoreDefaults {
        &self.core
    }

    pub fn theme(&self) -> Option<&ThemeLayer> {
        self.theme.as_ref()
    }

    pub fn user(&self) -> &UserLayer<S> {
        &self.user
    }

    /// True when the active theme ships a styles file.
    pub fn has_theme_support(&self) -> bool {
        self.theme.is_some()
    }

    /// Resolves core, theme and the stored user layer.
    pub fn resolve(&self) -> Result<Resolved, StylesError> {
        let user = self.user.load()?;
        self.resolve_with_user(&user)
    }

    /// Resolves core and theme with `user` in place of the stored layer.
    pub fn resolve_with_user(&self, user: &StyleTree) -> Result<Resolved, StylesError> {
        let theme = self.theme.as_ref().map(ThemeLayer::tree);
        let resolved = resolve(self.core.tree(), theme, Some(user), &self.config.css)?;
        debug!(declarations = resolved.stylesheet.len(), "global styles resolved");
        Ok(resolved)
    }

    pub fn one_shot_sink(&self) -> OneShotSink {
        OneShotSink::new(self.config.node_id.as_str())
    }

    pub fn live_sink(&self) -> LiveSink {
        LiveSink::new(self.config.node_id.as_str()).with_extra_rules(self.config.editor_rules.iter().cloned())
    }

    /// CSS for a page response.
    ///
    /// `None` when the theme does not support global styles or nothing
    /// resolved.
    pub fn render_once(&self) -> Result<Option<String>, StylesError> {
        if !self.has_theme_support() {
            return Ok(None);
        }
        let resolved = self.resolve()?;
        Ok(self.one_shot_sink().render(&resolved.stylesheet))
    }

    /// Like [`render_once`](Self::render_once), wrapped in a `<style>` tag.
    pub fn render_tag(&self) -> Result<Option<String>, StylesError> {
        if !self.has_theme_support() {
            return Ok(None);
        }
        let resolved = self.resolve()?;
        Ok(self.one_shot_sink().render_tag(&resolved.stylesheet))
    }

    /// Settings handed to the editor. Creates the user record if needed.
    ///
    /// `None` when the theme does not support global styles.
    pub fn editor_settings(&self) -> Result<Option<EditorSettings>, StylesError> {
        if !self.has_theme_support() {
            return Ok(None);
        }
        let user_record_id = self.user.ensure_record()?.clone();
        Ok(Some(EditorSettings {
            base_styles: self.base_styles(),
            user_record_id,
        }))
    }

    /// `core` merged with `theme`, without derived tokens.
    pub fn base_styles(&self) -> StyleTree {
        let layers: Vec<StyleTree> = std::iter::once(self.core.tree())
            .chain(self.theme.as_ref().map(ThemeLayer::tree))
            .map(|tree| tree.to_case(KeyCase::Internal))
            .collect();
        merge_layers(layers.iter()).to_case(KeyCase::Token)
    }

    /// Adds the global styles wrapper class when the theme supports them.
    pub fn body_classes(&self, mut classes: Vec<String>) -> Vec<String> {
        if self.has_theme_support() && !classes.iter().any(|c| c == WRAPPER_CLASS) {
            classes.push(WRAPPER_CLASS.to_string());
        }
        classes
    }

    /// Re-reads the theme file.
    pub fn refresh_theme(&mut self) {
        if let Some(theme) = self.theme.as_mut() {
            theme.refresh();
        }
    }
}
