//! Live editing sessions.

use global_styles_tokens::{ColorTokens, Resolved, StyleTree, TypographyTokens};

use crate::context::GlobalStyles;
use crate::error::StylesError;
use crate::sink::{LiveSink, StyleSurface};
use crate::store::RecordStore;

/// Keeps a [`StyleSurface`] in sync with the user layer.
///
/// Every change runs a full resolution and writes the result through a
/// [`LiveSink`]. Passes complete synchronously, so a later pass always
/// supersedes an earlier one. A pass that fails leaves the surface as it
/// was.
///
/// ```rust
/// use global_styles::{GlobalStyles, GlobalStylesConfig, HeadDocument, MemoryStore, Session};
/// use global_styles::ColorTokens;
///
/// let styles = GlobalStyles::from_config(GlobalStylesConfig::default(), None, MemoryStore::new()).unwrap();
/// let mut session = Session::start(styles, HeadDocument::new()).unwrap();
///
/// session.set_color(&ColorTokens { text: Some("tomato".into()), ..Default::default() }).unwrap();
/// let css = session.surface().text_of("wp-global-styles-tag").unwrap();
/// assert!(css.contains("--wp--color--text: tomato;"));
/// ```
#[derive(Debug)]
pub struct Session<R, S> {
    styles: GlobalStyles<R>,
    surface: S,
    sink: LiveSink,
    current: Resolved,
}

impl<R: RecordStore, S: StyleSurface> Session<R, S> {
    /// Resolves the stored styles and applies them to `surface`.
    pub fn start(styles: GlobalStyles<R>, mut surface: S) -> Result<Self, StylesError> {
        let sink = styles.live_sink();
        let current = styles.resolve()?;
        sink.apply(&mut surface, &current.stylesheet);
        Ok(Self {
            styles,
            surface,
            sink,
            current,
        })
    }

    pub fn styles(&self) -> &GlobalStyles<R> {
        &self.styles
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The result of the last successful pass.
    pub fn current(&self) -> &Resolved {
        &self.current
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Previews an unsaved user tree.
    pub fn on_user_change(&mut self, user: &StyleTree) -> Result<&Resolved, StylesError> {
        let resolved = self.styles.resolve_with_user(user)?;
        Ok(self.show(resolved))
    }

    /// Saves color edits and applies the result.
    pub fn set_color(&mut self, colors: &ColorTokens) -> Result<&Resolved, StylesError> {
        let user = self.styles.user().set_color(colors)?;
        self.on_user_change(&user)
    }

    /// Saves typography edits and applies the result.
    pub fn set_typography(&mut self, typography: &TypographyTokens) -> Result<&Resolved, StylesError> {
        let user = self.styles.user().set_typography(typography)?;
        self.on_user_change(&user)
    }

    /// Re-reads the stored user layer and applies it.
    pub fn refresh(&mut self) -> Result<&Resolved, StylesError> {
        let resolved = self.styles.resolve()?;
        Ok(self.show(resolved))
    }

    fn show(&mut self, resolved: Resolved) -> &Resolved {
        self.sink.apply(&mut self.surface, &resolved.stylesheet);
        self.current = resolved;
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GlobalStylesConfig;
    use crate::sink::{HeadDocument, DEFAULT_NODE_ID};
    use crate::store::{MemoryStore, RecordId};

    fn session(store: &MemoryStore) -> Session<&MemoryStore, HeadDocument> {
        let styles = GlobalStyles::from_config(GlobalStylesConfig::default(), None, store).unwrap();
        Session::start(styles, HeadDocument::new()).unwrap()
    }

    fn text<'a>(session: &'a Session<&MemoryStore, HeadDocument>) -> &'a str {
        session.surface().text_of(DEFAULT_NODE_ID).unwrap()
    }

    #[test]
    fn test_start_applies_defaults() {
        let store = MemoryStore::new();
        let session = session(&store);
        assert!(text(&session).contains("\t--wp--color--primary: #52accc;\n"));
        assert!(text(&session).ends_with("var(--wp--color--background); }"));
        assert_eq!(session.surface().count(DEFAULT_NODE_ID), 1);
    }

    #[test]
    fn test_on_user_change_previews_without_saving() {
        let store = MemoryStore::new();
        let mut session = session(&store);
        let user = StyleTree::from_json_str(r#"{"typography": {"fontSize": "20px"}}"#).unwrap();

        let resolved = session.on_user_change(&user).unwrap();
        assert_eq!(
            resolved.stylesheet.get("--wp--typography--font-size-heading-1"),
            Some("49.77px")
        );
        assert!(text(&session).contains("--wp--typography--font-size-heading-1: 49.77px;"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_typography_persists_and_applies() {
        let store = MemoryStore::new();
        let mut session = session(&store);
        session
            .set_typography(&TypographyTokens {
                font_scale: Some(1.25),
                ..Default::default()
            })
            .unwrap();

        // 1.25^5 * 16 = 48.828125
        assert!(text(&session).contains("--wp--typography--font-size-heading-1: 48.83px;"));
        let saved = store.get(&RecordId::for_theme("default")).unwrap().unwrap();
        assert_eq!(saved, r#"{"typography":{"font-scale":1.25}}"#);
    }

    #[test]
    fn test_failed_pass_keeps_surface() {
        let store = MemoryStore::new();
        let mut session = session(&store);
        let before = text(&session).to_string();

        let bad = StyleTree::from_json_str(r#"{"typography": {"font-scale": 0}}"#).unwrap();
        assert!(session.on_user_change(&bad).is_err());
        assert_eq!(text(&session), before);
    }

    #[test]
    fn test_refresh_picks_up_other_writers() {
        let store = MemoryStore::new();
        let mut session = session(&store);

        let other = GlobalStyles::from_config(GlobalStylesConfig::default(), None, &store).unwrap();
        other.user().set_field("color", "background", "black").unwrap();

        session.refresh().unwrap();
        assert!(text(&session).contains("--wp--color--background: black;"));
    }
}
