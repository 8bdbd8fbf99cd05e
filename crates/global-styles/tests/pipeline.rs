//! End-to-end tests over file-backed themes and stores.

use std::fs;

use global_styles::{
    FileStore, GlobalStyles, GlobalStylesConfig, HeadDocument, OneShotSink, RecordId, RecordStore,
    Session, StyleSurface, TypographyTokens, DEFAULT_NODE_ID,
};
use tempfile::TempDir;

struct Site {
    theme_dir: TempDir,
    store_dir: TempDir,
}

impl Site {
    fn new(theme_json: Option<&str>) -> Self {
        let theme_dir = TempDir::new().unwrap();
        if let Some(json) = theme_json {
            fs::write(theme_dir.path().join("experimental-theme.json"), json).unwrap();
        }
        Self {
            theme_dir,
            store_dir: TempDir::new().unwrap(),
        }
    }

    fn styles(&self, config: GlobalStylesConfig) -> GlobalStyles<FileStore> {
        GlobalStyles::from_config(
            config,
            Some(self.theme_dir.path()),
            FileStore::new(self.store_dir.path()),
        )
        .unwrap()
    }
}

#[test]
fn theme_without_styles_file_renders_nothing() {
    let site = Site::new(None);
    let styles = site.styles(GlobalStylesConfig::default());
    assert!(!styles.has_theme_support());
    assert_eq!(styles.render_once().unwrap(), None);
    assert_eq!(fs::read_dir(site.store_dir.path()).unwrap().count(), 0);
}

#[test]
fn one_shot_output_matches_reference_format() {
    let site = Site::new(Some("{}"));
    let css = site.styles(GlobalStylesConfig::default()).render_once().unwrap().unwrap();
    assert_eq!(
        css,
        ":root {\n\
         \t--wp--color--primary: #52accc;\n\
         \t--wp--color--background: white;\n\
         \t--wp--color--text: black;\n\
         \t--wp--typography--font-size: 16px;\n\
         \t--wp--typography--font-scale: 1.2;\n\
         \t--wp--typography--font-weight: 400;\n\
         \t--wp--typography--line-height: 1.5;\n\
         \t--wp--typography--line-height-heading: 1.2;\n\
         \t--wp--typography--font-size-heading-1: 39.81px;\n\
         \t--wp--typography--font-size-heading-2: 33.18px;\n\
         \t--wp--typography--font-size-heading-3: 27.65px;\n\
         \t--wp--typography--font-size-heading-4: 23.04px;\n\
         \t--wp--typography--font-size-heading-5: 19.2px;\n\
         \t--wp--typography--font-size-heading-6: 17.53px;\n\
         \t--wp--typography--font-weight-heading: 600;\n\
         }"
    );
}

#[test]
fn layers_merge_with_user_winning() {
    let site = Site::new(Some(r#"{"color": {"text": "navy", "link": "teal"}, "typography": {"fontScale": 1.25}}"#));
    let config = GlobalStylesConfig {
        text_domain: "Demo".into(),
        ..Default::default()
    };
    let styles = site.styles(config);
    styles.user().set_field("color", "text", "tomato").unwrap();

    assert!(site.store_dir.path().join("wp-global-styles-demo.json").is_file());

    let resolved = styles.resolve().unwrap();
    let sheet = &resolved.stylesheet;
    assert_eq!(sheet.get("--wp--color--text"), Some("tomato"));
    assert_eq!(sheet.get("--wp--color--link"), Some("teal"));
    assert_eq!(sheet.get("--wp--typography--font-scale"), Some("1.25"));
    assert_eq!(sheet.get("--wp--typography--font-size-heading-1"), Some("48.83px"));
}

#[test]
fn malformed_user_record_falls_back_to_defaults() {
    let site = Site::new(Some("{}"));
    fs::write(site.store_dir.path().join("wp-global-styles-default.json"), "not json").unwrap();

    let resolved = site.styles(GlobalStylesConfig::default()).resolve().unwrap();
    assert_eq!(resolved.stylesheet.get("--wp--color--text"), Some("black"));
}

#[test]
fn custom_css_options_from_yaml() {
    let site = Site::new(Some("{}"));
    let config = GlobalStylesConfig::from_yaml(
        r#"
css:
  prefix: acme
  selector: "body"
node_id: acme-styles
"#,
    )
    .unwrap();
    let styles = site.styles(config);

    let tag = styles.render_tag().unwrap().unwrap();
    assert!(tag.starts_with("<style id=\"acme-styles\">\nbody {\n"));
    assert!(tag.contains("\t--acme--color--text: black;\n"));
}

#[test]
fn live_session_takes_over_server_rendered_tag() {
    let site = Site::new(Some("{}"));
    let styles = site.styles(GlobalStylesConfig::default());

    let mut head = HeadDocument::new();
    let resolved = styles.resolve().unwrap();
    head.ingest(&OneShotSink::default().render_tag(&resolved.stylesheet).unwrap());
    assert!(head.find(DEFAULT_NODE_ID).is_some());

    let mut session = Session::start(styles, head).unwrap();
    session
        .set_typography(&TypographyTokens {
            font_size: Some(20.0),
            ..Default::default()
        })
        .unwrap();

    let head = session.into_surface();
    assert_eq!(head.count(DEFAULT_NODE_ID), 1);
    let text = head.text_of(DEFAULT_NODE_ID).unwrap();
    assert!(text.contains("\t--wp--typography--font-size: 20px;\n"));
    assert!(text.contains("\t--wp--typography--font-size-heading-1: 49.77px;\n"));
    assert!(text.contains("\t--wp--typography--font-size-heading-6: 21.91px;\n"));

    let store = FileStore::new(site.store_dir.path());
    let saved = store.get(&RecordId::for_theme("default")).unwrap().unwrap();
    assert_eq!(saved, r#"{"typography":{"font-size":"20px"}}"#);
}
