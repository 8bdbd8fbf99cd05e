//! Runs commands against temporary theme and store directories.

use std::fs;
use std::path::Path;

use clap::Parser;
use global_styles_cli::{run, Cli};
use tempfile::TempDir;

fn exec(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("global-styles").chain(args.iter().copied()))?;
    let mut out = Vec::new();
    run(cli, &mut out)?;
    Ok(String::from_utf8(out)?)
}

fn path(p: &Path) -> &str {
    p.to_str().unwrap()
}

#[test]
fn init_creates_record() {
    let store = TempDir::new().unwrap();
    let output = exec(&["init", "--store", path(store.path()), "--text-domain", "Demo"]).unwrap();

    assert_eq!(output, "wp-global-styles-demo\n");
    let record = fs::read_to_string(store.path().join("wp-global-styles-demo.json")).unwrap();
    assert_eq!(record, "{}");
}

#[test]
fn set_then_resolve() {
    let store = TempDir::new().unwrap();
    let theme = TempDir::new().unwrap();
    fs::write(
        theme.path().join("experimental-theme.json"),
        r#"{"color": {"background": "ivory"}}"#,
    )
    .unwrap();
    let common = ["--store", path(store.path()), "--theme-dir", path(theme.path())];

    let mut args = vec!["set-typography", "--font-size", "20"];
    args.extend(common);
    let saved = exec(&args).unwrap();
    assert!(saved.contains("\"font-size\": \"20px\""));

    let mut args = vec!["set-color", "--text", "tomato"];
    args.extend(common);
    exec(&args).unwrap();

    let mut args = vec!["resolve"];
    args.extend(common);
    let css = exec(&args).unwrap();
    assert!(css.starts_with(":root {\n"));
    assert!(css.contains("\t--wp--color--background: ivory;\n"));
    assert!(css.contains("\t--wp--color--text: tomato;\n"));
    assert!(css.contains("\t--wp--typography--font-size-heading-1: 49.77px;\n"));
}

#[test]
fn resolve_as_json_and_tag() {
    let store = TempDir::new().unwrap();

    let json = exec(&["resolve", "--format", "json", "--store", path(store.path())]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["typography"]["font-weight-heading"], 600);
    assert_eq!(value["color"]["primary"], "#52accc");

    let tag = exec(&["resolve", "--format", "tag", "--store", path(store.path())]).unwrap();
    assert!(tag.starts_with("<style id=\"wp-global-styles-tag\">\n:root {\n"));
}

#[test]
fn resolve_as_yaml() {
    let store = TempDir::new().unwrap();
    let yaml = exec(&["resolve", "--format", "yaml", "--store", path(store.path())]).unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(value["color"]["text"], serde_yaml::Value::from("black"));
}

#[test]
fn config_file_changes_prefix() {
    let store = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("styles.yaml");
    fs::write(&config, "css:\n  prefix: acme\n").unwrap();

    let css = exec(&["resolve", "--config", path(&config), "--store", path(store.path())]).unwrap();
    assert!(css.contains("\t--acme--color--text: black;\n"));
}

#[test]
fn empty_edits_are_rejected() {
    let store = TempDir::new().unwrap();
    assert!(exec(&["set-color", "--store", path(store.path())]).is_err());
    assert!(exec(&["set-typography", "--store", path(store.path())]).is_err());
}

#[test]
fn invalid_scale_is_rejected_without_writing() {
    let store = TempDir::new().unwrap();
    let err = exec(&["set-typography", "--font-scale", "0", "--store", path(store.path())]).unwrap_err();
    assert!(err.to_string().contains("font-scale"));
    assert_eq!(fs::read_dir(store.path()).unwrap().count(), 0);
}
