//! The active theme's style file.

use std::path::{Path, PathBuf};

use global_styles_tokens::StyleTree;
use once_cell::sync::OnceCell;
use tracing::{debug, warn};

/// File name a theme uses to opt into global styles.
pub const DEFAULT_THEME_FILE: &str = "experimental-theme.json";

/// Theme-supplied styles, loaded on first access and cached.
///
/// A theme file that cannot be read or parsed is logged and treated as an
/// empty layer, so a broken theme never takes the site's styles down.
#[derive(Debug, Clone)]
pub struct ThemeLayer {
    path: PathBuf,
    cache: OnceCell<StyleTree>,
}

impl ThemeLayer {
    /// Looks for `file_name` in `theme_dir`.
    ///
    /// Returns `None` if the theme has no such file, which means it does
    /// not support global styles.
    pub fn discover(theme_dir: impl AsRef<Path>, file_name: &str) -> Option<Self> {
        let path = theme_dir.as_ref().join(file_name);
        if path.is_file() {
            debug!(path = %path.display(), "theme styles found");
            Some(Self::from_path(path))
        } else {
            debug!(path = %path.display(), "theme has no global styles");
            None
        }
    }

    /// Uses `path` as the theme file without checking that it exists.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The theme tree, read from disk on first call.
    pub fn tree(&self) -> &StyleTree {
        self.cache.get_or_init(|| load(&self.path))
    }

    /// Drops the cached tree and reads the file again.
    pub fn refresh(&mut self) -> &StyleTree {
        self.cache = OnceCell::new();
        debug!(path = %self.path.display(), "theme styles refreshed");
        self.tree()
    }
}

fn load(path: &Path) -> StyleTree {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot read theme styles, using none");
            return StyleTree::new();
        }
    };
    match StyleTree::from_json_str(&content) {
        Ok(tree) => {
            debug!(path = %path.display(), keys = tree.len(), "theme styles loaded");
            tree
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "malformed theme styles, using none");
            StyleTree::new()
        }
    }
}
