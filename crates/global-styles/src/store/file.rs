//! Directory-backed record store.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{RecordId, RecordStore};
use crate::error::StoreError;

/// Stores each record as `<dir>/<id>.json`.
///
/// The directory is created on first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `id`.
    pub fn path_for(&self, id: &RecordId) -> Result<PathBuf, StoreError> {
        let name = id.as_str();
        let valid = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\', '\0']);
        if !valid {
            return Err(StoreError::rejected(id, "record id is not a valid file name"));
        }
        Ok(self.dir.join(format!("{}.json", name)))
    }
}

impl RecordStore for FileStore {
    fn get(&self, id: &RecordId) -> Result<Option<String>, StoreError> {
        let path = self.path_for(id)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(id, e)),
        }
    }

    fn replace(&self, id: &RecordId, content: &str) -> Result<(), StoreError> {
        let path = self.path_for(id)?;
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::io(id, e))?;

        // Write beside the target then rename, so readers never see a torn record.
        let tmp = path.with_extension("json.tmp");
        write_then_rename(&tmp, &path, content).map_err(|e| StoreError::io(id, e))?;
        debug!(record = %id, path = %path.display(), bytes = content.len(), "record replaced");
        Ok(())
    }
}

fn write_then_rename(tmp: &Path, target: &Path, content: &str) -> io::Result<()> {
    fs::write(tmp, content)?;
    fs::rename(tmp, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_on_disk() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("records"));
        let id = RecordId::for_theme("demo");

        assert_eq!(store.get(&id).unwrap(), None);
        store.replace(&id, "{}").unwrap();

        let on_disk = temp_dir.path().join("records/wp-global-styles-demo.json");
        assert_eq!(fs::read_to_string(on_disk).unwrap(), "{}");
        assert_eq!(store.get(&id).unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_rejects_path_like_ids() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());
        let err = store.replace(&RecordId::new("../escape"), "{}").unwrap_err();
        assert!(matches!(err, StoreError::Rejected { .. }));
    }

    #[test]
    fn test_unreadable_record_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());
        let id = RecordId::new("dir-not-file");
        fs::create_dir(temp_dir.path().join("dir-not-file.json")).unwrap();
        assert!(matches!(store.get(&id), Err(StoreError::Io { .. })));
    }
}
