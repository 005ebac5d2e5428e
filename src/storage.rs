//! File-backed storage
//!
//! One JSON file per key inside the data directory. Writes go to a
//! temporary file that is renamed over the target.

use shopping_list_common::{Error, Storage};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Could not read {}: {}", path.display(), e);
                None
            }
        }
    }

    fn save(&mut self, key: &str, value: &str) -> shopping_list_common::Result<()> {
        let storage_error = |e: std::io::Error| Error::Storage(format!("{}: {}", key, e));

        std::fs::create_dir_all(&self.dir).map_err(storage_error)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value).map_err(storage_error)?;
        std::fs::rename(&tmp, &path).map_err(storage_error)?;
        Ok(())
    }
}
