//! JSON-file collection store.

use std::fs;
use std::path::PathBuf;

use crate::collection::Collection;
use crate::error::StoreError;
use crate::kv::CollectionStore;

/// Durable backend: one `<key>.json` file per collection under a directory.
///
/// Writes go through a temp file and rename, so a collection document is
/// either the old version or the new one, never a torn write. Concurrent
/// writers from other processes are last-write-wins.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::io("store directory", e))?;
        Ok(Self { dir })
    }

    fn path(&self, collection: Collection) -> PathBuf {
        self.dir.join(format!("{}.json", collection.key()))
    }
}

impl CollectionStore for JsonFileStore {
    fn get(&self, collection: Collection) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path(collection)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(collection.key(), e)),
        }
    }

    fn put(&self, collection: Collection, raw: String) -> Result<(), StoreError> {
        let path = self.path(collection);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, raw).map_err(|e| StoreError::io(collection.key(), e))?;
        fs::rename(&tmp, &path).map_err(|e| StoreError::io(collection.key(), e))?;
        Ok(())
    }
}
