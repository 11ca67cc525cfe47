use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::kv::{BoxFuture, KeyValueStore};

/// Slots persisted as one file per key under a data directory.
///
/// `set` writes to a temp file and renames it over the slot, so a crash
/// mid-write leaves the previous value in place.
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

    /// Path of the file backing a slot.
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<Option<String>, StorageError>> {
        Box::pin(async move {
            let path = self.slot_path(key);
            match tokio::fs::read_to_string(&path).await {
                Ok(contents) => Ok(Some(contents)),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                Err(e) => Err(StorageError::Read {
                    key: key.to_string(),
                    message: e.to_string(),
                }),
            }
        })
    }

    fn set<'a>(&'a self, key: &'a str, value: String) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            let write_err = |e: std::io::Error| StorageError::Write {
                key: key.to_string(),
                message: e.to_string(),
            };

            tokio::fs::create_dir_all(&self.dir).await.map_err(write_err)?;

            let path = self.slot_path(key);
            let tmp_path = path.with_extension("json.tmp");
            tokio::fs::write(&tmp_path, value.as_bytes())
                .await
                .map_err(write_err)?;
            tokio::fs::rename(&tmp_path, &path)
                .await
                .map_err(write_err)?;

            tracing::debug!(path = %path.display(), "slot written");
            Ok(())
        })
    }
}
