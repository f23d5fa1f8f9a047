use super::BlobStore;
use crate::error::{Result, StockError};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use uuid::Uuid;

/// Blob store backed by a directory: each key is a `<key>.json` file.
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn blob_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|e| {
                StockError::PersistenceFailure(format!(
                    "creating {}: {}",
                    self.root.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}

impl BlobStore for FsBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.blob_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StockError::PersistenceFailure(format!(
                "reading {}: {}",
                key, e
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;

        // Write to a temp file and rename, so a crash never leaves half a blob
        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        let write = fs::write(&tmp_path, value)
            .and_then(|_| fs::rename(&tmp_path, self.blob_path(key)));

        write.map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            StockError::PersistenceFailure(format!("writing {}: {}", key, e))
        })
    }
}
