//! JSON-file backed store.
//!
//! The script host's persistent map. Every call reads the file afresh, so
//! several stores or processes can share one path. Mutations hold an
//! exclusive lock on a sibling `.lock` file across the read, change and
//! atomic rewrite.

use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::traits::KeyValueStore;
use crate::error::Result;
use crate::fs::write_atomic;

type Entries = BTreeMap<String, String>;

/// Persistent store backed by a single JSON object file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// A missing file is an empty store; nothing is written until the first
    /// mutation.
    ///
    /// # Errors
    ///
    /// Returns `KvError::Storage` if the file exists but cannot be read or
    /// does not contain a JSON object of strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self { path: path.into() };
        let entries = store.load()?;
        tracing::debug!(path = %store.path.display(), entries = entries.len(), "opened file store");
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".lock");
        self.path.with_file_name(name)
    }

    fn load(&self) -> Result<Entries> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Entries::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    /// Take the writer lock. Released when the returned file is dropped.
    fn lock(&self) -> Result<File> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;
        file.lock_exclusive()?;
        Ok(file)
    }

    /// Re-read the map under the lock, apply `change`, and write it back if
    /// `change` reports a modification.
    fn update(&mut self, change: impl FnOnce(&mut Entries) -> bool) -> Result<()> {
        let _lock = self.lock()?;
        let mut entries = self.load()?;
        if change(&mut entries) {
            let contents = serde_json::to_vec_pretty(&entries)?;
            write_atomic(&self.path, &contents)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
            true
        })
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.update(|entries| entries.remove(key).is_some())
    }

    fn clear(&mut self) -> Result<()> {
        self.update(|entries| {
            entries.clear();
            true
        })
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.load()?.into_keys().collect())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.load()?.len())
    }
}
