//! JSON file key-value store
//!
//! All items live in a single JSON object on disk. Every write takes an
//! exclusive lock on a sibling `.lock` file, re-reads the object, applies
//! the change and atomically replaces the file. Two processes writing the
//! same key still race: last writer wins.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tempfile::NamedTempFile;

use crate::domain::result::{Error, Result};
use crate::ports::KeyValueStore;

type Items = BTreeMap<String, String>;

pub struct JsonFileStore {
    path: PathBuf,
    lock_path: PathBuf,
}

impl JsonFileStore {
    /// Open (or lazily create) the store at `path`
    ///
    /// The parent directory is created if missing. The file itself is only
    /// written on the first mutation.
    pub fn new(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut lock_name = path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        lock_name.push(".lock");

        Ok(Self {
            path: path.to_path_buf(),
            lock_path: path.with_file_name(lock_name),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_items(&self) -> Result<Items> {
        if !self.path.exists() {
            return Ok(Items::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Items::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            Error::storage(format!("Corrupt store file {:?}: {}", self.path, e))
        })
    }

    fn write_items(&self, items: &Items) -> Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        // Temp file in the same directory so the rename stays on one filesystem
        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, items)?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| Error::Io(e.error))?;
        Ok(())
    }

    /// Apply `change` under the write lock, persisting only if it reports a change
    fn update<F>(&self, change: F) -> Result<()>
    where
        F: FnOnce(&mut Items) -> bool,
    {
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&self.lock_path)?;
        FileExt::lock_exclusive(&lock_file)?;

        let result = self.read_items().and_then(|mut items| {
            if change(&mut items) {
                self.write_items(&items)
            } else {
                Ok(())
            }
        });

        unlock(&lock_file);
        result
    }
}

fn unlock(file: &File) {
    if let Err(e) = FileExt::unlock(file) {
        tracing::warn!("Failed to release store lock: {}", e);
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_items()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.update(|items| {
            items.insert(key.to_string(), value.to_string());
            true
        })
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.update(|items| items.remove(key).is_some())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.read_items()?.into_keys().collect())
    }
}
