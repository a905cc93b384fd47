//! Durable storage for the college configuration
//!
//! The store owns a single JSON file holding the last-written configuration.
//! There is no in-memory cache: every read re-touches the filesystem, and a
//! write replaces the previous document entirely. Concurrent writers race at
//! the filesystem level (last write wins); this mirrors the original service
//! and is a documented limitation rather than a guarantee.

use crate::{Error, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem-backed store for exactly one configuration document
#[derive(Debug, Clone)]
pub struct ConfigStore {
    /// Path of the backing JSON file
    path: PathBuf,
}

impl ConfigStore {
    /// Create a store backed by the file at `path`
    ///
    /// The file is not touched until the first `read` or `write`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored configuration
    ///
    /// Returns an empty JSON object if nothing has ever been written (the
    /// backing file does not exist). Fails with [`Error::StorageRead`] if the
    /// file exists but cannot be read or is not valid JSON.
    pub fn read(&self) -> Result<Value> {
        if !self.path.exists() {
            tracing::debug!("Config file {:?} not found, returning empty object", self.path);
            return Ok(Value::Object(serde_json::Map::new()));
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| Error::storage_read(format!("reading {:?}: {}", self.path, e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| Error::storage_read(format!("parsing {:?}: {}", self.path, e)))
    }

    /// Persist `value`, replacing any prior content
    ///
    /// Creates the containing directory if it does not exist. The previous
    /// value is not retained anywhere. Fails with [`Error::StorageWrite`] if
    /// directory creation or the file write fails.
    pub fn write(&self, value: &Value) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)
                    .map_err(|e| Error::storage_write(format!("creating {:?}: {}", dir, e)))?;
            }
        }

        let contents = serde_json::to_string_pretty(value)
            .map_err(|e| Error::storage_write(format!("serializing config: {}", e)))?;

        fs::write(&self.path, contents)
            .map_err(|e| Error::storage_write(format!("writing {:?}: {}", self.path, e)))?;

        tracing::debug!("Config written to {:?}", self.path);
        Ok(())
    }
}
