//! File-backed JSON blobs for user-local data.
//!
//! Mirrors the mobile app's key-value persistence: each key maps to one
//! JSON document under the data directory. Absent keys read as `None`.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Storage key for the user's tracked flight numbers.
pub const USER_FLIGHTS_KEY: &str = "userFlights";
/// Storage key for the restaurant review log.
pub const RESTAURANT_REVIEWS_KEY: &str = "restaurant_reviews";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io failure at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Read and decode the blob under `key`; `None` when no blob exists yet.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] on unreadable files or undecodable JSON.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let path = self.key_path(key);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error(&path, e)),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Encode `value` and write the whole blob under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the directory or file cannot be written.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| io_error(&self.dir, e))?;
        let path = self.key_path(key);
        let content = serde_json::to_string_pretty(value)?;
        std::fs::write(&path, content).map_err(|e| io_error(&path, e))?;
        Ok(())
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.display().to_string(),
        source,
    }
}
