// ABOUTME: Key-value persistence collaborator with in-memory and JSON-file implementations
// ABOUTME: Safe helpers never fail the caller: corrupt entries are purged and defaults returned
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

//! # Storage
//!
//! Persisted state is a flat map from fixed string keys (see
//! [`babyspoon_core::constants::storage_keys`]) to JSON documents. The
//! [`KeyValueStore`] trait is the raw seam; [`safe_get`], [`safe_set`] and
//! [`safe_remove`] add typed JSON handling and absorb every failure into a
//! log line plus a default or `false`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error, warn};

/// Raw storage failures
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem failure for a key
    #[error("I/O error for key '{key}': {source}")]
    Io {
        /// Key being accessed
        key: String,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Key contains characters that cannot name a file
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),

    /// Store rejects writes
    #[error("Storage is read-only")]
    ReadOnly,
}

/// Raw string key-value persistence
pub trait KeyValueStore {
    /// Stored document for `key`, `None` when absent
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be read
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store a document under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium rejects the write
    fn set_raw(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`; deleting an absent key succeeds
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium rejects the delete
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Ephemeral store backed by a hash map
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with raw documents
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
            read_only: false,
        }
    }

    /// Make every subsequent write and delete fail
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Whether `key` holds a document
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_raw(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::ReadOnly);
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::ReadOnly);
        }
        self.entries.remove(key);
        Ok(())
    }
}

/// One `<key>.json` file per key inside a data directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Store rooted at `root`; the directory is created on first write
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Data directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_owned()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }

    fn set_raw(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let io_error = |source| StorageError::Io {
            key: key.to_owned(),
            source,
        };
        fs::create_dir_all(&self.root).map_err(io_error)?;

        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value).map_err(io_error)?;
        fs::rename(&staging, &path).map_err(io_error)?;
        debug!(key, path = %path.display(), "Wrote storage entry");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }
}

/// Typed read that never fails.
///
/// Missing keys yield `default`. Unreadable entries are logged and yield
/// `default`. Entries that do not parse as `T` are logged, purged, and yield
/// `default`.
pub fn safe_get<S, T>(store: &mut S, key: &str, default: T) -> T
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let raw = match store.get_raw(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return default,
        Err(e) => {
            error!(key, error = %e, "Failed to read storage entry");
            return default;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "Discarding corrupt storage entry");
            if let Err(remove_error) = store.remove(key) {
                error!(key, error = %remove_error, "Failed to remove corrupt storage entry");
            }
            default
        }
    }
}

/// Typed write; returns whether the value was persisted
pub fn safe_set<S, T>(store: &mut S, key: &str, value: &T) -> bool
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let serialized = match serde_json::to_string(value) {
        Ok(serialized) => serialized,
        Err(e) => {
            error!(key, error = %e, "Failed to serialize storage entry");
            return false;
        }
    };
    match store.set_raw(key, &serialized) {
        Ok(()) => true,
        Err(e) => {
            error!(key, error = %e, "Failed to write storage entry");
            false
        }
    }
}

/// Delete a key; returns whether the delete succeeded
pub fn safe_remove<S>(store: &mut S, key: &str) -> bool
where
    S: KeyValueStore + ?Sized,
{
    match store.remove(key) {
        Ok(()) => true,
        Err(e) => {
            error!(key, error = %e, "Failed to remove storage entry");
            false
        }
    }
}
