//! The two browser-storage analogs the session store writes to: a durable
//! scope that survives restarts and a tab scope that lives only as long as
//! the process.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use tracing::warn;

/// A string key-value scope. Writes are best-effort: a failing durable write
/// degrades to an unsaved session rather than an error the login flow would
/// have to surface.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Tab-scoped storage: in-memory, gone when the process ends.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// Durable storage: one JSON file per key under a fixed directory.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = fs::create_dir_all(&self.dir) {
            warn!(%err, dir = %self.dir.display(), "could not create storage directory");
            return;
        }
        if let Err(err) = fs::write(self.path_for(key), value) {
            warn!(%err, key, "durable storage write failed");
        }
    }

    fn remove(&self, key: &str) {
        // Missing file means the key was never set; both count as removed.
        let _ = fs::remove_file(self.path_for(key));
    }
}
