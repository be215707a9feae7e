//! In-memory blob storage for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::StorageBackend;
use crate::error::Result;

/// Map-backed storage. Clones share the same underlying map, which lets a
/// test hand one handle to a store and keep another to inspect or to build
/// a second store over the same persisted state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    blobs: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty shared storage handle.
    #[must_use]
    pub fn shared() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let blobs = self.blobs.lock().map_err(poisoned)?;
        Ok(blobs.get(key).cloned())
    }

    fn store(&self, key: &str, value: &str) -> Result<()> {
        let mut blobs = self.blobs.lock().map_err(poisoned)?;
        blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut blobs = self.blobs.lock().map_err(poisoned)?;
        blobs.remove(key);
        Ok(())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> crate::error::StoreError {
    std::io::Error::other("storage mutex poisoned").into()
}
