use crate::domain::error::TrackError;
use crate::ports::KeyValueStorePort;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

static SHARED: Lazy<Arc<MemoryStore>> = Lazy::new(|| Arc::new(MemoryStore::new()));

/// In-memory key-value store standing in for the browser cookie jar.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide store used by `Platform::new()`, so every tracker in
    /// the process sees the same slot the way every page script sees the
    /// same cookie jar.
    pub fn shared() -> Arc<MemoryStore> {
        SHARED.clone()
    }

    pub fn insert(&self, name: &str, value: &str) {
        self.entries
            .write()
            .insert(name.to_string(), value.to_string());
    }
}

impl KeyValueStorePort for MemoryStore {
    fn get(&self, name: &str) -> Result<Option<String>, TrackError> {
        Ok(self.entries.read().get(name).cloned())
    }

    fn set(&self, name: &str, value: &str) -> Result<(), TrackError> {
        self.insert(name, value);
        Ok(())
    }
}
