//! Key/value string storage
//!
//! Mirrors the `localStorage` surface the game needs: get, set, remove.

use std::collections::HashMap;

use crate::error::PlatformError;

pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, PlatformError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PlatformError>;
    fn remove(&mut self, key: &str) -> Result<(), PlatformError>;
}

/// In-memory storage for native builds and tests
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.to_string(), value.to_string());
        storage
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PlatformError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PlatformError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PlatformError> {
        self.entries.remove(key);
        Ok(())
    }
}
