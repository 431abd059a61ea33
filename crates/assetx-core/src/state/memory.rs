use std::collections::BTreeMap;

use super::StateBackend;
use crate::errors::ExError;

/// In-memory state backend
///
/// Ordered map from key to raw bytes. Not thread-safe; designed for
/// single-threaded use in tests and demos.
#[derive(Debug, Clone, Default)]
pub struct MemoryState {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryState {
    /// Create a new empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw bytes stored under `key`, bypassing any decoding
    pub fn raw(&self, key: &str) -> Option<&[u8]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Insert raw bytes directly, bypassing the contract guards
    ///
    /// This is useful for seeding state in tests.
    pub fn insert_raw(&mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.entries.insert(key.into(), value.into());
    }

    /// All keys currently present, in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StateBackend for MemoryState {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, ExError> {
        Ok(self.entries.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), ExError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn delete_state(&mut self, key: &str) -> Result<(), ExError> {
        self.entries.remove(key);
        Ok(())
    }
}
