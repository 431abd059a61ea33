#![allow(dead_code)]

use assetx_core::errors::{ExError, ExErrorKind};
use assetx_core::{AssetStore, MemoryState, StateBackend};

/// Create a new empty store for testing
pub fn new_store() -> AssetStore<RecordingState> {
    AssetStore::new(RecordingState::default())
}

/// Store pre-seeded with assets 1001 and 1002
///
/// Seeding writes raw bytes directly so the recorded call log starts empty.
pub fn seeded_store() -> AssetStore<RecordingState> {
    let mut state = MemoryState::new();
    state.insert_raw("1001", r#"{"value":"my car asset 1001 value"}"#);
    state.insert_raw("1002", r#"{"value":"my car asset 1002 value"}"#);
    AssetStore::new(RecordingState::wrap(state))
}

/// A write observed by `RecordingState`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Write {
    Put(String, Vec<u8>),
    Delete(String),
}

/// Memory backend that records every write made against it
#[derive(Debug, Default)]
pub struct RecordingState {
    pub inner: MemoryState,
    pub writes: Vec<Write>,
}

impl RecordingState {
    pub fn wrap(inner: MemoryState) -> Self {
        Self {
            inner,
            writes: Vec::new(),
        }
    }
}

impl StateBackend for RecordingState {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, ExError> {
        self.inner.get_state(key)
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), ExError> {
        self.writes.push(Write::Put(key.to_string(), value.clone()));
        self.inner.put_state(key, value)
    }

    fn delete_state(&mut self, key: &str) -> Result<(), ExError> {
        self.writes.push(Write::Delete(key.to_string()));
        self.inner.delete_state(key)
    }
}

/// Backend whose every call fails with a persistence error
pub struct FailingState;

pub fn backend_failure() -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("get_state")
        .with_message("state backend unavailable")
}

impl StateBackend for FailingState {
    fn get_state(&self, _key: &str) -> Result<Option<Vec<u8>>, ExError> {
        Err(backend_failure())
    }

    fn put_state(&mut self, _key: &str, _value: Vec<u8>) -> Result<(), ExError> {
        Err(backend_failure())
    }

    fn delete_state(&mut self, _key: &str) -> Result<(), ExError> {
        Err(backend_failure())
    }
}
