//! State backend abstraction
//!
//! A state backend is the key-value store the asset contract runs against.
//! Each call is atomic for a single key. Backends that support transactions
//! are expected to run these calls inside whatever transaction the caller
//! has opened; the contract layer never opens or commits one itself.

pub mod memory;

pub use memory::MemoryState;

use crate::errors::ExError;

/// Key-value state consumed by `AssetStore`
pub trait StateBackend {
    /// Read the bytes stored under `key`, or `None` if the key is absent
    ///
    /// # Errors
    ///
    /// Returns the backend's own error if the read fails.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, ExError>;

    /// Write `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns the backend's own error if the write fails.
    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), ExError>;

    /// Remove `key`; removing an absent key is not an error
    ///
    /// # Errors
    ///
    /// Returns the backend's own error if the delete fails.
    fn delete_state(&mut self, key: &str) -> Result<(), ExError>;
}

impl<B: StateBackend + ?Sized> StateBackend for &mut B {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, ExError> {
        (**self).get_state(key)
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), ExError> {
        (**self).put_state(key, value)
    }

    fn delete_state(&mut self, key: &str) -> Result<(), ExError> {
        (**self).delete_state(key)
    }
}
