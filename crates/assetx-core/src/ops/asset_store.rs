use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{AssetError, Result};
use crate::model::{decode_record, encode_record, Asset};
use crate::state::StateBackend;

/// Existence-guarded CRUD over a state backend
///
/// Every mutating call checks presence first and aborts before touching the
/// backend when the precondition fails, so a failed call never writes.
/// The guard is a plain read-before-write; detecting conflicting concurrent
/// writers is left to the backend's transaction.
///
/// `T` is the stored record type. It defaults to `Asset`, but any
/// serde-serializable record works without changes here.
#[derive(Debug)]
pub struct AssetStore<B, T = Asset> {
    backend: B,
    _record: PhantomData<fn() -> T>,
}

impl<B, T> AssetStore<B, T>
where
    B: StateBackend,
    T: Serialize + DeserializeOwned,
{
    /// Wrap a state backend
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            _record: PhantomData,
        }
    }

    /// Borrow the underlying backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Check whether an asset is present
    ///
    /// A key holding zero bytes counts as absent. An empty id is never
    /// present and does not reach the backend.
    ///
    /// # Errors
    ///
    /// Only backend failures, passed through unchanged.
    pub fn exists(&self, asset_id: &str) -> Result<bool> {
        if asset_id.is_empty() {
            return Ok(false);
        }
        Ok(self.fetch(asset_id)?.is_some())
    }

    /// Create a new asset
    ///
    /// # Errors
    ///
    /// * `InvalidAssetId` - If `asset_id` is empty
    /// * `AlreadyExists` - If the asset is already present
    /// * `Backend` - If the backend read or write fails
    pub fn create(&mut self, asset_id: &str, record: &T) -> Result<()> {
        validate_asset_id(asset_id)?;
        if self.exists(asset_id)? {
            return Err(AssetError::AlreadyExists {
                asset_id: asset_id.to_string(),
            });
        }

        let bytes = encode_record(asset_id, record)?;
        tracing::debug!(asset_id, bytes = bytes.len(), "writing new asset");
        self.backend.put_state(asset_id, bytes)?;
        Ok(())
    }

    /// Read an asset, returning a freshly decoded copy
    ///
    /// # Errors
    ///
    /// * `InvalidAssetId` - If `asset_id` is empty
    /// * `NotFound` - If the asset is absent
    /// * `Serialization` - If the stored bytes do not decode as `T`
    /// * `Backend` - If the backend read fails
    pub fn read(&self, asset_id: &str) -> Result<T> {
        validate_asset_id(asset_id)?;
        let bytes = self
            .fetch(asset_id)?
            .ok_or_else(|| AssetError::NotFound {
                asset_id: asset_id.to_string(),
            })?;
        decode_record(asset_id, &bytes)
    }

    /// Replace an existing asset's record in full
    ///
    /// # Errors
    ///
    /// * `InvalidAssetId` - If `asset_id` is empty
    /// * `NotFound` - If the asset is absent
    /// * `Backend` - If the backend read or write fails
    pub fn update(&mut self, asset_id: &str, record: &T) -> Result<()> {
        validate_asset_id(asset_id)?;
        self.require_present(asset_id)?;

        let bytes = encode_record(asset_id, record)?;
        tracing::debug!(asset_id, bytes = bytes.len(), "replacing asset");
        self.backend.put_state(asset_id, bytes)?;
        Ok(())
    }

    /// Remove an existing asset
    ///
    /// # Errors
    ///
    /// * `InvalidAssetId` - If `asset_id` is empty
    /// * `NotFound` - If the asset is absent
    /// * `Backend` - If the backend read or delete fails
    pub fn delete(&mut self, asset_id: &str) -> Result<()> {
        validate_asset_id(asset_id)?;
        self.require_present(asset_id)?;

        tracing::debug!(asset_id, "deleting asset");
        self.backend.delete_state(asset_id)?;
        Ok(())
    }

    fn require_present(&self, asset_id: &str) -> Result<()> {
        if !self.exists(asset_id)? {
            return Err(AssetError::NotFound {
                asset_id: asset_id.to_string(),
            });
        }
        Ok(())
    }

    /// Stored bytes for `asset_id`, with zero-length values treated as absent
    fn fetch(&self, asset_id: &str) -> Result<Option<Vec<u8>>> {
        let bytes = self.backend.get_state(asset_id)?;
        Ok(bytes.filter(|b| !b.is_empty()))
    }
}

fn validate_asset_id(asset_id: &str) -> Result<()> {
    if asset_id.is_empty() {
        return Err(AssetError::InvalidAssetId {
            reason: "Asset id cannot be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MemoryState;
    use serde::Deserialize;

    fn new_store() -> AssetStore<MemoryState> {
        AssetStore::new(MemoryState::new())
    }

    #[test]
    fn test_exists_false_on_empty_store() {
        let store = new_store();
        assert!(!store.exists("1001").unwrap());
    }

    #[test]
    fn test_exists_empty_id_is_false() {
        let store = new_store();
        assert!(!store.exists("").unwrap());
    }

    #[test]
    fn test_zero_length_value_counts_as_absent() {
        let mut state = MemoryState::new();
        state.insert_raw("1001", Vec::<u8>::new());
        let mut store: AssetStore<MemoryState> = AssetStore::new(state);

        assert!(!store.exists("1001").unwrap());
        assert!(matches!(
            store.read("1001"),
            Err(AssetError::NotFound { .. })
        ));
        store.create("1001", &Asset::new("fresh")).unwrap();
        assert_eq!(store.read("1001").unwrap().value, "fresh");
    }

    #[test]
    fn test_create_rejects_empty_id_without_writing() {
        let mut store = new_store();
        let result = store.create("", &Asset::new("x"));
        assert!(matches!(result, Err(AssetError::InvalidAssetId { .. })));
        assert!(store.backend().is_empty());
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Car {
        make: String,
        seats: u8,
    }

    #[test]
    fn test_generic_record_round_trip() {
        let mut store: AssetStore<MemoryState, Car> = AssetStore::new(MemoryState::new());
        let car = Car {
            make: "Volvo".to_string(),
            seats: 5,
        };

        store.create("car-1", &car).unwrap();
        assert_eq!(store.read("car-1").unwrap(), car);
        assert_eq!(
            store.backend().raw("car-1").unwrap(),
            br#"{"make":"Volvo","seats":5}"#
        );
    }

    #[test]
    fn test_read_with_wrong_shape_is_serialization_error() {
        let mut state = MemoryState::new();
        state.insert_raw("1001", r#"{"value":"x"}"#);
        let store: AssetStore<MemoryState, Car> = AssetStore::new(state);

        assert!(matches!(
            store.read("1001"),
            Err(AssetError::Serialization { .. })
        ));
    }
}
