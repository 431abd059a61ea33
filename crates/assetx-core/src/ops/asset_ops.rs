//! Asset contract operations over string payloads
//!
//! These are the five contract transactions expressed as free functions over
//! an `AssetStore` holding `Asset` records.

use super::AssetStore;
use crate::errors::Result;
use crate::model::Asset;
use crate::state::StateBackend;

/// Check whether an asset exists
///
/// # Errors
/// * `Backend` - If the state backend read fails
pub fn asset_exists<B: StateBackend>(store: &AssetStore<B>, asset_id: &str) -> Result<bool> {
    store.exists(asset_id)
}

/// Create an asset holding `value`
///
/// # Errors
/// * `AlreadyExists` - If an asset with this id is present
/// * `InvalidAssetId` - If the id is empty
pub fn create_asset<B: StateBackend>(
    store: &mut AssetStore<B>,
    asset_id: &str,
    value: String,
) -> Result<()> {
    store.create(asset_id, &Asset { value })
}

/// Read an asset
///
/// # Errors
/// * `NotFound` - If no asset with this id is present
/// * `InvalidAssetId` - If the id is empty
pub fn read_asset<B: StateBackend>(store: &AssetStore<B>, asset_id: &str) -> Result<Asset> {
    store.read(asset_id)
}

/// Replace an asset's value
///
/// # Errors
/// * `NotFound` - If no asset with this id is present
/// * `InvalidAssetId` - If the id is empty
pub fn update_asset<B: StateBackend>(
    store: &mut AssetStore<B>,
    asset_id: &str,
    new_value: String,
) -> Result<()> {
    store.update(asset_id, &Asset { value: new_value })
}

/// Delete an asset
///
/// # Errors
/// * `NotFound` - If no asset with this id is present
/// * `InvalidAssetId` - If the id is empty
pub fn delete_asset<B: StateBackend>(store: &mut AssetStore<B>, asset_id: &str) -> Result<()> {
    store.delete(asset_id)
}
