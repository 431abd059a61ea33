//! JSON wire encoding for stored records
//!
//! Records are stored as compact UTF-8 JSON with no envelope or version tag.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{AssetError, Result};

/// Encode a record into the bytes written to the state backend
///
/// # Errors
///
/// Returns `Serialization` if the record cannot be represented as JSON.
pub fn encode_record<T: Serialize>(asset_id: &str, record: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(record).map_err(|e| AssetError::Serialization {
        asset_id: asset_id.to_string(),
        reason: e.to_string(),
    })
}

/// Decode bytes read from the state backend into a fresh record
///
/// # Errors
///
/// Returns `Serialization` if the bytes are not valid JSON for `T`.
pub fn decode_record<T: DeserializeOwned>(asset_id: &str, bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|e| AssetError::Serialization {
        asset_id: asset_id.to_string(),
        reason: e.to_string(),
    })
}
