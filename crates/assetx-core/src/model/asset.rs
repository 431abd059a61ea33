use serde::{Deserialize, Serialize};

/// The asset record held under each asset id
///
/// Serializes to exactly one JSON field: `{"value":"..."}`. The id is the
/// state key and is never part of the stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub value: String,
}

impl Asset {
    /// Create a new asset record with the given payload
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}
