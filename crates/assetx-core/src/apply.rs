//! Single dispatch point for contract commands
//!
//! ## Example
//!
//! ```
//! use assetx_core::{apply, AssetStore, Command, MemoryState, Outcome};
//!
//! let mut store: AssetStore<MemoryState> = AssetStore::new(MemoryState::new());
//! let cmd = Command::AssetCreate {
//!     asset_id: "1001".to_string(),
//!     value: "my car asset 1001 value".to_string(),
//! };
//!
//! assert_eq!(apply(&mut store, cmd).unwrap(), Outcome::Done);
//! ```

use crate::commands::Command;
use crate::errors::Result;
use crate::model::Asset;
use crate::ops::{asset_ops, AssetStore};
use crate::state::StateBackend;

/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Answer to `AssetExists`
    Exists(bool),
    /// Record returned by `AssetRead`
    Asset(Asset),
    /// A mutating command completed
    Done,
}

/// Apply a command to an asset store
///
/// A failed precondition leaves the backend untouched.
///
/// # Errors
///
/// Returns whatever the underlying operation returns; see `AssetError`.
pub fn apply<B: StateBackend>(store: &mut AssetStore<B>, cmd: Command) -> Result<Outcome> {
    match cmd {
        Command::AssetExists { asset_id } => {
            asset_ops::asset_exists(store, &asset_id).map(Outcome::Exists)
        }

        Command::AssetCreate { asset_id, value } => {
            asset_ops::create_asset(store, &asset_id, value)?;
            Ok(Outcome::Done)
        }

        Command::AssetRead { asset_id } => {
            asset_ops::read_asset(store, &asset_id).map(Outcome::Asset)
        }

        Command::AssetUpdate { asset_id, value } => {
            asset_ops::update_asset(store, &asset_id, value)?;
            Ok(Outcome::Done)
        }

        Command::AssetDelete { asset_id } => {
            asset_ops::delete_asset(store, &asset_id)?;
            Ok(Outcome::Done)
        }
    }
}
