//! AssetX Core - asset records over a key-value state backend
//!
//! This crate provides the contract layer for AssetX, including:
//! - The `Asset` record and its JSON wire encoding
//! - The `StateBackend` abstraction and an in-memory implementation
//! - `AssetStore`, the existence-guarded CRUD surface over any backend
//! - Contract metadata (transaction names, capability tags, return types)
//! - A command inventory with a single `apply()` dispatch point
//! - The canonical error and logging facilities shared by every layer

pub mod apply;
pub mod commands;
pub mod contract;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod state;

// Re-export commonly used types
pub use apply::{apply, Outcome};
pub use commands::Command;
pub use contract::{Capability, ContractInfo, Transaction};
pub use errors::{AssetError, ExError, ExErrorKind, Result};
pub use model::Asset;
pub use ops::AssetStore;
pub use state::{MemoryState, StateBackend};
