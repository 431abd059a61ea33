//! Command orchestration layer.
//!
//! Provides high-level command functions that coordinate between
//! contract logic and the persistence layer.

pub mod asset;
pub mod engine_command;

pub use asset::{asset_create, asset_delete, asset_exists, asset_read, asset_update};
pub use engine_command::apply_engine_command;
