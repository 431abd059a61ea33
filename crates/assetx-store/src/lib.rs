//! AssetX Store - durable SQLite state backend
//!
//! Provides:
//! - A `StateBackend` implementation over a SQLite connection or transaction
//! - Connection management (open, in-memory, pragma configuration)
//! - Embedded SQL migrations with checksums and idempotent application

pub mod db;
pub mod errors;
pub mod migrations;
pub mod state;

// Re-export key types
pub use errors::Result;
pub use state::SqliteState;
