//! State backends backed by SQLite

pub mod sqlite_state;

pub use sqlite_state::SqliteState;
