//! SQLite state backend
//!
//! Stores each key's raw bytes in the `world_state` table. The backend only
//! borrows a connection; build it on a `rusqlite::Transaction` and every
//! read and write joins that transaction, so committing or rolling back is
//! entirely the caller's decision.

use crate::errors::state_error;
use assetx_core::errors::ExError;
use assetx_core::StateBackend;
use rusqlite::{Connection, OptionalExtension};

/// `StateBackend` over a borrowed SQLite connection or transaction
#[derive(Debug, Clone, Copy)]
pub struct SqliteState<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteState<'conn> {
    /// Wrap a connection; pass `&tx` to run inside a transaction
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl StateBackend for SqliteState<'_> {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, ExError> {
        self.conn
            .query_row(
                "SELECT value FROM world_state WHERE key = ?1",
                [key],
                |row| row.get::<_, Vec<u8>>(0),
            )
            .optional()
            .map_err(|e| state_error("get_state", key, e))
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), ExError> {
        self.conn
            .execute(
                "INSERT INTO world_state (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                rusqlite::params![key, value],
            )
            .map_err(|e| state_error("put_state", key, e))?;
        Ok(())
    }

    fn delete_state(&mut self, key: &str) -> Result<(), ExError> {
        self.conn
            .execute("DELETE FROM world_state WHERE key = ?1", [key])
            .map_err(|e| state_error("delete_state", key, e))?;
        Ok(())
    }
}
