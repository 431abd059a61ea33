//! Engine-level dispatch for contract commands.

use crate::commands::asset::run_logged;
use assetx_core::{apply, Command, Outcome};
use assetx_store::errors::Result;
use rusqlite::Connection;

/// Apply a contract command against the database in its own transaction.
///
/// This is the entry point for function-name invocation, where the
/// operation is only known at runtime.
pub fn apply_engine_command(cmd: Command, conn: &mut Connection) -> Result<Outcome> {
    let transaction = cmd.transaction();
    let asset_id = cmd.asset_id().to_string();
    run_logged(transaction, &asset_id, conn, |store| apply(store, cmd))
}
