//! Asset command handlers with boundary logging.
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for asset operations:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()` for internal details.
//!
//! ## Transactions
//!
//! Each call runs in its own SQLite transaction. Read-only operations open a
//! deferred transaction; mutating ones take the write lock up front with an
//! immediate transaction. A failed operation drops its transaction, which
//! rolls back anything it wrote.

use assetx_core::ops::asset_ops;
use assetx_core::{log_op_end, log_op_error, log_op_start};
use assetx_core::{Asset, AssetStore, Transaction};
use assetx_store::errors::{from_rusqlite, Result};
use assetx_store::SqliteState;
use rusqlite::{Connection, TransactionBehavior};

/// Check whether an asset exists
///
/// ## Errors
///
/// - `Persistence`: Database error
pub fn asset_exists(conn: &mut Connection, asset_id: &str) -> Result<bool> {
    run_logged(Transaction::AssetExists, asset_id, conn, |store| {
        asset_ops::asset_exists(store, asset_id)
    })
}

/// Create an asset
///
/// ## Errors
///
/// - `AlreadyExists`: An asset with this id is present
/// - `InvalidInput`: Empty asset id
/// - `Persistence`: Database error
pub fn asset_create(conn: &mut Connection, asset_id: &str, value: String) -> Result<()> {
    run_logged(Transaction::CreateAsset, asset_id, conn, |store| {
        asset_ops::create_asset(store, asset_id, value)
    })
}

/// Read an asset
///
/// ## Errors
///
/// - `NotFound`: No asset with this id
/// - `Serialization`: Stored bytes are not a valid asset record
/// - `Persistence`: Database error
pub fn asset_read(conn: &mut Connection, asset_id: &str) -> Result<Asset> {
    run_logged(Transaction::ReadAsset, asset_id, conn, |store| {
        asset_ops::read_asset(store, asset_id)
    })
}

/// Replace an asset's value
///
/// ## Errors
///
/// - `NotFound`: No asset with this id
/// - `Persistence`: Database error
pub fn asset_update(conn: &mut Connection, asset_id: &str, value: String) -> Result<()> {
    run_logged(Transaction::UpdateAsset, asset_id, conn, |store| {
        asset_ops::update_asset(store, asset_id, value)
    })
}

/// Delete an asset
///
/// ## Errors
///
/// - `NotFound`: No asset with this id
/// - `Persistence`: Database error
pub fn asset_delete(conn: &mut Connection, asset_id: &str) -> Result<()> {
    run_logged(Transaction::DeleteAsset, asset_id, conn, |store| {
        asset_ops::delete_asset(store, asset_id)
    })
}

/// Run one contract operation with lifecycle logging around it
pub(crate) fn run_logged<R, F>(
    transaction: Transaction,
    asset_id: &str,
    conn: &mut Connection,
    op: F,
) -> Result<R>
where
    F: FnOnce(&mut AssetStore<SqliteState<'_>>) -> assetx_core::Result<R>,
{
    let name = transaction.name();
    let capability = transaction.capability();
    log_op_start!(name, asset_id = asset_id, capability = capability.as_str());
    let start = std::time::Instant::now();

    let result = run_in_transaction(transaction, conn, op).map_err(|e| {
        log_op_error!(
            name,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            asset_id = asset_id
        );
        e
    })?;

    log_op_end!(
        name,
        duration_ms = start.elapsed().as_millis() as u64,
        asset_id = asset_id
    );

    Ok(result)
}

fn run_in_transaction<R, F>(transaction: Transaction, conn: &mut Connection, op: F) -> Result<R>
where
    F: FnOnce(&mut AssetStore<SqliteState<'_>>) -> assetx_core::Result<R>,
{
    let behavior = if transaction.capability().is_mutating() {
        TransactionBehavior::Immediate
    } else {
        TransactionBehavior::Deferred
    };
    let tx = conn
        .transaction_with_behavior(behavior)
        .map_err(from_rusqlite)?;

    let value = {
        let mut store = AssetStore::new(SqliteState::new(&tx));
        op(&mut store)?
    };

    tx.commit().map_err(from_rusqlite)?;
    Ok(value)
}
