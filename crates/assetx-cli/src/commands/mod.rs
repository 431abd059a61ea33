pub mod asset;
pub mod functions;
pub mod invoke;

use crate::GlobalArgs;
use rusqlite::Connection;

/// Open the configured database, creating and migrating it on first use
pub fn open_db(global: &GlobalArgs) -> Result<Connection, Box<dyn std::error::Error>> {
    Ok(assetx_store::db::open_ready(&global.db)?)
}
