//! Asset commands
//!
//! Usage: assetx exists|read|delete <ID>
//!        assetx create|update <ID> <VALUE>

use super::open_db;
use crate::GlobalArgs;
use assetx_engine::commands::{
    asset_create, asset_delete, asset_exists, asset_read, asset_update,
};
use clap::Args;

#[derive(Debug, Args)]
pub struct IdArgs {
    /// Asset id
    pub id: String,
}

#[derive(Debug, Args)]
pub struct ValueArgs {
    /// Asset id
    pub id: String,

    /// Asset value
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

pub fn execute_exists(global: &GlobalArgs, args: IdArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = open_db(global)?;
    println!("{}", asset_exists(&mut conn, &args.id)?);
    Ok(())
}

pub fn execute_create(
    global: &GlobalArgs,
    args: ValueArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = open_db(global)?;
    asset_create(&mut conn, &args.id, args.value)?;
    Ok(())
}

pub fn execute_read(global: &GlobalArgs, args: IdArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = open_db(global)?;
    let asset = asset_read(&mut conn, &args.id)?;
    println!("{}", serde_json::to_string(&asset)?);
    Ok(())
}

pub fn execute_update(
    global: &GlobalArgs,
    args: ValueArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = open_db(global)?;
    asset_update(&mut conn, &args.id, args.value)?;
    Ok(())
}

pub fn execute_delete(global: &GlobalArgs, args: IdArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = open_db(global)?;
    asset_delete(&mut conn, &args.id)?;
    Ok(())
}
