//! Invoke command
//!
//! Usage: assetx invoke <FUNCTION> [ARGS...]

use super::open_db;
use crate::GlobalArgs;
use assetx_core::errors::ExError;
use assetx_core::{Command, Outcome};
use assetx_engine::commands::apply_engine_command;
use clap::Args;

#[derive(Debug, Args)]
pub struct InvokeArgs {
    /// Transaction function name (see `assetx functions`)
    pub function: String,

    /// Positional string arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Execute invoke command
pub fn execute(global: &GlobalArgs, args: InvokeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let cmd = Command::from_invocation(&args.function, &args.args).map_err(ExError::from)?;

    let mut conn = open_db(global)?;
    match apply_engine_command(cmd, &mut conn)? {
        Outcome::Exists(exists) => println!("{}", exists),
        Outcome::Asset(asset) => println!("{}", serde_json::to_string(&asset)?),
        Outcome::Done => {}
    }
    Ok(())
}
