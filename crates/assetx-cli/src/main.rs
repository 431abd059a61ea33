//! AssetX CLI
//!
//! Command-line interface for the asset contract

use assetx_core::logging_facility::{self, Profile};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "assetx")]
#[command(about = "AssetX - Asset records over a durable ledger state store", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every subcommand
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Path to the state database
    #[arg(long, global = true, env = "ASSETX_DB", default_value = ".assetx/state.db")]
    pub db: PathBuf,

    /// Log output format (human or json)
    #[arg(long, global = true, env = "ASSETX_LOG_FORMAT", default_value = "human")]
    pub log_format: Profile,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check whether an asset exists
    Exists(commands::asset::IdArgs),
    /// Create a new asset
    Create(commands::asset::ValueArgs),
    /// Print an asset's stored record as JSON
    Read(commands::asset::IdArgs),
    /// Replace an asset's value
    Update(commands::asset::ValueArgs),
    /// Delete an asset
    Delete(commands::asset::IdArgs),
    /// Invoke a contract transaction by function name
    Invoke(commands::invoke::InvokeArgs),
    /// List contract transactions
    Functions,
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.global.log_format);

    let result = match cli.command {
        Commands::Exists(args) => commands::asset::execute_exists(&cli.global, args),
        Commands::Create(args) => commands::asset::execute_create(&cli.global, args),
        Commands::Read(args) => commands::asset::execute_read(&cli.global, args),
        Commands::Update(args) => commands::asset::execute_update(&cli.global, args),
        Commands::Delete(args) => commands::asset::execute_delete(&cli.global, args),
        Commands::Invoke(args) => commands::invoke::execute(&cli.global, args),
        Commands::Functions => commands::functions::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
