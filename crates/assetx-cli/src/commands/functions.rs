//! Functions command
//!
//! Usage: assetx functions

use assetx_core::contract::ASSET_CONTRACT;
use assetx_core::Transaction;

/// Print the contract's transactions with their capability and return type
pub fn execute() -> Result<(), Box<dyn std::error::Error>> {
    println!("{} - {}", ASSET_CONTRACT.title, ASSET_CONTRACT.description);
    for transaction in Transaction::all() {
        println!(
            "  {:<14} {:<10} -> {}",
            transaction.name(),
            transaction.capability(),
            transaction.returns()
        );
    }
    Ok(())
}
