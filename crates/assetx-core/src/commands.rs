//! Command types representing the asset contract transactions
//!
//! This module defines the command inventory that serves as the entry point
//! for contract operations via the `apply()` function.

use crate::contract::Transaction;
use crate::errors::{AssetError, Result};

/// Command enum representing one contract invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Check whether an asset exists
    AssetExists { asset_id: String },

    /// Create a new asset
    AssetCreate { asset_id: String, value: String },

    /// Read an asset
    AssetRead { asset_id: String },

    /// Replace an asset's value
    AssetUpdate { asset_id: String, value: String },

    /// Delete an asset
    AssetDelete { asset_id: String },
}

impl Command {
    /// Build a command from a function name and positional arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidInvocation` if the name is unknown or the argument
    /// count does not match the transaction's arity.
    pub fn from_invocation(function: &str, args: &[String]) -> Result<Self> {
        let transaction = Transaction::from_name(function)?;
        if args.len() != transaction.arity() {
            return Err(AssetError::InvalidInvocation {
                reason: format!(
                    "{} expects {} argument(s), got {}",
                    transaction,
                    transaction.arity(),
                    args.len()
                ),
            });
        }

        let asset_id = args[0].clone();
        let cmd = match transaction {
            Transaction::AssetExists => Command::AssetExists { asset_id },
            Transaction::CreateAsset => Command::AssetCreate {
                asset_id,
                value: args[1].clone(),
            },
            Transaction::ReadAsset => Command::AssetRead { asset_id },
            Transaction::UpdateAsset => Command::AssetUpdate {
                asset_id,
                value: args[1].clone(),
            },
            Transaction::DeleteAsset => Command::AssetDelete { asset_id },
        };
        Ok(cmd)
    }

    /// The contract transaction this command invokes
    pub fn transaction(&self) -> Transaction {
        match self {
            Command::AssetExists { .. } => Transaction::AssetExists,
            Command::AssetCreate { .. } => Transaction::CreateAsset,
            Command::AssetRead { .. } => Transaction::ReadAsset,
            Command::AssetUpdate { .. } => Transaction::UpdateAsset,
            Command::AssetDelete { .. } => Transaction::DeleteAsset,
        }
    }

    /// The asset id targeted by this command
    pub fn asset_id(&self) -> &str {
        match self {
            Command::AssetExists { asset_id }
            | Command::AssetCreate { asset_id, .. }
            | Command::AssetRead { asset_id }
            | Command::AssetUpdate { asset_id, .. }
            | Command::AssetDelete { asset_id } => asset_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_invocation_create() {
        let cmd = Command::from_invocation("create_asset", &args(&["1001", "v"])).unwrap();
        assert_eq!(
            cmd,
            Command::AssetCreate {
                asset_id: "1001".to_string(),
                value: "v".to_string(),
            }
        );
        assert_eq!(cmd.transaction(), Transaction::CreateAsset);
        assert_eq!(cmd.asset_id(), "1001");
    }

    #[test]
    fn test_from_invocation_wrong_arity() {
        let err = Command::from_invocation("read_asset", &args(&["1001", "extra"])).unwrap_err();
        match err {
            AssetError::InvalidInvocation { reason } => {
                assert!(reason.contains("expects 1"));
            }
            other => panic!("Expected InvalidInvocation, got {:?}", other),
        }
    }

    #[test]
    fn test_from_invocation_no_args() {
        let result = Command::from_invocation("asset_exists", &[]);
        assert!(matches!(result, Err(AssetError::InvalidInvocation { .. })));
    }
}
