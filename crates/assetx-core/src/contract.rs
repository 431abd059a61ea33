//! Contract metadata
//!
//! Describes the asset contract's transactions as plain data so a deployment
//! harness can decide how to run each one (read-only query vs. submitted
//! transaction) without inspecting the implementation.

use std::fmt;

use crate::errors::{AssetError, Result};

/// Title and description advertised for the contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractInfo {
    pub title: &'static str,
    pub description: &'static str,
}

/// Metadata for the asset contract
pub const ASSET_CONTRACT: ContractInfo = ContractInfo {
    title: "AssetContract",
    description: "Asset ledger contract",
};

/// Whether a transaction may change state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Evaluated against state, never writes
    ReadOnly,
    /// May issue backend writes; must run inside a write transaction
    Mutating,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::ReadOnly => "read-only",
            Capability::Mutating => "mutating",
        }
    }

    pub fn is_mutating(&self) -> bool {
        matches!(self, Capability::Mutating)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five asset contract transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transaction {
    AssetExists,
    CreateAsset,
    ReadAsset,
    UpdateAsset,
    DeleteAsset,
}

impl Transaction {
    /// All transactions in declaration order
    pub fn all() -> [Transaction; 5] {
        [
            Transaction::AssetExists,
            Transaction::CreateAsset,
            Transaction::ReadAsset,
            Transaction::UpdateAsset,
            Transaction::DeleteAsset,
        ]
    }

    /// Function name used for invocation
    pub fn name(&self) -> &'static str {
        match self {
            Transaction::AssetExists => "asset_exists",
            Transaction::CreateAsset => "create_asset",
            Transaction::ReadAsset => "read_asset",
            Transaction::UpdateAsset => "update_asset",
            Transaction::DeleteAsset => "delete_asset",
        }
    }

    pub fn capability(&self) -> Capability {
        match self {
            Transaction::AssetExists | Transaction::ReadAsset => Capability::ReadOnly,
            Transaction::CreateAsset | Transaction::UpdateAsset | Transaction::DeleteAsset => {
                Capability::Mutating
            }
        }
    }

    /// Declared return type tag
    pub fn returns(&self) -> &'static str {
        match self {
            Transaction::AssetExists => "boolean",
            Transaction::ReadAsset => "Asset",
            Transaction::CreateAsset | Transaction::UpdateAsset | Transaction::DeleteAsset => {
                "void"
            }
        }
    }

    /// Number of positional string arguments
    pub fn arity(&self) -> usize {
        match self {
            Transaction::AssetExists | Transaction::ReadAsset | Transaction::DeleteAsset => 1,
            Transaction::CreateAsset | Transaction::UpdateAsset => 2,
        }
    }

    /// Look up a transaction by its function name
    ///
    /// # Errors
    ///
    /// Returns `InvalidInvocation` for an unknown name.
    pub fn from_name(name: &str) -> Result<Self> {
        Transaction::all()
            .into_iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| AssetError::InvalidInvocation {
                reason: format!("unknown function '{}'", name),
            })
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
