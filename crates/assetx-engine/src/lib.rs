//! AssetX Engine - Orchestration layer
//!
//! Runs contract operations against the SQLite state backend, one
//! transaction per call, and owns lifecycle logging for them.

pub mod commands;
