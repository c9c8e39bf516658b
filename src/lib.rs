//! Gastown: Configuration Persistence for Gas Town Workspaces
//!
//! JSON-backed storage for the records that describe a town: the town
//! configuration itself, the rig registry, and per-agent state files.

pub mod agent;
pub mod error;
pub mod paths;
pub mod rigs;
pub mod store;
pub mod town;
