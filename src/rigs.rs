//! Rig registry: the record behind `mayor/rigs.json`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Current schema version for [`RigsConfig`].
pub const CURRENT_RIGS_VERSION: u32 = 1;

/// Registry of rigs tracked by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RigsConfig {
    /// Schema version.
    pub version: u32,
    /// Registered rigs, keyed by rig name.
    #[serde(default)]
    pub rigs: HashMap<String, RigEntry>,
}

impl RigsConfig {
    /// Create an empty registry with the current schema version.
    pub fn new() -> Self {
        Self {
            version: CURRENT_RIGS_VERSION,
            rigs: HashMap::new(),
        }
    }
}

impl Default for RigsConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A single rig in the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RigEntry {
    /// Git URL the rig was added from.
    pub git_url: String,
    pub added_at: DateTime<Utc>,
    /// Beads issue-tracker integration; absent when not configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beads: Option<BeadsConfig>,
}

/// Beads issue-tracker settings for a rig.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeadsConfig {
    /// Beads repo location: `"local"`, a filesystem path, or a git URL.
    /// Interpreted by the caller.
    pub repo: String,
    /// Issue-ID prefix, e.g. `"gt-"`.
    pub prefix: String,
}
