//! Town configuration: the record behind `mayor/town.json`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Current schema version for [`TownConfig`].
pub const CURRENT_TOWN_VERSION: u32 = 1;

/// Record type discriminator expected in every town config.
pub const TOWN_CONFIG_TYPE: &str = "town";

/// Main town configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TownConfig {
    /// Record type discriminator, always `"town"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Schema version.
    pub version: u32,
    /// Town identifier.
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl TownConfig {
    /// Create a new town config with the current schema version,
    /// stamped with the current time.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            kind: TOWN_CONFIG_TYPE.to_string(),
            version: CURRENT_TOWN_VERSION,
            name: name.into(),
            created_at: Utc::now(),
        }
    }

    /// Validate semantic constraints. Pure check, no I/O.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.kind != TOWN_CONFIG_TYPE {
            return Err(ConfigError::Validation(format!(
                "Town config type must be \"{}\", got \"{}\"",
                TOWN_CONFIG_TYPE, self.kind
            )));
        }
        if self.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Town name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
