//! Agent state: the record behind `<role>/state.json`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::ConfigError;

/// Persisted state for a role-bearing agent ("mayor", "witness", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentState {
    /// Role name. Must be non-empty for the state to be valid.
    pub role: String,
    pub last_active: DateTime<Utc>,
    /// Active session identifier; `None` means no active session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
    /// Open-ended extension data, carried through save/load untouched.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, serde_json::Value>,
}

impl AgentState {
    /// Create a fresh state for `role`, stamped with the current time.
    pub fn new(role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            last_active: Utc::now(),
            session: None,
            extra: HashMap::new(),
        }
    }

    /// Validate semantic constraints. Pure check, no I/O.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.role.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Agent role cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
