//! Load and save config records as JSON files on disk.
//!
//! Every save is a whole-file replace: the record is validated where a
//! validation rule exists, parent directories are created, and the
//! serialized form is written in one call. Loads deserialize whatever is
//! on disk without re-running semantic validation; concurrent access
//! coordination is the caller's responsibility.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::agent::AgentState;
use crate::error::ConfigError;
use crate::rigs::RigsConfig;
use crate::town::TownConfig;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| ConfigError::Decode {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut content = serde_json::to_string_pretty(value).map_err(ConfigError::Encode)?;
    content.push('\n');

    fs::write(path, content).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Save a town config to `path`, creating parent directories as needed.
///
/// The config is validated before anything is written.
pub fn save_town_config(path: &Path, config: &TownConfig) -> Result<(), ConfigError> {
    config.validate()?;
    write_json(path, config)?;
    debug!("Saved town config to {}", path.display());
    Ok(())
}

/// Load a town config from `path`.
pub fn load_town_config(path: &Path) -> Result<TownConfig, ConfigError> {
    let config = read_json(path)?;
    debug!("Loaded town config from {}", path.display());
    Ok(config)
}

/// Save the rig registry to `path`, creating parent directories as needed.
pub fn save_rigs_config(path: &Path, config: &RigsConfig) -> Result<(), ConfigError> {
    write_json(path, config)?;
    debug!("Saved rigs config to {}", path.display());
    Ok(())
}

/// Load the rig registry from `path`.
pub fn load_rigs_config(path: &Path) -> Result<RigsConfig, ConfigError> {
    let config = read_json(path)?;
    debug!("Loaded rigs config from {}", path.display());
    Ok(config)
}

/// Save an agent's state to `path`, creating parent directories as needed.
///
/// The state is validated before anything is written.
pub fn save_agent_state(path: &Path, state: &AgentState) -> Result<(), ConfigError> {
    state.validate()?;
    write_json(path, state)?;
    debug!("Saved agent state to {}", path.display());
    Ok(())
}

/// Load an agent's state from `path`.
pub fn load_agent_state(path: &Path) -> Result<AgentState, ConfigError> {
    let state = read_json(path)?;
    debug!("Loaded agent state from {}", path.display());
    Ok(state)
}
