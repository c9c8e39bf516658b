//! Well-known file layout within a town root. Pure path arithmetic, no I/O.

use std::path::{Path, PathBuf};

/// Directory holding town-level config files.
pub const MAYOR_DIR: &str = "mayor";

/// Town config file name.
pub const TOWN_CONFIG_FILE: &str = "town.json";

/// Rig registry file name.
pub const RIGS_CONFIG_FILE: &str = "rigs.json";

/// Per-agent state file name.
pub const AGENT_STATE_FILE: &str = "state.json";

/// Path of the town config: `<root>/mayor/town.json`.
pub fn town_config_path(root: &Path) -> PathBuf {
    root.join(MAYOR_DIR).join(TOWN_CONFIG_FILE)
}

/// Path of the rig registry: `<root>/mayor/rigs.json`.
pub fn rigs_config_path(root: &Path) -> PathBuf {
    root.join(MAYOR_DIR).join(RIGS_CONFIG_FILE)
}

/// Path of an agent's state file: `<root>/<role>/state.json`.
pub fn agent_state_path(root: &Path, role: &str) -> PathBuf {
    root.join(role).join(AGENT_STATE_FILE)
}
