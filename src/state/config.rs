//! Store-wide configuration (`config.json`).

use serde::{Deserialize, Serialize};

/// Schema version written to `config.json`.
pub const CONFIG_SCHEMA_VERSION: &str = "1.0.0";

/// Global state shared by all projects in a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(alias = "version")]
    pub schema_version: String,

    /// Project used when a command is not given one explicitly.
    #[serde(default)]
    pub active_project: Option<String>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            schema_version: CONFIG_SCHEMA_VERSION.to_string(),
            active_project: None,
        }
    }
}
