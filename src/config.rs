use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    // Deployment environment name, echoed by the health endpoint
    #[serde(default = "default_node_env")]
    pub node_env: String,

    // Secrets below are never echoed, only their presence is reported
    #[serde(default)]
    pub openstates_api_key: Option<String>,

    #[serde(default)]
    pub legiscan_api_key: Option<String>,

    #[serde(default)]
    pub database_url: Option<String>,
}

/// Presence flags for the configured secrets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPresence {
    pub has_open_states_key: bool,
    pub has_legi_scan_key: bool,
    pub has_database_url: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<Config>()
    }

    /// Report which secrets are set. An empty value counts as unset.
    pub fn presence(&self) -> ConfigPresence {
        ConfigPresence {
            has_open_states_key: is_set(&self.openstates_api_key),
            has_legi_scan_key: is_set(&self.legiscan_api_key),
            has_database_url: is_set(&self.database_url),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            node_env: default_node_env(),
            openstates_api_key: None,
            legiscan_api_key: None,
            database_url: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let presence = self.presence();
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("node_env", &self.node_env)
            .field("openstates_api_key", &redacted(presence.has_open_states_key))
            .field("legiscan_api_key", &redacted(presence.has_legi_scan_key))
            .field("database_url", &redacted(presence.has_database_url))
            .finish()
    }
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

fn redacted(present: bool) -> &'static str {
    if present {
        "<redacted>"
    } else {
        "<unset>"
    }
}

fn default_port() -> u16 {
    3000
}

fn default_node_env() -> String {
    "development".to_string()
}
