//! Admin credential configuration.

use serde::{Deserialize, Serialize};

/// The single shared admin credential and token lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Admin login name.
    #[serde(default = "default_username")]
    pub username: String,
    /// Admin password, compared verbatim.
    #[serde(default)]
    pub password: String,
    /// How long an issued admin token stays valid, in minutes.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_minutes: u64,
    /// How often expired admin sessions and their editors are swept, in seconds.
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_seconds: u64,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: String::new(),
            session_ttl_minutes: default_session_ttl(),
            sweep_interval_seconds: default_sweep_interval(),
        }
    }
}

fn default_username() -> String {
    "admin".to_string()
}

fn default_session_ttl() -> u64 {
    720
}

fn default_sweep_interval() -> u64 {
    300
}
