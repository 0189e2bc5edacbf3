use std::{
    path::Path,
    time::Duration,
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::persistence;

pub const SETTINGS_FILE: &str = "settings.json";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8765";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Everything one invocation needs to reach AnkiConnect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self { endpoint: DEFAULT_ENDPOINT.to_string(), timeout_secs: DEFAULT_TIMEOUT_SECS }
    }
}

impl Settings {
    /// Settings from `path`, or from the user config dir when no path is given.
    /// Unreadable files fall back to the defaults.
    pub fn load(path: Option<&Path>) -> Self {
        match path {
            Some(path) => persistence::load_json_or_default(path),
            None => {
                persistence::load_json_or_default(&persistence::get_config_file_path(SETTINGS_FILE))
            }
        }
    }

    pub fn with_overrides(mut self, endpoint: Option<String>, timeout_secs: Option<u64>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        if let Some(timeout_secs) = timeout_secs {
            self.timeout_secs = timeout_secs;
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
