//! User configuration, read from `~/.config/roster/config.json`.
//!
//! Every field is optional in the file; anything missing takes its
//! default, and a missing file means all defaults.

mod error;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::Location;

pub use error::ConfigError;

fn default_debounce_ms() -> u64 {
    50
}

fn default_api_latency_ms() -> u64 {
    100
}

fn default_locations() -> Vec<Location> {
    ["Canada", "China", "USA", "Brazil"]
        .into_iter()
        .map(Location::from)
        .collect()
}

fn default_taken_names() -> Vec<String> {
    vec!["invalid name".to_string()]
}

/// Runtime settings for the form and its mock services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Quiet period after the last name edit before the name is checked.
    pub debounce_ms: u64,
    /// Simulated round-trip time of every mock API call.
    pub api_latency_ms: u64,
    /// Locations served by the mock API, in display order.
    pub locations: Vec<Location>,
    /// Names the mock API reports as already taken.
    pub taken_names: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            api_latency_ms: default_api_latency_ms(),
            locations: default_locations(),
            taken_names: default_taken_names(),
        }
    }
}

impl Config {
    /// Loads the config from the platform config directory.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(default_config_path()?)
    }

    /// Loads the config from `path`, falling back to defaults if it does not exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn api_latency(&self) -> Duration {
        Duration::from_millis(self.api_latency_ms)
    }
}

/// Returns `~/.config/roster/config.json` (or the platform equivalent).
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(dir.join("roster").join("config.json"))
}
