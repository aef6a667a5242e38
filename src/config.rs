//! Optional user configuration, read from `~/.bibi/config.yaml`

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    CONFIG_DIR, CONFIG_FILE, DEFAULT_HTTP_URL, DEFAULT_LOG_FILE, DEFAULT_TIMEOUT_SECS,
};
use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Per-request timeout; expiry surfaces as a transport error
    pub request_timeout_secs: u64,
    /// URL prefilled in the URL field at startup
    pub default_url: String,
    pub log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            default_url: String::from(DEFAULT_HTTP_URL),
            log_file: String::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// `~/.bibi/config.yaml`, or `./.bibi/config.yaml` without a home directory
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR)
            .join(CONFIG_FILE)
    }

    /// Load from the default location, falling back to defaults if absent
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        // An empty file deserializes to unit, not to a struct
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let config: Config =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        // A zero timeout expires every request before it starts
        if config.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                reason: String::from("request_timeout_secs must be at least 1"),
            });
        }

        Ok(config)
    }
}
