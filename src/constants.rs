//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default URL for new HTTP requests
pub const DEFAULT_HTTP_URL: &str = "https://httpbin.org/get";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "bibi.log";

/// Directory under $HOME holding the config file
pub const CONFIG_DIR: &str = ".bibi";

pub const CONFIG_FILE: &str = "config.yaml";

/// Shown in the response area before the first request
pub const NO_RESPONSE: &str = "** No Response **";

/// Application name
pub const APP_NAME: &str = "bibi";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
