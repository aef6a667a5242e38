//! Error types for the dispatch and render layers

use std::path::PathBuf;

/// Failure of a single dispatch. Never retried.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Error reading body: {0}")]
    Body(String),

    #[error("Could not build HTTP client: {0}")]
    Client(String),
}

impl DispatchError {
    pub(crate) fn from_reqwest(e: reqwest::Error, timeout_secs: u64) -> Self {
        if e.is_timeout() {
            DispatchError::Timeout(timeout_secs)
        } else if e.is_connect() {
            DispatchError::Connect(e.to_string())
        } else if e.is_body() || e.is_decode() {
            DispatchError::Body(e.to_string())
        } else {
            DispatchError::Request(e.to_string())
        }
    }
}

/// Formatting failure inside the renderer. Recovered locally.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Body is not valid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("HTML is nested too deeply to format (depth {0})")]
    MalformedHtml(usize),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Invalid config file {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}
