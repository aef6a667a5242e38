//! # bibi
//!
//! A small terminal HTTP client: pick a method, enter a URL, send, and read
//! the response as a header table plus a formatted body.
//!
//! ## Features
//! - HTTP methods: GET, POST, PUT, DELETE
//! - Raw request body for POST and PUT
//! - Pretty-printed HTML and JSON responses, plain text shown as-is
//! - One request in flight; sending again supersedes the previous request
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
pub mod render;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use config::Config;
pub use error::{ConfigError, DispatchError, RenderError};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, ResponseView, UiEvent};
pub use models::{HttpMethod, Request, Response};
pub use network::{Dispatcher, NetworkActor};
pub use render::{classify, render, ContentKind, RenderModel};
