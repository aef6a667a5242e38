//! App state - pure data structure with no I/O logic

use crate::config::Config;
use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::{RenderState, ResponseView};
use crate::models::HttpMethod;

/// Main application state - pure data, no I/O
pub struct AppState {
    // Request data
    pub method: HttpMethod,
    pub url: String,
    pub body: String,
    pub cursor_position: usize,

    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub response_scroll: u16,
    pub status_message: Option<String>,
    pub show_help: bool,

    // The single "current response" slot
    pub response: ResponseView,
    pub is_loading: bool,
    pub next_request_id: u64,
    /// Only results carrying this id are rendered
    pub pending_request_id: Option<u64>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        AppState {
            method: HttpMethod::GET,
            url: config.default_url.clone(),
            body: String::new(),
            cursor_position: config.default_url.len(),
            active_panel: Panel::Url,
            input_mode: InputMode::Normal,
            response_scroll: 0,
            status_message: None,
            show_help: false,
            response: ResponseView::Empty,
            is_loading: false,
            next_request_id: 1,
            pending_request_id: None,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Get the current input field content
    pub fn current_input(&self) -> &str {
        match self.active_panel {
            Panel::Url => &self.url,
            Panel::Body => &self.body,
            Panel::Response => "",
        }
    }

    /// Get mutable reference to current input field
    pub fn current_input_mut(&mut self) -> &mut String {
        match self.active_panel {
            Panel::Body => &mut self.body,
            // editing never starts on the response panel
            Panel::Url | Panel::Response => &mut self.url,
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            method: self.method,
            url: self.url.clone(),
            body: self.body.clone(),
            active_panel: self.active_panel,
            input_mode: self.input_mode,
            cursor_position: self.cursor_position,
            response: self.response.clone(),
            response_scroll: self.response_scroll,
            is_loading: self.is_loading,
            status_message: self.status_message.clone(),
            show_help: self.show_help,
        }
    }
}
