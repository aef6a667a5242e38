//! Render state - data structure sent from App layer to UI for rendering

use crate::constants::DEFAULT_HTTP_URL;
use crate::messages::ui_events::{InputMode, Panel};
use crate::models::HttpMethod;
use crate::render::RenderModel;

/// What the response area currently shows
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResponseView {
    /// Nothing sent yet
    #[default]
    Empty,
    Rendered { model: RenderModel, time_ms: u64 },
    Failed { message: String, time_ms: u64 },
    Cancelled,
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    // Request data
    pub method: HttpMethod,
    pub url: String,
    pub body: String,

    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub cursor_position: usize,

    // Response
    pub response: ResponseView,
    pub response_scroll: u16,
    pub is_loading: bool,

    pub status_message: Option<String>,
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            method: HttpMethod::GET,
            url: String::from(DEFAULT_HTTP_URL),
            body: String::new(),
            active_panel: Panel::Url,
            input_mode: InputMode::Normal,
            cursor_position: DEFAULT_HTTP_URL.len(),
            response: ResponseView::Empty,
            response_scroll: 0,
            is_loading: false,
            status_message: None,
            show_help: false,
        }
    }
}
