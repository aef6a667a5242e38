//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::{NetworkCommand, NetworkResponse, ResponseView};
use crate::models::Request;
use crate::render::render;

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_panel(&mut self) {
        self.active_panel = self.active_panel.next();
    }

    pub fn prev_panel(&mut self) {
        self.active_panel = self.active_panel.prev();
    }

    pub fn scroll_up(&mut self) {
        self.response_scroll = self.response_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.response_scroll = self.response_scroll.saturating_add(1);
    }

    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) {
        if !self.active_panel.is_editable() {
            return;
        }
        if self.active_panel == Panel::Body && !self.method.has_body() {
            self.status_message = Some(format!("{} requests carry no body", self.method));
            return;
        }
        self.input_mode = InputMode::Editing;
        self.cursor_position = self.current_input().len();
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        let input = self.current_input();
        if self.cursor_position > 0 {
            self.cursor_position = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.current_input();
        if self.cursor_position < input.len() {
            self.cursor_position = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let cursor_pos = self.cursor_position;
        let input = self.current_input_mut();
        if cursor_pos <= input.len() {
            input.insert(cursor_pos, c);
            self.cursor_position = cursor_pos + c.len_utf8();
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let cursor_pos = self.cursor_position;
        let input = self.current_input_mut();
        let prev_pos = input[..cursor_pos]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        input.remove(prev_pos);
        self.cursor_position = prev_pos;
    }

    // ========================
    // Request actions
    // ========================

    pub fn cycle_method(&mut self) {
        self.method = self.method.next();
        if self.active_panel == Panel::Body && !self.method.has_body() {
            self.input_mode = InputMode::Normal;
        }
    }

    /// Build the command for a new dispatch.
    ///
    /// A request still in flight is superseded: its id stops being pending, so
    /// whatever it produces is dropped in `handle_response`.
    pub fn prepare_request(&mut self) -> Option<NetworkCommand> {
        if self.url.trim().is_empty() {
            self.status_message = Some(String::from("Enter a URL first"));
            return None;
        }

        if let Some(previous) = self.pending_request_id {
            tracing::info!(previous, "New request supersedes pending one");
        }

        let id = self.next_id();
        self.pending_request_id = Some(id);
        self.is_loading = true;
        self.status_message = None;

        let body = (!self.body.is_empty()).then(|| self.body.clone());
        Some(NetworkCommand::ExecuteRequest {
            id,
            request: Request::new(self.method, self.url.trim(), body),
        })
    }

    /// Cancel the current pending request
    pub fn cancel_request(&mut self) -> Option<NetworkCommand> {
        self.pending_request_id.map(NetworkCommand::CancelRequest)
    }

    /// Placeholder: requests are not persisted
    pub fn save_request(&mut self) {
        self.status_message = Some(String::from("Save is not implemented yet"));
    }

    // ========================
    // Response handling
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) {
        let response_id = response.id();
        if self.pending_request_id != Some(response_id) {
            tracing::debug!(id = response_id, "Discarding stale response");
            return;
        }

        self.response = match response {
            NetworkResponse::Completed { response, time_ms, .. } => ResponseView::Rendered {
                model: render(&response),
                time_ms,
            },
            NetworkResponse::Failed { message, time_ms, .. } => {
                ResponseView::Failed { message, time_ms }
            }
            NetworkResponse::Cancelled { .. } => ResponseView::Cancelled,
        };

        self.is_loading = false;
        self.pending_request_id = None;
        self.response_scroll = 0;
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}
