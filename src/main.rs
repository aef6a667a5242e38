//! bibi - terminal HTTP client
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async HTTP execution

use std::io;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::layout::Flex;
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use bibi_tui::constants::{APP_NAME, APP_VERSION};
use bibi_tui::messages::ui_events::{key_to_ui_event, InputMode, Panel};
use bibi_tui::ui::{help_rows, method_color, response_lines};
use bibi_tui::{
    AppActor, Config, Dispatcher, NetworkActor, NetworkCommand, NetworkResponse, RenderState,
    UiEvent,
};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging to file; the terminal belongs to the UI
    let file_appender = tracing_appender::rolling::never(".", &config.log_file);
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    tracing::info!(version = APP_VERSION, timeout_secs = config.request_timeout_secs, "Starting");

    let dispatcher = Dispatcher::new(&config).context("Failed to create HTTP client")?;

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(dispatcher, net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(&config, net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    tracing::info!("Exiting");
    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        terminal.draw(|f| draw_ui(f, &current_state))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.active_panel,
                    current_state.input_mode,
                    current_state.show_help,
                ) {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Method + URL
            Constraint::Length(3), // Body
            Constraint::Min(5),    // Response
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_url_bar(f, state, chunks[0]);
    draw_body_panel(f, state, chunks[1]);
    draw_response(f, state, chunks[2]);
    draw_status_bar(f, state, chunks[3]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn panel_border(state: &RenderState, panel: Panel) -> Style {
    let is_focused = state.active_panel == panel;
    if is_focused && state.input_mode == InputMode::Editing {
        Style::default().fg(Color::Yellow)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn set_cursor(f: &mut Frame, state: &RenderState, panel: Panel, area: Rect) {
    if state.active_panel == panel && state.input_mode == InputMode::Editing {
        let text = if panel == Panel::Url { &state.url } else { &state.body };
        let column = text
            .get(..state.cursor_position)
            .map(|s| s.chars().count())
            .unwrap_or(0) as u16;
        let max_x = area.x + area.width.saturating_sub(2);
        let cursor_x = (area.x + column + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_url_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let loading = if state.is_loading { " [...]" } else { "" };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(panel_border(state, Panel::Url))
        .title(format!(" {}{} ", state.method.as_str(), loading))
        .title_style(Style::default().fg(method_color(state.method)).bold());

    let input = Paragraph::new(state.url.as_str()).block(block);
    f.render_widget(input, area);
    set_cursor(f, state, Panel::Url, area);
}

fn draw_body_panel(f: &mut Frame, state: &RenderState, area: Rect) {
    let (title, content) = if state.method.has_body() {
        (" Body (raw) ", state.body.as_str())
    } else {
        (" Body (not sent with GET/DELETE) ", "")
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(panel_border(state, Panel::Body))
        .title(title);

    let body = Paragraph::new(content).block(block);
    f.render_widget(body, area);
    set_cursor(f, state, Panel::Body, area);
}

fn draw_response(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(panel_border(state, Panel::Response))
        .title(" Response (↑/↓ scroll) ");

    let response = Paragraph::new(response_lines(&state.response))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.response_scroll, 0));
    f.render_widget(response, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if let Some(message) = &state.status_message {
        format!(" {} ", message)
    } else if state.is_loading {
        String::from(" Loading... (Ctrl+X to cancel, s to resend) ")
    } else if state.input_mode == InputMode::Editing {
        String::from(" ESC:stop editing | arrows:move | Enter:send (URL) ")
    } else {
        String::from(" Tab:panel | e:edit | m:method | s:send | w:save | ?:help | q:quit ")
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let [popup_area] = Layout::vertical([Constraint::Percentage(60)])
        .flex(Flex::Center)
        .areas(area);
    let [popup_area] = Layout::horizontal([Constraint::Percentage(60)])
        .flex(Flex::Center)
        .areas(popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} {} ", APP_NAME, APP_VERSION))
        .title_bottom(" any key to close ")
        .style(Style::default().bg(Color::Black));

    let help = Table::new(help_rows(), [Constraint::Length(18), Constraint::Fill(1)])
        .block(block)
        .column_spacing(2);

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}
