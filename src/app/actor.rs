//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::config::Config;
use crate::messages::ui_events::InputMode;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// Owns the `AppState`; every change is published to the UI as a fresh `RenderState`
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        config: &Config,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(config),
            network_tx,
            render_tx,
        }
    }

    /// Run until the UI asks to quit or both inputs close
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        self.publish();

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if event == UiEvent::Quit {
                        self.send_network(Some(NetworkCommand::Shutdown));
                        break;
                    }
                    let command = self.apply(event);
                    self.send_network(command);
                }
                Some(response) = net_rx.recv() => self.state.handle_response(response),
                else => break,
            }
            self.publish();
        }
    }

    fn publish(&self) {
        let _ = self.render_tx.send(self.state.to_render_state());
    }

    fn send_network(&self, command: Option<NetworkCommand>) {
        if let Some(command) = command {
            tracing::debug!(?command, "To network");
            let _ = self.network_tx.send(command);
        }
    }

    /// Update state for one UI event, returning the network command it triggers
    fn apply(&mut self, event: UiEvent) -> Option<NetworkCommand> {
        let state = &mut self.state;
        match event {
            UiEvent::SendRequest => {
                if state.input_mode == InputMode::Editing {
                    state.stop_editing();
                }
                return state.prepare_request();
            }
            UiEvent::CancelRequest => return state.cancel_request(),

            UiEvent::NextPanel => state.next_panel(),
            UiEvent::PrevPanel => state.prev_panel(),
            UiEvent::ScrollUp => state.scroll_up(),
            UiEvent::ScrollDown => state.scroll_down(),
            UiEvent::StartEditing => state.start_editing(),
            UiEvent::StopEditing => state.stop_editing(),
            UiEvent::CharInput(c) => state.enter_char(c),
            UiEvent::Backspace => state.delete_char(),
            UiEvent::CursorLeft => state.move_cursor_left(),
            UiEvent::CursorRight => state.move_cursor_right(),
            UiEvent::CycleMethod => state.cycle_method(),
            UiEvent::SaveRequest => state.save_request(),
            UiEvent::ToggleHelp => state.toggle_help(),
            UiEvent::CloseHelp => state.close_help(),
            // handled by the run loop
            UiEvent::Quit => {}
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::ResponseView;
    use crate::models::Response;
    use std::time::Duration;
    use tokio::time::timeout;

    async fn recv<T>(rx: &mut mpsc::UnboundedReceiver<T>) -> T {
        timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("timed out")
            .expect("channel closed")
    }

    #[tokio::test]
    async fn test_send_render_and_quit() {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (net_tx, net_rx) = mpsc::unbounded_channel();
        let (cmd_tx, mut cmd_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();

        let config = Config {
            default_url: "http://localhost:1/x".into(),
            ..Config::default()
        };
        let handle = tokio::spawn(AppActor::new(&config, cmd_tx, render_tx).run(ui_rx, net_rx));

        let initial = recv(&mut render_rx).await;
        assert_eq!(initial.url, "http://localhost:1/x");

        ui_tx.send(UiEvent::SendRequest).unwrap();
        let id = match recv(&mut cmd_rx).await {
            NetworkCommand::ExecuteRequest { id, request } => {
                assert_eq!(request.url, "http://localhost:1/x");
                id
            }
            other => panic!("unexpected {:?}", other),
        };
        assert!(recv(&mut render_rx).await.is_loading);

        net_tx
            .send(NetworkResponse::Completed {
                id,
                response: Response {
                    status_code: 204,
                    headers: Vec::new(),
                    body: String::new(),
                },
                time_ms: 3,
            })
            .unwrap();
        let state = recv(&mut render_rx).await;
        assert!(!state.is_loading);
        assert!(matches!(
            state.response,
            ResponseView::Rendered { ref model, .. } if model.status_line == "204"
        ));

        ui_tx.send(UiEvent::Quit).unwrap();
        assert!(matches!(recv(&mut cmd_rx).await, NetworkCommand::Shutdown));
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_cancel_without_pending_sends_nothing() {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (_net_tx, net_rx) = mpsc::unbounded_channel();
        let (cmd_tx, mut cmd_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();
        tokio::spawn(AppActor::new(&Config::default(), cmd_tx, render_tx).run(ui_rx, net_rx));

        recv(&mut render_rx).await;
        ui_tx.send(UiEvent::CancelRequest).unwrap();
        recv(&mut render_rx).await;
        ui_tx.send(UiEvent::Quit).unwrap();

        assert!(matches!(recv(&mut cmd_rx).await, NetworkCommand::Shutdown));
    }
}
