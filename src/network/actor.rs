//! Network actor - runs HTTP requests in the Tokio async runtime

use std::collections::HashMap;
use std::time::Instant;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::Request;
use crate::network::client::Dispatcher;

/// Tracks an active request for cancellation
struct ActiveRequest {
    cancel_tx: oneshot::Sender<()>,
}

/// Network actor that processes HTTP request commands.
///
/// At most one request is in flight: a new `ExecuteRequest` cancels every
/// request still running before it starts.
pub struct NetworkActor {
    dispatcher: Dispatcher,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<u64>,
    cancel_handles: HashMap<u64, ActiveRequest>,
}

impl NetworkActor {
    pub fn new(
        dispatcher: Dispatcher,
        response_tx: mpsc::UnboundedSender<NetworkResponse>,
    ) -> Self {
        NetworkActor {
            dispatcher,
            response_tx,
            active_requests: JoinSet::new(),
            cancel_handles: HashMap::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::ExecuteRequest { id, request }) => {
                            self.cancel_all();

                            let (cancel_tx, cancel_rx) = oneshot::channel();
                            self.cancel_handles.insert(id, ActiveRequest { cancel_tx });

                            let dispatcher = self.dispatcher.clone();
                            let response_tx = self.response_tx.clone();

                            self.active_requests.spawn(async move {
                                execute_request(dispatcher, id, request, response_tx, cancel_rx).await;
                                id
                            });
                        }

                        Some(NetworkCommand::CancelRequest(id)) => {
                            if let Some(active) = self.cancel_handles.remove(&id) {
                                tracing::info!(id, "Cancelling request");
                                let _ = active.cancel_tx.send(());
                            }
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            self.cancel_all();
                            break;
                        }
                    }
                }

                Some(finished) = self.active_requests.join_next() => {
                    if let Ok(id) = finished {
                        self.cancel_handles.remove(&id);
                    }
                }
            }
        }
    }

    fn cancel_all(&mut self) {
        for (id, active) in self.cancel_handles.drain() {
            tracing::info!(id, "Superseding in-flight request");
            let _ = active.cancel_tx.send(());
        }
    }
}

/// Run one dispatch, racing it against cancellation.
///
/// Exactly one terminal message is sent per id.
async fn execute_request(
    dispatcher: Dispatcher,
    id: u64,
    request: Request,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    mut cancel_rx: oneshot::Receiver<()>,
) {
    let start = Instant::now();
    tracing::info!(id, url = %request.url, method = %request.method, "Executing request");

    tokio::select! {
        biased;

        _ = &mut cancel_rx => {
            let _ = response_tx.send(NetworkResponse::Cancelled { id });
        }

        result = dispatcher.send(&request) => {
            let time_ms = start.elapsed().as_millis() as u64;
            let message = match result {
                Ok(response) => {
                    tracing::info!(id, status = response.status_code, time_ms, "Request completed");
                    NetworkResponse::Completed { id, response, time_ms }
                }
                Err(e) => {
                    tracing::warn!(id, error = %e, time_ms, "Request failed");
                    NetworkResponse::Failed { id, message: e.to_string(), time_ms }
                }
            };
            let _ = response_tx.send(message);
        }
    }
}
