//! Network messages - communication between App and Network layers

use crate::models::{Request, Response};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Execute an HTTP request, superseding any request still in flight
    ExecuteRequest { id: u64, request: Request },
    /// Cancel a pending request
    CancelRequest(u64),
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// The request completed, whatever its status code
    Completed {
        id: u64,
        response: Response,
        time_ms: u64,
    },
    /// Transport failure
    Failed {
        id: u64,
        message: String,
        time_ms: u64,
    },
    /// Request was cancelled before completing
    Cancelled { id: u64 },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Completed { id, .. } => *id,
            NetworkResponse::Failed { id, .. } => *id,
            NetworkResponse::Cancelled { id } => *id,
        }
    }
}
