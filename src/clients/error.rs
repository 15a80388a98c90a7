//! Error types for the Order Service clients.

use thiserror::Error;

/// Errors reported while talking to the Order Service.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderServiceError {
    /// The request never produced a response (connect, timeout, body read).
    #[error("Order service unavailable: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("Order rejected with status {status}: {}", message.as_deref().unwrap_or("no details"))]
    Rejected { status: u16, message: Option<String> },

    /// The HTTP client could not be built.
    #[error("Order service client error: {0}")]
    Client(String),
}

impl OrderServiceError {
    /// Error text supplied by the service itself, if any.
    pub fn service_message(&self) -> Option<&str> {
        match self {
            OrderServiceError::Rejected { message, .. } => message.as_deref(),
            OrderServiceError::Transport(_) | OrderServiceError::Client(_) => None,
        }
    }
}
