//! Service Errors
//!
//! Every failure a user action can hit. None of them is fatal; the UI swaps
//! in a placeholder message and the user retries by hand.

use serde::{Deserialize, Serialize};

/// Common result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ServiceError {
    /// Connection refused, timeout, body read failure
    Transport(String),
    /// The service answered with a non-success status
    Status { code: u16, body: String },
    /// The body was not the JSON shape we expect
    MalformedResponse(String),
    /// The request was rejected before leaving the app
    InvalidInput(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ServiceError::Status { code, body } => write!(f, "Service returned {}: {}", code, body),
            ServiceError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
            ServiceError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        ServiceError::Transport(err.to_string())
    }
}
