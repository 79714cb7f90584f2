//! Failure taxonomy surfaced to callers.

use thiserror::Error;

use crate::transport::TransportError;

/// Errors that can occur while talking to the archive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The archive rejected the credential (401). The stored token has been cleared.
    #[error("unauthorized")]
    Unauthorized,

    /// The resource does not exist (404).
    #[error("resource not found")]
    NotFound,

    /// Still rate limited (429) after the whole retry budget.
    #[error("rate limited: gave up after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },

    /// No response was obtained.
    #[error("transport error: {0}")]
    Transport(String),

    /// The archive failed (5xx).
    #[error("server error: status {status}")]
    Server { status: u16 },

    /// Any other non-success status.
    #[error("unexpected status {status}")]
    UnknownStatus { status: u16 },

    /// A success response whose body is not the expected JSON.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The request could not be built.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Result type for archive operations.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Classify a non-success status that is not retried.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            404 => ApiError::NotFound,
            500..=599 => ApiError::Server { status },
            _ => ApiError::UnknownStatus { status },
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ApiError::RetriesExhausted { .. })
    }

    /// Message a page shows instead of the raw error.
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::RetriesExhausted { .. } => {
                "The archive is receiving too many requests. Please try again shortly."
            }
            ApiError::NotFound => "This page could not be found.",
            ApiError::Unauthorized => "Your session has expired. Please sign in again.",
            _ => "This content is temporarily unavailable.",
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::InvalidUrl(msg) => ApiError::InvalidRequest(msg),
            TransportError::Network(msg) => ApiError::Transport(msg),
        }
    }
}
