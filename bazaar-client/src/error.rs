//! Client error types

use thiserror::Error;

/// Client error type
///
/// The backend exposes no structured error taxonomy beyond the HTTP
/// status, so non-2xx responses map by status class.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connectivity, timeout, decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request rejected as invalid (400)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Authentication required (401)
    #[error("Authentication required")]
    Unauthorized,

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other failure status
    #[error("Update failed: {0}")]
    Internal(String),

    /// Response body did not decode as the expected type
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
