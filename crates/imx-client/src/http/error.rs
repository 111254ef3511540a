/*
[INPUT]:  Error sources (key parsing, signing, HTTP transport, API status, serialization)
[OUTPUT]: Structured error type carrying status/body for API rejections
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Immutable X client
#[derive(Error, Debug)]
pub enum ImxError {
    /// Ethereum private key is malformed or outside the curve range
    #[error("Invalid private key: {0}")]
    InvalidKey(String),

    /// Payload could not be signed
    #[error("Signing failed: {0}")]
    Signing(String),

    /// API answered with a non-2xx status
    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// Transport-level failure (timeout, DNS, connection refused)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Request rejected locally before any network call
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Response parsed but is missing required data
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ImxError {
    /// Create an API error from status code and raw body
    pub fn api_error(status: StatusCode, body: impl Into<String>) -> Self {
        ImxError::Api {
            status: status.as_u16(),
            body: body.into(),
        }
    }

    /// HTTP status of an API rejection
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ImxError::Api { status, .. } => Some(*status),
            ImxError::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether a caller-driven retry could succeed.
    ///
    /// The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            ImxError::Network(_) => true,
            ImxError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Check if the error was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        match self {
            ImxError::InvalidKey(_) | ImxError::Validation(_) | ImxError::Signing(_) => true,
            ImxError::Api { status, .. } => (400..500).contains(status) && *status != 429,
            _ => false,
        }
    }
}

/// Result type alias for Immutable X operations
pub type Result<T> = std::result::Result<T, ImxError>;
