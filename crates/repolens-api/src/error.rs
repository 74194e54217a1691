//! Internal error types for API operations.
//!
//! These errors are internal to `repolens-api` and are mapped to core port
//! errors at the boundary.

use thiserror::Error;

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors related to backend API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("API request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
        /// `message` field of the error body, if it had one
        message: Option<String>,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
