//! Profile API port.
//!
//! The analysis backend is an external collaborator reached only over
//! HTTP. This port is the whole of what the core needs from it; the
//! implementation lives in `repolens-api`.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ListRequest, ProfileId, ProfilePage};

/// Errors from profile API operations.
///
/// Implementation-specific errors (HTTP client, JSON) are mapped to these.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiPortError {
    /// The server rejected the request with a non-success status.
    #[error("Request rejected with status {status}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// `message` field of the error body, when the server sent one
        message: Option<String>,
    },

    /// The profile does not exist on the server.
    #[error("Profile not found: {id}")]
    NotFound {
        /// The profile that wasn't found
        id: ProfileId,
    },

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The server replied with something that could not be understood.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Client configuration error.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

impl ApiPortError {
    /// The human-readable message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Result type alias for profile API operations.
pub type ApiPortResult<T> = Result<T, ApiPortError>;

/// Port trait for the repository-analysis backend.
///
/// # Design
///
/// - Uses core-owned types, not wire DTOs
/// - Returns `ApiPortError` for all failures
/// - No retry or caching; every call is one request
#[async_trait]
pub trait ProfileApiPort: Send + Sync {
    /// Fetch one page of profiles for a derived listing request.
    async fn list(&self, request: &ListRequest) -> ApiPortResult<ProfilePage>;

    /// Fetch the distinct topic vocabulary.
    async fn topics(&self) -> ApiPortResult<Vec<String>>;

    /// Ask the backend to analyze a repository URL.
    ///
    /// Returns the server's acknowledgement message.
    async fn request_analysis(&self, url: &str) -> ApiPortResult<String>;

    /// Delete a profile.
    async fn delete(&self, id: ProfileId) -> ApiPortResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    // Verify the trait is object-safe
    fn _assert_object_safe(_: Arc<dyn ProfileApiPort>) {}

    #[test]
    fn test_server_message_only_for_rejections() {
        let err = ApiPortError::Rejected {
            status: 400,
            message: Some("URL is required.".to_string()),
        };
        assert_eq!(err.server_message(), Some("URL is required."));

        let err = ApiPortError::Rejected {
            status: 500,
            message: Some("  ".to_string()),
        };
        assert_eq!(err.server_message(), None);

        let err = ApiPortError::Network {
            message: "connection refused".to_string(),
        };
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn test_error_display() {
        let err = ApiPortError::NotFound { id: 42 };
        assert!(err.to_string().contains("42"));

        let err = ApiPortError::Rejected {
            status: 503,
            message: None,
        };
        assert!(err.to_string().contains("503"));
    }
}
