//! Public configuration for the API client.
//!
//! The internal config is derived from this when the client is built.

use std::time::Duration;

/// Default backend endpoint.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/projects";

/// Configuration for the API client.
///
/// # Example
///
/// ```
/// use repolens_api::ApiClientConfig;
/// use std::time::Duration;
///
/// let config = ApiClientConfig::new()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL of the projects endpoint
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("repolens/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ApiClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the projects endpoint.
    ///
    /// Defaults to [`DEFAULT_BASE_URL`].
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiClientConfig::new();
        assert_eq!(config.base_url, "http://localhost:8080/api/projects");
        assert!(config.user_agent.starts_with("repolens/"));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_pattern() {
        let config = ApiClientConfig::new()
            .with_base_url("https://analyzer.internal/api/projects")
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url(), "https://analyzer.internal/api/projects");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
