//! Client for the repository-analysis backend.

mod actions;
mod listing;

use url::Url;

use repolens_core::ApiPortResult;

use crate::config::ApiClientConfig;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::ApiConfig;
use crate::port::map_error;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default API client using the reqwest HTTP backend.
pub type DefaultApiClient = ApiClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the projects endpoint.
///
/// Generic over an HTTP backend so tests can inject a fake. Use
/// [`DefaultApiClient`] in production code.
pub struct ApiClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: ApiConfig,
}

impl DefaultApiClient {
    /// Create a client with the given configuration.
    ///
    /// Fails if the base URL does not parse or the HTTP client cannot be
    /// built.
    pub fn new(config: &ApiClientConfig) -> ApiPortResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| map_error(e.into()))?;
        let backend = ReqwestBackend::new(config).map_err(map_error)?;
        Ok(Self {
            backend,
            config: ApiConfig::new(base_url),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        self.config.base_url.as_str()
    }
}

impl<B: HttpBackend> ApiClient<B> {
    /// Create a client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: ApiConfig, backend: B) -> Self {
        Self { backend, config }
    }
}
