//! HTTP backend abstraction.
//!
//! The client is generic over [`HttpBackend`] so tests can swap in a fake
//! that records requests. The production implementation uses reqwest.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::ApiClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::MessageResponse;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends speaking JSON.
///
/// This is an implementation detail - external code should use the
/// `ProfileApiPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// `GET` a URL and deserialize the JSON body.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ApiResult<T>;

    /// `POST` a JSON body and deserialize the JSON reply.
    async fn post_json<B, T>(&self, url: &Url, body: &B) -> ApiResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send;

    /// `DELETE` a URL, ignoring any body.
    async fn delete(&self, url: &Url) -> ApiResult<()>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// One attempt per call; the configured timeout bounds each request.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a backend with the given configuration.
    pub fn new(config: &ApiClientConfig) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }

    /// Turn a non-success response into [`ApiError::RequestFailed`].
    ///
    /// The body is read for a `{"message": ...}` object; anything else is
    /// ignored.
    async fn check(response: reqwest::Response, url: &Url) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = parse_error_message(&body);
        debug!(status = status.as_u16(), %url, ?message, "Request rejected");

        Err(ApiError::RequestFailed {
            status: status.as_u16(),
            url: url.to_string(),
            message,
        })
    }
}

/// Extract the `message` field from an error body.
fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<MessageResponse>(body)
        .ok()
        .and_then(|reply| reply.message)
        .filter(|message| !message.trim().is_empty())
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ApiResult<T> {
        debug!(%url, "GET");
        let response = self.client.get(url.as_str()).send().await?;
        let data: T = Self::check(response, url).await?.json().await?;
        Ok(data)
    }

    async fn post_json<B, T>(&self, url: &Url, body: &B) -> ApiResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        debug!(%url, "POST");
        let response = self.client.post(url.as_str()).json(body).send().await?;
        let data: T = Self::check(response, url).await?.json().await?;
        Ok(data)
    }

    async fn delete(&self, url: &Url) -> ApiResult<()> {
        debug!(%url, "DELETE");
        let response = self.client.delete(url.as_str()).send().await?;
        Self::check(response, url).await?;
        Ok(())
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::Mutex;

    /// A request seen by [`FakeBackend`].
    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedRequest {
        pub method: &'static str,
        pub url: String,
        pub body: Option<serde_json::Value>,
    }

    /// Canned reply for the fake backend.
    #[derive(Debug, Clone)]
    pub enum CannedResponse {
        Json(serde_json::Value),
        Status {
            status: u16,
            message: Option<String>,
        },
    }

    /// A fake HTTP backend that returns canned responses and records
    /// every request it receives.
    pub struct FakeBackend {
        responses: Vec<(&'static str, String, CannedResponse)>,
        requests: Mutex<Vec<RecordedRequest>>,
    }

    impl FakeBackend {
        pub const fn new() -> Self {
            Self {
                responses: Vec::new(),
                requests: Mutex::new(Vec::new()),
            }
        }

        /// Answer `method` requests whose URL contains `url_contains`.
        /// The first matching entry wins.
        pub fn with_response(
            mut self,
            method: &'static str,
            url_contains: &str,
            response: CannedResponse,
        ) -> Self {
            self.responses
                .push((method, url_contains.to_string(), response));
            self
        }

        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.lock().unwrap().clone()
        }

        fn respond(
            &self,
            method: &'static str,
            url: &Url,
            body: Option<serde_json::Value>,
        ) -> ApiResult<serde_json::Value> {
            self.requests.lock().unwrap().push(RecordedRequest {
                method,
                url: url.to_string(),
                body,
            });

            let canned = self
                .responses
                .iter()
                .find(|(m, pattern, _)| *m == method && url.as_str().contains(pattern.as_str()))
                .map(|(_, _, response)| response.clone());

            match canned {
                Some(CannedResponse::Json(json)) => Ok(json),
                Some(CannedResponse::Status { status, message }) => {
                    Err(ApiError::RequestFailed {
                        status,
                        url: url.to_string(),
                        message,
                    })
                }
                None => Err(ApiError::RequestFailed {
                    status: 404,
                    url: url.to_string(),
                    message: None,
                }),
            }
        }
    }

    impl Default for FakeBackend {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ApiResult<T> {
            let json = self.respond("GET", url, None)?;
            serde_json::from_value(json).map_err(Into::into)
        }

        async fn post_json<B, T>(&self, url: &Url, body: &B) -> ApiResult<T>
        where
            B: Serialize + Sync,
            T: DeserializeOwned + Send,
        {
            let body = serde_json::to_value(body)?;
            let json = self.respond("POST", url, Some(body))?;
            serde_json::from_value(json).map_err(Into::into)
        }

        async fn delete(&self, url: &Url) -> ApiResult<()> {
            self.respond("DELETE", url, None).map(|_| ())
        }
    }
}
