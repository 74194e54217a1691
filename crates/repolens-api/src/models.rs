//! Wire types for the backend API.
//!
//! These types are internal to `repolens-api`. External consumers use the
//! domain types defined in `repolens-core`.

use serde::{Deserialize, Serialize};
use url::Url;

use repolens_core::ProfileId;

/// Internal configuration derived from [`ApiClientConfig`](crate::ApiClientConfig).
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the projects endpoint
    pub base_url: Url,
}

impl ApiConfig {
    pub const fn new(base_url: Url) -> Self {
        Self { base_url }
    }
}

/// One profile as serialized by the backend.
///
/// Everything but `id` may be missing or `null`; the crawler does not
/// guarantee a repository URL.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub id: ProfileId,
    #[serde(default)]
    pub repo_name: Option<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub project_title: Option<String>,
    #[serde(default)]
    pub tech_stack_summary: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A Spring `Page` response. Only the fields the client reads are kept.
///
/// Missing `content` or `totalPages` count as empty and zero.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    #[serde(default)]
    pub content: Vec<ProfileDto>,
    #[serde(default)]
    pub total_pages: u32,
}

/// Body of `POST /analyze`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub url: &'a str,
}

/// `{ "message": ... }` body used for analyze replies and error bodies.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
