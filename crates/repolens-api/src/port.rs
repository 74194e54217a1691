//! Port trait implementation for `ApiClient`.
//!
//! Implements the core-owned `ProfileApiPort` trait, converting between
//! wire DTOs and core domain types.

use async_trait::async_trait;
use repolens_core::ports::{ApiPortError, ApiPortResult, ProfileApiPort};
use repolens_core::{ListRequest, Profile, ProfileId, ProfilePage};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::HttpBackend;
use crate::models::{PageResponse, ProfileDto};

/// Reply text used when an accepted analysis carries no message.
const ANALYSIS_ACCEPTED: &str = "Analysis request accepted. Check back shortly.";

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `ApiError` to core `ApiPortError`.
pub(crate) fn map_error(err: ApiError) -> ApiPortError {
    match err {
        ApiError::RequestFailed {
            status, message, ..
        } => ApiPortError::Rejected { status, message },
        ApiError::Network(e) => ApiPortError::Network {
            message: e.to_string(),
        },
        ApiError::InvalidUrl(e) => ApiPortError::Configuration {
            message: e.to_string(),
        },
        ApiError::JsonParse(e) => ApiPortError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

/// Like [`map_error`], but a 404 on a profile URL means the profile is gone.
fn map_profile_error(err: ApiError, id: ProfileId) -> ApiPortError {
    match err {
        ApiError::RequestFailed { status: 404, .. } => ApiPortError::NotFound { id },
        other => map_error(other),
    }
}

// ============================================================================
// Type Conversions
// ============================================================================

fn to_profile(dto: ProfileDto) -> Profile {
    Profile {
        id: dto.id,
        repo_name: dto.repo_name.unwrap_or_default(),
        repo_url: dto.repo_url.unwrap_or_default(),
        project_title: dto.project_title,
        tech_stack_summary: dto.tech_stack_summary,
        image_url: dto.image_url,
        topic: dto.topic,
        created_at: dto.created_at,
    }
}

fn to_page(page: PageResponse) -> ProfilePage {
    ProfilePage::new(
        page.content.into_iter().map(to_profile).collect(),
        page.total_pages,
    )
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> ProfileApiPort for ApiClient<B> {
    async fn list(&self, request: &ListRequest) -> ApiPortResult<ProfilePage> {
        let page = self.list_profiles(request).await.map_err(map_error)?;
        Ok(to_page(page))
    }

    async fn topics(&self) -> ApiPortResult<Vec<String>> {
        self.list_topics().await.map_err(map_error)
    }

    async fn request_analysis(&self, url: &str) -> ApiPortResult<String> {
        let reply = self.submit_analysis(url).await.map_err(map_error)?;
        Ok(reply
            .message
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| ANALYSIS_ACCEPTED.to_string()))
    }

    async fn delete(&self, id: ProfileId) -> ApiPortResult<()> {
        self.delete_profile(id)
            .await
            .map_err(|e| map_profile_error(e, id))
    }
}
