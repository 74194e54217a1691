//! Mutating calls: on-demand analysis and delete.

use tracing::info;

use repolens_core::ProfileId;

use crate::error::ApiResult;
use crate::http::HttpBackend;
use crate::models::{AnalyzeRequest, MessageResponse};
use crate::url::{build_analyze_url, build_delete_url};

use super::ApiClient;

impl<B: HttpBackend> ApiClient<B> {
    /// Ask the backend to analyze a repository.
    pub(crate) async fn submit_analysis(&self, repo_url: &str) -> ApiResult<MessageResponse> {
        let url = build_analyze_url(&self.config);
        let reply: MessageResponse = self
            .backend
            .post_json(&url, &AnalyzeRequest { url: repo_url })
            .await?;
        info!(repo_url, "Analysis requested");
        Ok(reply)
    }

    pub(crate) async fn delete_profile(&self, id: ProfileId) -> ApiResult<()> {
        let url = build_delete_url(&self.config, id);
        self.backend.delete(&url).await
    }
}
