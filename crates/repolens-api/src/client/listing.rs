//! Listing and topic queries.

use tracing::debug;

use repolens_core::ListRequest;

use crate::error::ApiResult;
use crate::http::HttpBackend;
use crate::models::PageResponse;
use crate::url::{build_list_url, build_topics_url};

use super::ApiClient;

impl<B: HttpBackend> ApiClient<B> {
    /// Fetch one page for a derived listing request.
    ///
    /// The favorites query is a `POST` whose body is the id list; all other
    /// queries are plain `GET`s.
    pub(crate) async fn list_profiles(&self, request: &ListRequest) -> ApiResult<PageResponse> {
        let url = build_list_url(&self.config, request);

        let page: PageResponse = match request {
            ListRequest::Favorites { ids, .. } => self.backend.post_json(&url, ids).await?,
            _ => self.backend.get_json(&url).await?,
        };

        debug!(
            items = page.content.len(),
            total_pages = page.total_pages,
            "Listing page received"
        );
        Ok(page)
    }

    /// Fetch the distinct topic names.
    pub(crate) async fn list_topics(&self) -> ApiResult<Vec<String>> {
        let url = build_topics_url(&self.config);
        self.backend.get_json(&url).await
    }
}
