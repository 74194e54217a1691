//! URL construction helpers for the backend API.
//!
//! Pure functions, so every endpoint is built the same way.

use url::Url;

use repolens_core::{ListRequest, PageParams, ProfileId};

use crate::models::ApiConfig;

/// Append `segment` to the base path.
fn endpoint(config: &ApiConfig, segment: &str) -> Url {
    let mut url = config.base_url.clone();
    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{base_path}/{segment}"));
    url.set_query(None);
    url
}

/// `page=..&size=..&sort=..`
fn page_query(params: PageParams) -> String {
    format!(
        "page={}&size={}&sort={}",
        params.page,
        params.size,
        params.sort.as_api_param()
    )
}

/// Build the URL for a listing request.
pub fn build_list_url(config: &ApiConfig, request: &ListRequest) -> Url {
    let (mut url, query) = match request {
        ListRequest::Unfiltered(params) => {
            let mut url = config.base_url.clone();
            url.set_query(None);
            (url, page_query(*params))
        }
        ListRequest::Search { keyword, params } => (
            endpoint(config, "search"),
            format!(
                "keyword={}&{}",
                urlencoding::encode(keyword),
                page_query(*params)
            ),
        ),
        ListRequest::Topic { topic, params } => (
            endpoint(config, "filter"),
            format!("topic={}&{}", urlencoding::encode(topic), page_query(*params)),
        ),
        ListRequest::Favorites { params, .. } => {
            (endpoint(config, "favorites"), page_query(*params))
        }
    };

    url.set_query(Some(&query));
    url
}

pub fn build_topics_url(config: &ApiConfig) -> Url {
    endpoint(config, "topics")
}

pub fn build_analyze_url(config: &ApiConfig) -> Url {
    endpoint(config, "analyze")
}

pub fn build_delete_url(config: &ApiConfig, id: ProfileId) -> Url {
    endpoint(config, &id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use repolens_core::SortKey;

    fn config() -> ApiConfig {
        ApiConfig::new(Url::parse("http://localhost:8080/api/projects").unwrap())
    }

    fn first_page() -> PageParams {
        PageParams::new(0, SortKey::NewestFirst)
    }

    #[test]
    fn test_unfiltered_url() {
        let url = build_list_url(&config(), &ListRequest::Unfiltered(first_page()));
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/projects?page=0&size=12&sort=createdAt,desc"
        );
    }

    #[test]
    fn test_search_url_encodes_keyword() {
        let request = ListRequest::Search {
            keyword: "async runtime".to_string(),
            params: PageParams::new(2, SortKey::NameAscending),
        };
        let url = build_list_url(&config(), &request);
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/projects/search?keyword=async%20runtime&page=2&size=12&sort=repoName,asc"
        );
    }

    #[test]
    fn test_topic_url() {
        let request = ListRequest::Topic {
            topic: "On-Demand".to_string(),
            params: first_page(),
        };
        let url = build_list_url(&config(), &request);
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/projects/filter?topic=On-Demand&page=0&size=12&sort=createdAt,desc"
        );
    }

    #[test]
    fn test_favorites_url_has_no_ids_in_query() {
        let request = ListRequest::Favorites {
            ids: vec![7, 9],
            params: first_page(),
        };
        let url = build_list_url(&config(), &request);
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/projects/favorites?page=0&size=12&sort=createdAt,desc"
        );
    }

    #[test]
    fn test_action_urls_with_trailing_slash_base() {
        let config = ApiConfig::new(Url::parse("http://example.com/api/projects/").unwrap());
        assert_eq!(
            build_topics_url(&config).as_str(),
            "http://example.com/api/projects/topics"
        );
        assert_eq!(
            build_analyze_url(&config).as_str(),
            "http://example.com/api/projects/analyze"
        );
        assert_eq!(
            build_delete_url(&config, 42).as_str(),
            "http://example.com/api/projects/42"
        );
    }
}
