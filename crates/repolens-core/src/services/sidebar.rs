//! Sidebar - topic filters and the on-demand analyze form.

use tracing::{debug, warn};

use crate::domain::{FilterChoice, ListMode, ON_DEMAND_TOPIC};
use crate::messages;
use crate::ports::{ApiPortResult, ProfileApiPort};

/// Prefix every analyzable repository URL must start with.
pub const GITHUB_URL_PREFIX: &str = "https://github.com/";

/// Status line shown under the analyze form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    Success(String),
    Error(String),
}

impl FormMessage {
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Error(text) => text.as_str(),
        }
    }

    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Check an analyze URL locally, before anything is sent.
pub fn validate_analyze_url(url: &str) -> Result<(), FormMessage> {
    if url.starts_with(GITHUB_URL_PREFIX) {
        Ok(())
    } else {
        Err(FormMessage::Error(messages::ANALYZE_INVALID_URL.to_string()))
    }
}

/// State of the analyze form.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeForm {
    input: String,
    submitting: bool,
    message: Option<FormMessage>,
}

impl AnalyzeForm {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// While `true` the input and submit button are disabled.
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub const fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }
}

/// Search, filter and analyze controls.
#[derive(Debug, Clone, Default)]
pub struct Sidebar {
    topics: Vec<String>,
    topics_loaded: bool,
    analyze: AnalyzeForm,
}

impl Sidebar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Topics fetched from the server, without the on-demand topic.
    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    pub const fn analyze_form(&self) -> &AnalyzeForm {
        &self.analyze
    }

    /// Fetch the topic vocabulary. Runs at most once.
    ///
    /// Failure leaves an empty topic list; there is no retry.
    pub async fn load_topics(&mut self, api: &dyn ProfileApiPort) {
        if self.topics_loaded {
            return;
        }
        self.topics_loaded = true;

        match api.topics().await {
            Ok(topics) => {
                self.topics = topics
                    .into_iter()
                    .filter(|topic| topic != ON_DEMAND_TOPIC)
                    .collect();
                debug!(count = self.topics.len(), "Topics loaded");
            }
            Err(e) => {
                warn!(error = %e, "Failed to load topics");
                self.topics = Vec::new();
            }
        }
    }

    /// Filter buttons in display order.
    pub fn filter_choices(&self) -> Vec<FilterChoice> {
        let mut choices = vec![
            FilterChoice::FavoritesOnly,
            FilterChoice::on_demand(),
            FilterChoice::All,
        ];
        choices.extend(self.topics.iter().cloned().map(FilterChoice::Topic));
        choices
    }

    /// Whether `choice` is the highlighted button for `mode`.
    pub fn is_active(choice: &FilterChoice, mode: &ListMode) -> bool {
        mode.filter().as_ref() == Some(choice)
    }

    /// Validate the form input and lock the form for submission.
    ///
    /// Returns the URL to send, or the message to show instead.
    pub fn begin_analyze(&mut self) -> Result<String, FormMessage> {
        if self.analyze.submitting {
            return Err(FormMessage::Error(
                messages::ANALYZE_IN_PROGRESS.to_string(),
            ));
        }

        if let Err(message) = validate_analyze_url(&self.analyze.input) {
            self.analyze.message = Some(message.clone());
            return Err(message);
        }

        self.analyze.submitting = true;
        self.analyze.message = None;
        Ok(self.analyze.input.clone())
    }

    /// Unlock the form and record the outcome of the request.
    pub fn finish_analyze(&mut self, result: ApiPortResult<String>) -> FormMessage {
        self.analyze.submitting = false;

        let message = match result {
            Ok(text) => {
                self.analyze.input.clear();
                FormMessage::Success(text)
            }
            Err(e) => {
                warn!(error = %e, "Analyze request failed");
                FormMessage::Error(
                    e.server_message()
                        .unwrap_or(messages::ANALYZE_FAILED)
                        .to_string(),
                )
            }
        };

        self.analyze.message = Some(message.clone());
        message
    }

    /// Submit `url` for analysis.
    pub async fn submit_analyze(&mut self, api: &dyn ProfileApiPort, url: &str) -> FormMessage {
        self.analyze.set_input(url);
        let url = match self.begin_analyze() {
            Ok(url) => url,
            Err(message) => return message,
        };

        let result = api.request_analysis(&url).await;
        self.finish_analyze(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ApiPortError;
    use crate::services::test_support::{ApiCall, FakeApi, network_error};

    #[test]
    fn test_validate_analyze_url() {
        assert!(validate_analyze_url("https://github.com/tokio-rs/tokio").is_ok());
        assert!(validate_analyze_url("http://github.com/tokio-rs/tokio").is_err());
        assert!(validate_analyze_url("https://gitlab.com/foo/bar").is_err());
        assert!(validate_analyze_url("").is_err());
    }

    #[tokio::test]
    async fn test_topics_drop_on_demand() {
        let api = FakeApi::new();
        *api.topics.lock().unwrap() = Ok(vec![
            "AI Agent".to_string(),
            ON_DEMAND_TOPIC.to_string(),
            "Docker".to_string(),
        ]);

        let mut sidebar = Sidebar::new();
        sidebar.load_topics(&api).await;

        assert_eq!(sidebar.topics(), ["AI Agent", "Docker"]);
        assert_eq!(
            sidebar.filter_choices(),
            vec![
                FilterChoice::FavoritesOnly,
                FilterChoice::on_demand(),
                FilterChoice::All,
                FilterChoice::Topic("AI Agent".to_string()),
                FilterChoice::Topic("Docker".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_topics_fetched_once_and_failure_is_empty() {
        let api = FakeApi::new();
        *api.topics.lock().unwrap() = Err(network_error());

        let mut sidebar = Sidebar::new();
        sidebar.load_topics(&api).await;
        sidebar.load_topics(&api).await;

        assert!(sidebar.topics().is_empty());
        assert_eq!(api.calls(), vec![ApiCall::Topics]);
    }

    #[test]
    fn test_active_filter_follows_mode() {
        let topic = FilterChoice::Topic("Docker".to_string());
        assert!(Sidebar::is_active(&topic, &ListMode::Topic("Docker".into())));
        assert!(!Sidebar::is_active(&topic, &ListMode::All));
        assert!(Sidebar::is_active(&FilterChoice::All, &ListMode::All));
        assert!(!Sidebar::is_active(&FilterChoice::All, &ListMode::search("x")));
    }

    #[tokio::test]
    async fn test_invalid_url_never_reaches_server() {
        let api = FakeApi::new();
        let mut sidebar = Sidebar::new();

        let message = sidebar
            .submit_analyze(&api, "https://example.com/repo")
            .await;

        assert_eq!(
            message,
            FormMessage::Error(messages::ANALYZE_INVALID_URL.to_string())
        );
        assert!(api.calls().is_empty());
        assert!(!sidebar.analyze_form().is_submitting());
    }

    #[tokio::test]
    async fn test_successful_analyze_clears_input() {
        let api = FakeApi::new();
        *api.analyze.lock().unwrap() = Ok("Analysis request accepted.".to_string());
        let mut sidebar = Sidebar::new();

        let message = sidebar
            .submit_analyze(&api, "https://github.com/serde-rs/serde")
            .await;

        assert_eq!(
            message,
            FormMessage::Success("Analysis request accepted.".to_string())
        );
        assert_eq!(
            api.calls(),
            vec![ApiCall::Analyze("https://github.com/serde-rs/serde".to_string())]
        );
        assert_eq!(sidebar.analyze_form().input(), "");
        assert!(!sidebar.analyze_form().is_submitting());
    }

    #[tokio::test]
    async fn test_failed_analyze_prefers_server_message() {
        let api = FakeApi::new();
        *api.analyze.lock().unwrap() = Err(ApiPortError::Rejected {
            status: 400,
            message: Some("URL is required.".to_string()),
        });
        let mut sidebar = Sidebar::new();

        let message = sidebar
            .submit_analyze(&api, "https://github.com/a/b")
            .await;
        assert_eq!(message, FormMessage::Error("URL is required.".to_string()));
        assert_eq!(sidebar.analyze_form().input(), "https://github.com/a/b");

        *api.analyze.lock().unwrap() = Err(network_error());
        let message = sidebar
            .submit_analyze(&api, "https://github.com/a/b")
            .await;
        assert_eq!(
            message,
            FormMessage::Error(messages::ANALYZE_FAILED.to_string())
        );
    }

    #[test]
    fn test_form_is_locked_while_submitting() {
        let mut sidebar = Sidebar::new();
        sidebar.analyze.set_input("https://github.com/a/b");

        assert_eq!(sidebar.begin_analyze().unwrap(), "https://github.com/a/b");
        assert!(sidebar.analyze_form().is_submitting());
        assert!(sidebar.begin_analyze().is_err());

        sidebar.finish_analyze(Ok("ok".to_string()));
        assert!(!sidebar.analyze_form().is_submitting());
        assert_eq!(
            sidebar.analyze_form().message(),
            Some(&FormMessage::Success("ok".to_string()))
        );
    }
}
