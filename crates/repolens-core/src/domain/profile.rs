//! Repository profile types.

use serde::{Deserialize, Serialize};

/// Server-assigned profile identifier.
pub type ProfileId = i64;

/// A server-held record describing one analyzed repository.
///
/// Profiles are created and updated by the analysis service; the client
/// only reads and deletes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Database ID of the profile.
    pub id: ProfileId,
    /// Repository name (e.g. `airbnb/javascript`).
    pub repo_name: String,
    /// Repository URL on GitHub. Empty when the server has none.
    pub repo_url: String,
    /// Human-readable project title produced by the analysis.
    pub project_title: Option<String>,
    /// Tech stack summary produced by the analysis.
    pub tech_stack_summary: Option<String>,
    /// Generated illustration for the repository.
    pub image_url: Option<String>,
    /// Topic the repository was classified under.
    pub topic: Option<String>,
    /// Creation timestamp as reported by the server.
    pub created_at: Option<String>,
}

impl Profile {
    /// Create a profile with only the required fields set.
    pub fn new(id: ProfileId, repo_name: impl Into<String>, repo_url: impl Into<String>) -> Self {
        Self {
            id,
            repo_name: repo_name.into(),
            repo_url: repo_url.into(),
            project_title: None,
            tech_stack_summary: None,
            image_url: None,
            topic: None,
            created_at: None,
        }
    }

    /// Title to display: the project title when present, else the repo name.
    pub fn display_title(&self) -> &str {
        self.project_title
            .as_deref()
            .filter(|title| !title.trim().is_empty())
            .unwrap_or(&self.repo_name)
    }

    /// Repository URL, if the server supplied one.
    pub fn link(&self) -> Option<&str> {
        Some(self.repo_url.trim()).filter(|url| !url.is_empty())
    }
}

/// One page of profiles returned by a listing query.
///
/// Pages are transient: every fetch replaces the previous one wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePage {
    /// Profiles on this page, in server order.
    pub items: Vec<Profile>,
    /// Total number of pages for the query.
    pub total_pages: u32,
}

impl ProfilePage {
    /// Create a page from items and a page count.
    pub const fn new(items: Vec<Profile>, total_pages: u32) -> Self {
        Self { items, total_pages }
    }

    /// An empty page with no results.
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_pages: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
