//! User-facing messages.
//!
//! Every string a front end shows for a state transition lives here so the
//! CLI and any other front end report the same thing.

use crate::domain::ListMode;

/// Shown when a listing request fails.
pub const LIST_LOAD_FAILED: &str = "Something went wrong while loading the analyses.";

/// Shown when a delete request fails.
pub const DELETE_FAILED: &str = "Something went wrong while deleting the analysis.";

/// Question asked before deleting a profile.
pub const DELETE_CONFIRM: &str = "Are you sure you want to delete this analysis?";

/// Shown when an analyze URL is not a GitHub repository URL.
pub const ANALYZE_INVALID_URL: &str = "Only URLs of the form https://github.com/... can be analyzed.";

/// Shown when an analyze form is submitted twice.
pub const ANALYZE_IN_PROGRESS: &str = "An analysis request is already in progress.";

/// Shown when an analyze request fails without a server message.
pub const ANALYZE_FAILED: &str = "The analysis request failed.";

/// Message for a listing that came back empty, specific to the mode.
pub fn empty_listing(mode: &ListMode) -> String {
    match mode {
        ListMode::Keyword(keyword) => format!("No results for \"{keyword}\"."),
        ListMode::FavoritesOnly => "★ No favorites saved yet.".to_string(),
        ListMode::Topic(topic) => format!("No results for topic \"{topic}\"."),
        ListMode::All => "No repository analyses yet.".to_string(),
    }
}
