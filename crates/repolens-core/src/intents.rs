//! Intents published by front-end components.
//!
//! Child components (search box, filter buttons, list items, pagination)
//! do not mutate shared state themselves. They publish an [`Intent`] and
//! the [`Dashboard`](crate::services::Dashboard) applies it, then reports
//! an [`Outcome`] the front end can render.

use crate::domain::{FilterChoice, ProfileId, SortKey};
use crate::services::FormMessage;

/// A user action routed to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Search box submitted.
    Search(String),
    /// Filter button selected.
    Filter(FilterChoice),
    /// Star toggled on a list item.
    ToggleFavorite(ProfileId),
    /// Delete requested on a list item (confirmation still pending).
    Delete(ProfileId),
    /// Analyze form submitted.
    Analyze(String),
    /// Pagination: next page.
    NextPage,
    /// Pagination: previous page.
    PreviousPage,
    /// Pagination: jump to a zero-based page.
    GoToPage(u32),
    /// Sort order changed.
    ChangeSort(SortKey),
    /// Reload the current listing.
    Refresh,
}

/// What happened as a result of an [`Intent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The listing was re-derived and fetched.
    Refreshed,
    /// Favorite membership changed.
    FavoriteToggled {
        id: ProfileId,
        /// `true` if the profile is now a favorite
        favorited: bool,
    },
    /// The profile was deleted on the server and removed locally.
    Deleted(ProfileId),
    /// The user declined the delete confirmation.
    DeleteCancelled,
    /// The delete request failed; carries the alert text.
    DeleteFailed(String),
    /// The analyze form finished with this message.
    Analyzed(FormMessage),
    /// The intent had no effect (e.g. paging past the last page).
    Ignored,
}
