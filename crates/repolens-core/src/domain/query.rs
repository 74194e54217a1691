//! Listing query types.
//!
//! A listing is driven by a [`ListMode`] plus pagination and sort state.
//! [`ListRequest::derive`] turns that state into the request the API
//! should receive, or `None` when no request is needed at all.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::favorites::FavoriteSet;
use super::profile::ProfileId;

/// Number of profiles per page.
pub const PAGE_SIZE: u32 = 12;

/// Topic assigned by the backend to user-requested analyses.
pub const ON_DEMAND_TOPIC: &str = "On-Demand";

/// Filter value that selects the favorites-only view.
pub const FAVORITES_FILTER: &str = "FAVORITES";

// ============================================================================
// Sort
// ============================================================================

/// Sort order for listings, sent as Spring's `field,direction` parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Most recently analyzed first.
    #[default]
    NewestFirst,
    /// Oldest analysis first.
    OldestFirst,
    /// Alphabetical by repository name.
    NameAscending,
}

impl SortKey {
    /// All sort keys, in display order.
    pub const ALL: [Self; 3] = [Self::NewestFirst, Self::OldestFirst, Self::NameAscending];

    /// Value of the `sort` query parameter.
    pub const fn as_api_param(self) -> &'static str {
        match self {
            Self::NewestFirst => "createdAt,desc",
            Self::OldestFirst => "createdAt,asc",
            Self::NameAscending => "repoName,asc",
        }
    }

    /// Short label for menus.
    pub const fn label(self) -> &'static str {
        match self {
            Self::NewestFirst => "newest",
            Self::OldestFirst => "oldest",
            Self::NameAscending => "name",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.label() == needle || key.as_api_param() == needle)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(|key| key.label()).collect();
                format!("unknown sort '{needle}' (expected one of: {})", valid.join(", "))
            })
    }
}

// ============================================================================
// Mode
// ============================================================================

/// Which subset of profiles the listing shows.
///
/// Keyword search and topic filters are mutually exclusive by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListMode {
    /// Plain paginated listing.
    #[default]
    All,
    /// Free-text search. Never holds a blank keyword.
    Keyword(String),
    /// Profiles classified under a topic.
    Topic(String),
    /// Only the profiles in the local favorites set.
    FavoritesOnly,
}

impl ListMode {
    /// Mode for a submitted search box value.
    ///
    /// A keyword that is empty after trimming clears the search instead.
    pub fn search(keyword: &str) -> Self {
        if keyword.trim().is_empty() {
            Self::All
        } else {
            Self::Keyword(keyword.to_string())
        }
    }

    /// The active keyword, if searching.
    pub fn keyword(&self) -> Option<&str> {
        match self {
            Self::Keyword(keyword) => Some(keyword.as_str()),
            _ => None,
        }
    }

    /// The filter this mode corresponds to, or `None` while searching.
    pub fn filter(&self) -> Option<FilterChoice> {
        match self {
            Self::All => Some(FilterChoice::All),
            Self::Keyword(_) => None,
            Self::Topic(topic) => Some(FilterChoice::Topic(topic.clone())),
            Self::FavoritesOnly => Some(FilterChoice::FavoritesOnly),
        }
    }
}

impl fmt::Display for ListMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Keyword(keyword) => write!(f, "search \"{keyword}\""),
            Self::Topic(topic) => write!(f, "topic \"{topic}\""),
            Self::FavoritesOnly => f.write_str("favorites"),
        }
    }
}

/// A filter button in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterChoice {
    /// Show everything.
    All,
    /// Show favorites only.
    FavoritesOnly,
    /// Show a single topic.
    Topic(String),
}

impl FilterChoice {
    /// Filter for the dedicated on-demand button.
    pub fn on_demand() -> Self {
        Self::Topic(ON_DEMAND_TOPIC.to_string())
    }

    /// Parse a filter name as typed by a user.
    ///
    /// `all` (or nothing) selects everything, `FAVORITES`/`favorites`
    /// selects the favorites view and anything else is a topic name.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            Self::All
        } else if raw.eq_ignore_ascii_case(FAVORITES_FILTER) {
            Self::FavoritesOnly
        } else {
            Self::Topic(raw.to_string())
        }
    }

    /// Label shown on the filter button.
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::FavoritesOnly => "★ Favorites",
            Self::Topic(topic) if topic == ON_DEMAND_TOPIC => "My on-demand analyses",
            Self::Topic(topic) => topic.as_str(),
        }
    }
}

impl From<FilterChoice> for ListMode {
    fn from(choice: FilterChoice) -> Self {
        match choice {
            FilterChoice::All => Self::All,
            FilterChoice::FavoritesOnly => Self::FavoritesOnly,
            FilterChoice::Topic(topic) => Self::Topic(topic),
        }
    }
}

// ============================================================================
// Request derivation
// ============================================================================

/// Pagination and sort parameters shared by every listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    /// Zero-based page index.
    pub page: u32,
    /// Page size.
    pub size: u32,
    /// Sort order.
    pub sort: SortKey,
}

impl PageParams {
    /// Parameters for a page using the standard page size.
    pub const fn new(page: u32, sort: SortKey) -> Self {
        Self {
            page,
            size: PAGE_SIZE,
            sort,
        }
    }
}

/// A concrete listing request against the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRequest {
    /// `GET /api/projects`
    Unfiltered(PageParams),
    /// `GET /api/projects/search`
    Search {
        keyword: String,
        params: PageParams,
    },
    /// `GET /api/projects/filter`
    Topic { topic: String, params: PageParams },
    /// `POST /api/projects/favorites` with the ids as the body.
    Favorites {
        ids: Vec<ProfileId>,
        params: PageParams,
    },
}

impl ListRequest {
    /// Derive the request for the given listing state.
    ///
    /// Rules, in priority order:
    /// 1. a non-blank keyword searches;
    /// 2. favorites mode posts the favorite ids, or yields `None` when the
    ///    set is empty so that no request is sent;
    /// 3. a topic filters;
    /// 4. otherwise the plain listing is requested.
    pub fn derive(mode: &ListMode, favorites: &FavoriteSet, params: PageParams) -> Option<Self> {
        match mode {
            ListMode::Keyword(keyword) if !keyword.trim().is_empty() => Some(Self::Search {
                keyword: keyword.clone(),
                params,
            }),
            ListMode::FavoritesOnly if favorites.is_empty() => None,
            ListMode::FavoritesOnly => Some(Self::Favorites {
                ids: favorites.ids(),
                params,
            }),
            ListMode::Topic(topic) => Some(Self::Topic {
                topic: topic.clone(),
                params,
            }),
            ListMode::All | ListMode::Keyword(_) => Some(Self::Unfiltered(params)),
        }
    }

    /// Pagination parameters of this request.
    pub const fn params(&self) -> PageParams {
        match self {
            Self::Unfiltered(params)
            | Self::Search { params, .. }
            | Self::Topic { params, .. }
            | Self::Favorites { params, .. } => *params,
        }
    }
}
