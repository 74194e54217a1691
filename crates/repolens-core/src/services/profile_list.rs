//! Profile list - the listing query state machine.
//!
//! ```text
//!            set_mode / set_sort / go_to_page / begin_fetch
//!   ┌──────────────────────────────────────────────────────────┐
//!   ▼                                                          │
//! Loading ──complete(Ok)──▶ Success ───────────────────────────┤
//!   │                                                          │
//!   └──────complete(Err)──▶ Error ─────────────────────────────┘
//! ```
//!
//! Every fetch carries a [`FetchTicket`] with a generation number. Only the
//! completion for the most recently issued ticket is applied; older ones
//! are dropped, so a slow response can never overwrite a newer query.

use tracing::{debug, warn};

use crate::domain::{
    FavoriteSet, ListMode, ListRequest, PageParams, Profile, ProfileId, ProfilePage, SortKey,
};
use crate::messages;
use crate::ports::{ApiPortResult, ProfileApiPort};

/// Load state of the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// A fetch has been issued and not yet completed.
    Loading,
    /// The held page is the result of the latest fetch.
    Success,
    /// The latest fetch failed; carries the display message.
    Error(String),
}

/// Handle for one issued fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct FetchTicket {
    generation: u64,
    request: Option<ListRequest>,
}

impl FetchTicket {
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// The request to send, or `None` when the result is known to be empty.
    pub const fn request(&self) -> Option<&ListRequest> {
        self.request.as_ref()
    }
}

/// Listing state: mode, pagination, sort and the last page received.
#[derive(Debug, Clone)]
pub struct ProfileList {
    mode: ListMode,
    page: u32,
    sort: SortKey,
    state: LoadState,
    items: Vec<Profile>,
    total_pages: u32,
    generation: u64,
}

impl Default for ProfileList {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileList {
    /// A fresh listing in the unfiltered mode, waiting for its first fetch.
    pub const fn new() -> Self {
        Self {
            mode: ListMode::All,
            page: 0,
            sort: SortKey::NewestFirst,
            state: LoadState::Loading,
            items: Vec::new(),
            total_pages: 0,
            generation: 0,
        }
    }

    pub const fn mode(&self) -> &ListMode {
        &self.mode
    }

    /// Zero-based index of the current page.
    pub const fn page(&self) -> u32 {
        self.page
    }

    pub const fn sort(&self) -> SortKey {
        self.sort
    }

    pub const fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn items(&self) -> &[Profile] {
        &self.items
    }

    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    /// Display message of a failed fetch.
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            LoadState::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Mode-specific message for a successful fetch with no items.
    pub fn empty_message(&self) -> Option<String> {
        (self.state == LoadState::Success && self.items.is_empty())
            .then(|| messages::empty_listing(&self.mode))
    }

    /// Pagination controls are only shown for more than one page.
    pub const fn shows_pagination(&self) -> bool {
        self.total_pages > 1
    }

    pub const fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub const fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    /// Switch mode. Always returns to the first page.
    pub fn set_mode(&mut self, mode: ListMode) {
        self.mode = mode;
        self.page = 0;
        self.state = LoadState::Loading;
    }

    /// Switch sort order. Always returns to the first page.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.page = 0;
        self.state = LoadState::Loading;
    }

    /// Jump to a zero-based page.
    ///
    /// Only pages in `[0, total_pages - 1]` are reachable; anything else,
    /// including the current page, leaves the state untouched and returns
    /// `false`.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        if page >= self.total_pages || page == self.page {
            return false;
        }
        self.page = page;
        self.state = LoadState::Loading;
        true
    }

    pub fn next_page(&mut self) -> bool {
        let Some(next) = self.page.checked_add(1) else {
            return false;
        };
        self.go_to_page(next)
    }

    pub fn previous_page(&mut self) -> bool {
        let Some(previous) = self.page.checked_sub(1) else {
            return false;
        };
        self.go_to_page(previous)
    }

    /// Mark the listing as loading and derive the request for its state.
    pub fn begin_fetch(&mut self, favorites: &FavoriteSet) -> FetchTicket {
        self.generation += 1;
        self.state = LoadState::Loading;

        let params = PageParams::new(self.page, self.sort);
        let request = ListRequest::derive(&self.mode, favorites, params);
        debug!(
            generation = self.generation,
            mode = %self.mode,
            page = self.page,
            sort = self.sort.as_api_param(),
            short_circuit = request.is_none(),
            "Listing fetch issued"
        );

        FetchTicket {
            generation: self.generation,
            request,
        }
    }

    /// Apply the result of a fetch.
    ///
    /// Returns `false` (and changes nothing) if a newer fetch has been
    /// issued since `ticket`.
    pub fn complete(&mut self, ticket: &FetchTicket, result: ApiPortResult<ProfilePage>) -> bool {
        if ticket.generation != self.generation {
            debug!(
                stale = ticket.generation,
                latest = self.generation,
                "Discarding stale listing response"
            );
            return false;
        }

        match result {
            Ok(page) => {
                self.items = page.items;
                self.total_pages = page.total_pages;
                self.state = LoadState::Success;
            }
            Err(e) => {
                warn!(error = %e, mode = %self.mode, "Listing fetch failed");
                self.items.clear();
                self.total_pages = 0;
                self.state = LoadState::Error(messages::LIST_LOAD_FAILED.to_string());
            }
        }
        true
    }

    /// Issue a fetch through `api` and apply its result.
    ///
    /// Favorites mode with an empty set completes immediately with an empty
    /// page and sends nothing.
    pub async fn refresh(&mut self, api: &dyn ProfileApiPort, favorites: &FavoriteSet) -> bool {
        let ticket = self.begin_fetch(favorites);
        let result = match ticket.request() {
            Some(request) => api.list(request).await,
            None => Ok(ProfilePage::empty()),
        };
        self.complete(&ticket, result)
    }

    /// Drop a profile from the held page without refetching.
    pub fn remove_local(&mut self, id: ProfileId) -> bool {
        let before = self.items.len();
        self.items.retain(|profile| profile.id != id);
        self.items.len() != before
    }
}
