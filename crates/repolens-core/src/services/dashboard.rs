//! Dashboard - the page composer.
//!
//! Owns the top-level state (list mode, favorites) and wires sidebar
//! intents into the profile list. Front ends hold one `Dashboard`, send it
//! [`Intent`]s and render from its accessors.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{FavoriteSet, FilterChoice, ListMode, ProfileId, SortKey};
use crate::intents::{Intent, Outcome};
use crate::messages;
use crate::ports::{ConfirmPrompt, FavoritesStore, ProfileApiPort};

use super::favorites::FavoritesService;
use super::profile_list::ProfileList;
use super::sidebar::{FormMessage, Sidebar};

/// Dependencies injected into the dashboard.
#[derive(Clone)]
pub struct DashboardDeps {
    /// Analysis backend.
    pub api: Arc<dyn ProfileApiPort>,
    /// Favorites persistence.
    pub favorites: Arc<dyn FavoritesStore>,
    /// Delete confirmation dialog.
    pub confirm: Arc<dyn ConfirmPrompt>,
}

/// Top-level dashboard state.
pub struct Dashboard {
    api: Arc<dyn ProfileApiPort>,
    confirm: Arc<dyn ConfirmPrompt>,
    favorites: FavoritesService,
    list: ProfileList,
    sidebar: Sidebar,
}

impl Dashboard {
    /// Create a dashboard. Favorites are loaded immediately; nothing is
    /// fetched until [`start`](Self::start).
    pub fn new(deps: DashboardDeps) -> Self {
        Self {
            favorites: FavoritesService::load(deps.favorites),
            api: deps.api,
            confirm: deps.confirm,
            list: ProfileList::new(),
            sidebar: Sidebar::new(),
        }
    }

    pub const fn list(&self) -> &ProfileList {
        &self.list
    }

    pub const fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    pub const fn favorites(&self) -> &FavoriteSet {
        self.favorites.favorites()
    }

    pub const fn mode(&self) -> &ListMode {
        self.list.mode()
    }

    pub fn is_favorite(&self, id: ProfileId) -> bool {
        self.favorites.contains(id)
    }

    /// Load the topic list and the first page.
    pub async fn start(&mut self) {
        self.sidebar.load_topics(self.api.as_ref()).await;
        self.refresh().await;
    }

    /// Re-derive the listing request and fetch it.
    pub async fn refresh(&mut self) -> bool {
        self.list
            .refresh(self.api.as_ref(), self.favorites.favorites())
            .await
    }

    /// Search for `keyword`, clearing any active filter.
    pub async fn search(&mut self, keyword: &str) {
        self.list.set_mode(ListMode::search(keyword));
        self.refresh().await;
    }

    /// Apply a filter, clearing any active search.
    pub async fn filter(&mut self, choice: FilterChoice) {
        self.list.set_mode(choice.into());
        self.refresh().await;
    }

    /// Toggle a favorite. Returns `true` if `id` is now a favorite.
    ///
    /// The favorites view is refetched since its request depends on the set.
    pub async fn toggle_favorite(&mut self, id: ProfileId) -> bool {
        let favorited = self.favorites.toggle(id);
        debug!(id, favorited, "Favorite toggled");

        if matches!(self.list.mode(), ListMode::FavoritesOnly) {
            self.refresh().await;
        }
        favorited
    }

    /// Delete a profile after confirmation.
    ///
    /// On success the profile disappears from the current page at once and
    /// from the favorites set if it was there. On failure nothing changes.
    pub async fn delete(&mut self, id: ProfileId) -> Outcome {
        if !self.confirm.confirm(messages::DELETE_CONFIRM) {
            debug!(id, "Delete cancelled");
            return Outcome::DeleteCancelled;
        }

        if let Err(e) = self.api.delete(id).await {
            warn!(error = %e, id, "Delete failed");
            return Outcome::DeleteFailed(messages::DELETE_FAILED.to_string());
        }

        info!(id, "Profile deleted");
        self.list.remove_local(id);
        if self.favorites.contains(id) {
            self.toggle_favorite(id).await;
        }
        Outcome::Deleted(id)
    }

    /// Submit an on-demand analysis.
    pub async fn analyze(&mut self, url: &str) -> FormMessage {
        self.sidebar.submit_analyze(self.api.as_ref(), url).await
    }

    /// Switch mode and sort order together, with a single fetch.
    pub async fn show(&mut self, mode: ListMode, sort: SortKey) {
        self.list.set_sort(sort);
        self.list.set_mode(mode);
        self.refresh().await;
    }

    /// Change the sort order and go back to the first page.
    pub async fn change_sort(&mut self, sort: SortKey) {
        self.list.set_sort(sort);
        self.refresh().await;
    }

    /// Apply one intent.
    pub async fn dispatch(&mut self, intent: Intent) -> Outcome {
        match intent {
            Intent::Search(keyword) => {
                self.search(&keyword).await;
                Outcome::Refreshed
            }
            Intent::Filter(choice) => {
                self.filter(choice).await;
                Outcome::Refreshed
            }
            Intent::ToggleFavorite(id) => {
                let favorited = self.toggle_favorite(id).await;
                Outcome::FavoriteToggled { id, favorited }
            }
            Intent::Delete(id) => self.delete(id).await,
            Intent::Analyze(url) => Outcome::Analyzed(self.analyze(&url).await),
            Intent::NextPage => {
                let moved = self.list.next_page();
                self.refresh_if(moved).await
            }
            Intent::PreviousPage => {
                let moved = self.list.previous_page();
                self.refresh_if(moved).await
            }
            Intent::GoToPage(page) => {
                let moved = self.list.go_to_page(page);
                self.refresh_if(moved).await
            }
            Intent::ChangeSort(sort) => {
                self.change_sort(sort).await;
                Outcome::Refreshed
            }
            Intent::Refresh => {
                self.refresh().await;
                Outcome::Refreshed
            }
        }
    }

    async fn refresh_if(&mut self, changed: bool) -> Outcome {
        if changed {
            self.refresh().await;
            Outcome::Refreshed
        } else {
            Outcome::Ignored
        }
    }
}
