//! Favorites service - the favorites set plus its persistence.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{FavoriteSet, ProfileId};
use crate::ports::FavoritesStore;

/// Holds the favorites set and writes it through to a [`FavoritesStore`].
///
/// Durability is best-effort: a failed load starts from an empty set and a
/// failed save keeps the in-memory change. Neither is ever surfaced to the
/// user, only logged.
pub struct FavoritesService {
    store: Arc<dyn FavoritesStore>,
    favorites: FavoriteSet,
}

impl FavoritesService {
    /// Load favorites from `store`.
    pub fn load(store: Arc<dyn FavoritesStore>) -> Self {
        let favorites = match store.load() {
            Ok(Some(ids)) => ids.into_iter().collect(),
            Ok(None) => FavoriteSet::new(),
            Err(e) => {
                warn!(error = %e, "Failed to load favorites, starting with an empty set");
                FavoriteSet::new()
            }
        };
        debug!(count = favorites.len(), "Favorites loaded");

        Self { store, favorites }
    }

    pub const fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn contains(&self, id: ProfileId) -> bool {
        self.favorites.contains(id)
    }

    /// Flip membership of `id` and persist the whole set.
    ///
    /// Returns `true` if `id` is now a favorite.
    pub fn toggle(&mut self, id: ProfileId) -> bool {
        let favorited = self.favorites.toggle(id);
        if let Err(e) = self.store.save(&self.favorites.ids()) {
            warn!(error = %e, id, "Failed to persist favorites");
        }
        favorited
    }
}
