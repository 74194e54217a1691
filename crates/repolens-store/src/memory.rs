//! In-memory favorites store.

use std::sync::{Mutex, PoisonError};

use repolens_core::{FavoritesStore, ProfileId, StoreError};

/// Favorites kept for the lifetime of the process only.
#[derive(Debug, Default)]
pub struct InMemoryFavoritesStore {
    ids: Mutex<Option<Vec<ProfileId>>>,
}

impl InMemoryFavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `ids` already stored.
    pub fn with_ids(ids: impl Into<Vec<ProfileId>>) -> Self {
        Self {
            ids: Mutex::new(Some(ids.into())),
        }
    }
}

impl FavoritesStore for InMemoryFavoritesStore {
    fn load(&self) -> Result<Option<Vec<ProfileId>>, StoreError> {
        Ok(self
            .ids
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, ids: &[ProfileId]) -> Result<(), StoreError> {
        *self.ids.lock().unwrap_or_else(PoisonError::into_inner) = Some(ids.to_vec());
        Ok(())
    }
}
