//! Favorites persistence port.
//!
//! A tiny key-value abstraction: load the stored id list, save the whole
//! list back. Writes are synchronous and replace the previous value.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ProfileId;

/// Fixed storage key under which favorites are persisted.
pub const FAVORITES_STORAGE_KEY: &str = "project_analyzer_favorites";

/// Errors from favorites persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The stored value could not be parsed as a list of ids.
    #[error("Stored favorites are malformed: {reason}")]
    Malformed {
        /// Parser error description
        reason: String,
    },

    /// Reading or writing the backing storage failed.
    #[error("Failed to access {path}: {reason}")]
    Io {
        /// Location of the backing storage
        path: PathBuf,
        /// Underlying error description
        reason: String,
    },

    /// The storage backend is unavailable.
    #[error("Favorites storage unavailable: {0}")]
    Unavailable(String),
}

/// Persistent storage for the favorites id list.
///
/// # Design Rules
///
/// - `load` returns `Ok(None)` when nothing has been stored yet
/// - `save` writes the full list; there are no partial updates
/// - Both calls block; callers keep them off hot paths
pub trait FavoritesStore: Send + Sync {
    /// Load the stored favorites.
    fn load(&self) -> Result<Option<Vec<ProfileId>>, StoreError>;

    /// Replace the stored favorites with `ids`.
    fn save(&self, ids: &[ProfileId]) -> Result<(), StoreError>;
}
