//! JSON file favorites store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use repolens_core::paths::storage_file;
use repolens_core::{FAVORITES_STORAGE_KEY, FavoritesStore, ProfileId, StoreError};

/// Favorites persisted as a JSON array of ids.
#[derive(Debug, Clone)]
pub struct JsonFileFavoritesStore {
    path: PathBuf,
}

impl JsonFileFavoritesStore {
    /// Store under the fixed favorites key inside `data_root`.
    pub fn in_dir(data_root: &Path) -> Self {
        Self::at(storage_file(data_root, FAVORITES_STORAGE_KEY))
    }

    /// Store at an explicit file path.
    pub const fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, e: &std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            reason: e.to_string(),
        }
    }
}

impl FavoritesStore for JsonFileFavoritesStore {
    fn load(&self) -> Result<Option<Vec<ProfileId>>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(&e)),
        };

        let ids: Vec<ProfileId> =
            serde_json::from_str(&raw).map_err(|e| StoreError::Malformed {
                reason: e.to_string(),
            })?;
        debug!(path = %self.path.display(), count = ids.len(), "Favorites read");
        Ok(Some(ids))
    }

    fn save(&self, ids: &[ProfileId]) -> Result<(), StoreError> {
        let json = serde_json::to_string(ids).map_err(|e| StoreError::Unavailable(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(&e))?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| self.io_error(&e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(&e))?;

        debug!(path = %self.path.display(), count = ids.len(), "Favorites written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileFavoritesStore::in_dir(dir.path());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_file_uses_storage_key() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileFavoritesStore::in_dir(dir.path());
        assert_eq!(
            store.path(),
            dir.path().join("project_analyzer_favorites.json")
        );
    }

    #[test]
    fn test_save_writes_json_array() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileFavoritesStore::in_dir(dir.path());

        store.save(&[3, 7, 9]).unwrap();

        assert_eq!(fs::read_to_string(store.path()).unwrap(), "[3,7,9]");
        assert_eq!(store.load().unwrap(), Some(vec![3, 7, 9]));
        assert!(!store.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn test_save_empty_set() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileFavoritesStore::in_dir(dir.path());
        store.save(&[1]).unwrap();
        store.save(&[]).unwrap();
        assert_eq!(store.load().unwrap(), Some(vec![]));
    }

    #[test]
    fn test_malformed_file() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileFavoritesStore::in_dir(dir.path());
        fs::write(store.path(), "{not json").unwrap();

        assert!(matches!(store.load(), Err(StoreError::Malformed { .. })));
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileFavoritesStore::at(dir.path().join("nested/favorites.json"));
        store.save(&[1, 2]).unwrap();
        assert_eq!(store.load().unwrap(), Some(vec![1, 2]));
    }
}
