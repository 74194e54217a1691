//! Data directory resolution.
//!
//! Favorites and other client state live under a single data root.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Environment variable that overrides the data root.
pub const DATA_DIR_ENV: &str = "REPOLENS_DATA_DIR";

/// Errors that can occur during path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the user's home directory.
    #[error("Cannot determine home directory")]
    NoHomeDir,

    /// Could not determine the system data directory.
    #[error("Cannot determine system data directory")]
    NoDataDir,

    /// An empty path was provided.
    #[error("Path cannot be empty")]
    EmptyPath,

    /// A path was expected to be a directory but was not.
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// Failed to create a directory.
    #[error("Failed to create directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },
}

/// Resolve (and create) the data root.
///
/// Resolution order:
/// 1. `explicit` (e.g. a `--data-dir` flag)
/// 2. `REPOLENS_DATA_DIR` environment variable
/// 3. System data directory (e.g. `~/.local/share/repolens`)
pub fn data_root(explicit: Option<&str>) -> Result<PathBuf, PathError> {
    let root = match explicit {
        Some(raw) => normalize_user_path(raw)?,
        None => match env::var(DATA_DIR_ENV) {
            Ok(raw) if !raw.trim().is_empty() => normalize_user_path(&raw)?,
            _ => dirs::data_local_dir()
                .ok_or(PathError::NoDataDir)?
                .join("repolens"),
        },
    };

    ensure_directory(&root)?;
    Ok(root)
}

/// Path of the file backing a storage key under `root`.
pub fn storage_file(root: &Path, key: &str) -> PathBuf {
    root.join(format!("{key}.json"))
}

/// Create `path` as a directory if it does not exist yet.
pub fn ensure_directory(path: &Path) -> Result<(), PathError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Expand a leading `~` in a user-provided path.
fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    if trimmed == "~" {
        return dirs::home_dir().ok_or(PathError::NoHomeDir);
    }
    if let Some(rest) = trimmed.strip_prefix("~/") {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(trimmed))
}
