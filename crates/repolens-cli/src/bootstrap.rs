//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - HTTP client for the analysis backend (via repolens-api)
//! - Favorites file store (via repolens-store)
//! - The core `Dashboard` (via repolens-core)

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use repolens_api::{ApiClientConfig, DefaultApiClient};
use repolens_core::paths::data_root;
use repolens_core::ports::{ConfirmPrompt, FavoritesStore, ProfileApiPort};
use repolens_core::services::{Dashboard, DashboardDeps};
use repolens_store::JsonFileFavoritesStore;
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Override for the API base URL.
    pub api_url: Option<String>,
    /// Override for the data directory.
    pub data_dir: Option<String>,
}

impl CliConfig {
    /// Take the overrides from parsed global flags.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            api_url: cli.api_url.clone(),
            data_dir: cli.data_dir.clone(),
        }
    }

    /// HTTP client configuration with any override applied.
    pub fn api_config(&self) -> ApiClientConfig {
        let config = ApiClientConfig::new();
        match self.api_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => config.with_base_url(url),
            _ => config,
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// Analysis backend client.
    pub api: Arc<dyn ProfileApiPort>,
    /// Favorites persistence.
    pub favorites: Arc<dyn FavoritesStore>,
    /// Resolved data directory.
    pub data_root: PathBuf,
}

impl CliContext {
    pub fn api(&self) -> &dyn ProfileApiPort {
        self.api.as_ref()
    }

    pub fn favorites(&self) -> &Arc<dyn FavoritesStore> {
        &self.favorites
    }

    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    /// A dashboard over this context, using `confirm` for delete prompts.
    pub fn dashboard(&self, confirm: Arc<dyn ConfirmPrompt>) -> Dashboard {
        Dashboard::new(DashboardDeps {
            api: self.api.clone(),
            favorites: self.favorites.clone(),
            confirm,
        })
    }
}

/// Bootstrap the CLI application.
///
/// Resolves the data directory, builds the HTTP client and opens the
/// favorites store. Nothing is sent over the network here.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext> {
    let data_root = data_root(config.data_dir.as_deref()).map_err(CliError::from)?;

    let api_config = config.api_config();
    let api: Arc<dyn ProfileApiPort> =
        Arc::new(DefaultApiClient::new(&api_config).map_err(CliError::from)?);

    let store = JsonFileFavoritesStore::in_dir(&data_root);
    debug!(
        api_url = api_config.base_url(),
        favorites = %store.path().display(),
        "CLI bootstrapped"
    );

    Ok(CliContext {
        api,
        favorites: Arc::new(store),
        data_root,
    })
}
