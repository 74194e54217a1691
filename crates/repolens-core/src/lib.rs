#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod intents;
pub mod messages;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    FAVORITES_FILTER, FavoriteSet, FilterChoice, ListMode, ListRequest, ON_DEMAND_TOPIC,
    PAGE_SIZE, PageParams, Profile, ProfileId, ProfilePage, SortKey,
};
pub use intents::{Intent, Outcome};
pub use ports::{
    ApiPortError, ApiPortResult, ConfirmPrompt, FAVORITES_STORAGE_KEY, FavoritesStore,
    FixedAnswer, ProfileApiPort, StoreError,
};
pub use services::{
    AnalyzeForm, Dashboard, DashboardDeps, FavoritesService, FetchTicket, FormMessage,
    GITHUB_URL_PREFIX, LoadState, ProfileList, Sidebar, validate_analyze_url,
};

// Re-export path utilities
pub use paths::{DATA_DIR_ENV, PathError, data_root, ensure_directory, storage_file};

#[cfg(test)]
use tokio_test as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use repolens_store as _;
