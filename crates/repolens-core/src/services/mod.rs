//! Core services - the dashboard's behavior layer.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They know nothing about HTTP, files or terminals.

mod dashboard;
mod favorites;
mod profile_list;
mod sidebar;

#[cfg(test)]
mod test_support;

pub use dashboard::{Dashboard, DashboardDeps};
pub use favorites::FavoritesService;
pub use profile_list::{FetchTicket, LoadState, ProfileList};
pub use sidebar::{AnalyzeForm, FormMessage, GITHUB_URL_PREFIX, Sidebar, validate_analyze_url};
