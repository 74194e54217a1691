//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or `serde_json` types in any signature
//! - No filesystem details beyond error reporting
//! - Traits are minimal; orchestration lives in `services`

pub mod confirm;
pub mod favorites_store;
pub mod profile_api;

pub use confirm::{ConfirmPrompt, FixedAnswer};
pub use favorites_store::{FAVORITES_STORAGE_KEY, FavoritesStore, StoreError};
pub use profile_api::{ApiPortError, ApiPortResult, ProfileApiPort};
