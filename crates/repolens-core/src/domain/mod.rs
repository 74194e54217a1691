//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (HTTP, filesystem, terminal).
//!
//! # Structure
//!
//! - `profile` - analyzed repository records and result pages
//! - `query` - list modes, sort keys and request derivation
//! - `favorites` - the client-owned favorites set

mod favorites;
mod profile;
mod query;

pub use favorites::FavoriteSet;
pub use profile::{Profile, ProfileId, ProfilePage};
pub use query::{
    FAVORITES_FILTER, FilterChoice, ListMode, ListRequest, ON_DEMAND_TOPIC, PAGE_SIZE, PageParams,
    SortKey,
};
