//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no domain transforms. Functions return
//! strings so they can be tested; callers print them.

pub mod profile_display;
pub mod tables;

// Re-export commonly used items
pub use profile_display::{
    filter_line, format_listing, format_profile_row, listing_status, pagination_line,
};
pub use tables::{separator, truncate_string};
