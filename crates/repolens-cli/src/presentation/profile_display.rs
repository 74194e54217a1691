//! Listing display for CLI output.

use std::fmt::Write;

use repolens_core::services::{ProfileList, Sidebar};
use repolens_core::{FavoriteSet, ListMode, Profile};

use super::tables::{separator, truncate_string};

const TITLE_WIDTH: usize = 48;
const SUMMARY_WIDTH: usize = 72;
const NO_LINK: &str = "(no repository link)";

/// One profile as a short block of lines.
///
/// ```text
/// ★ #12    Tokio
///          Rust, async runtime, mio
///          https://github.com/tokio-rs/tokio
///          image: https://cdn.example.com/tokio.png
/// ```
///
/// The summary and image lines are left out when absent.
pub fn format_profile_row(profile: &Profile, favorited: bool) -> String {
    let star = if favorited { '★' } else { '☆' };
    let mut out = format!(
        "{star} {:<7} {}",
        format!("#{}", profile.id),
        truncate_string(profile.display_title(), TITLE_WIDTH)
    );

    if let Some(summary) = profile
        .tech_stack_summary
        .as_deref()
        .filter(|s| !s.trim().is_empty())
    {
        let _ = write!(out, "\n{:9} {}", "", truncate_string(summary, SUMMARY_WIDTH));
    }
    let _ = write!(out, "\n{:9} {}", "", profile.link().unwrap_or(NO_LINK));
    if let Some(image) = profile
        .image_url
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        let _ = write!(out, "\n{:9} image: {image}", "");
    }
    out
}

/// The message shown instead of items, if any.
pub fn listing_status(list: &ProfileList) -> Option<String> {
    if list.is_loading() {
        return Some("Loading...".to_string());
    }
    list.error_message()
        .map(str::to_string)
        .or_else(|| list.empty_message())
}

/// Pagination footer; `None` for a single page.
pub fn pagination_line(list: &ProfileList) -> Option<String> {
    if !list.shows_pagination() {
        return None;
    }

    let previous = if list.has_previous() { "‹ prev" } else { "      " };
    let next = if list.has_next() { "next ›" } else { "" };
    Some(format!(
        "{previous}   page {} of {}   {next}",
        list.page() + 1,
        list.total_pages()
    ))
}

/// The whole listing: header, items or status, pagination.
pub fn format_listing(list: &ProfileList, favorites: &FavoriteSet) -> String {
    let mut out = format!("Showing {} (sort: {})\n", list.mode(), list.sort());
    out.push_str(&separator(60));

    if let Some(status) = listing_status(list) {
        let _ = write!(out, "\n{status}");
    } else {
        for profile in list.items() {
            let _ = write!(
                out,
                "\n{}",
                format_profile_row(profile, favorites.contains(profile.id))
            );
        }
    }

    if let Some(pagination) = pagination_line(list) {
        let _ = write!(out, "\n{}\n{pagination}", separator(60));
    }
    out
}

/// Filter buttons on one line, the active one in brackets.
pub fn filter_line(sidebar: &Sidebar, mode: &ListMode) -> String {
    sidebar
        .filter_choices()
        .iter()
        .map(|choice| {
            if Sidebar::is_active(choice, mode) {
                format!("[{}]", choice.label())
            } else {
                choice.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use repolens_core::ProfilePage;

    fn profile(id: i64) -> Profile {
        let mut profile = Profile::new(id, format!("o/r{id}"), format!("https://github.com/o/r{id}"));
        profile.tech_stack_summary = Some("Rust, tokio".to_string());
        profile
    }

    fn loaded(page: ProfilePage) -> ProfileList {
        let mut list = ProfileList::new();
        let ticket = list.begin_fetch(&FavoriteSet::new());
        list.complete(&ticket, Ok(page));
        list
    }

    #[test]
    fn test_profile_row_marks_favorites() {
        let row = format_profile_row(&profile(12), true);
        assert!(row.starts_with("★ #12"));
        assert!(row.contains("Rust, tokio"));
        assert!(row.ends_with("https://github.com/o/r12"));

        assert!(format_profile_row(&profile(12), false).starts_with('☆'));
    }

    #[test]
    fn test_profile_row_shows_image_when_present() {
        let mut with_image = profile(4);
        with_image.image_url = Some("https://cdn.example.com/r4.png".to_string());
        let row = format_profile_row(&with_image, false);
        assert!(row.ends_with("image: https://cdn.example.com/r4.png"));

        assert!(!format_profile_row(&profile(4), false).contains("image:"));
    }

    #[test]
    fn test_profile_row_without_repo_url() {
        let row = format_profile_row(&Profile::new(9, "a/nine", ""), false);
        assert!(row.starts_with("☆ #9"));
        assert!(row.ends_with("(no repository link)"));
    }

    #[test]
    fn test_empty_listing_message() {
        let list = loaded(ProfilePage::empty());
        assert_eq!(
            listing_status(&list).as_deref(),
            Some("No repository analyses yet.")
        );
        assert!(pagination_line(&list).is_none());
    }

    #[test]
    fn test_pagination_line() {
        let list = loaded(ProfilePage::new(vec![profile(1)], 3));
        assert_eq!(
            pagination_line(&list).as_deref(),
            Some("         page 1 of 3   next ›")
        );
    }

    #[test]
    fn test_format_listing_shows_items() {
        let list = loaded(ProfilePage::new(vec![profile(1), profile(2)], 1));
        let favorites = FavoriteSet::from_iter([2]);
        let out = format_listing(&list, &favorites);

        assert!(out.starts_with("Showing all (sort: newest)"));
        assert!(out.contains("☆ #1"));
        assert!(out.contains("★ #2"));
    }
}
