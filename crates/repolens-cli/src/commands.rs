//! Subcommands.

use clap::Subcommand;

use repolens_core::{FilterChoice, ListMode, ProfileId, SortKey};

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List analyzed repositories
    List {
        /// Search project titles and tech stacks
        #[arg(short, long, conflicts_with_all = ["topic", "favorites"])]
        search: Option<String>,
        /// Only show one topic
        #[arg(short, long, conflicts_with = "favorites")]
        topic: Option<String>,
        /// Only show favorites
        #[arg(short, long)]
        favorites: bool,
        /// Page to show, starting at 1.
        ///
        /// Pages after the first cost an extra request: page 1 is fetched
        /// first to learn the page count.
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
        /// Sort order: newest, oldest or name
        #[arg(long, default_value_t = SortKey::NewestFirst)]
        sort: SortKey,
    },

    /// Show the available filters
    Topics,

    /// Add a repository to favorites, or remove it if already there
    Favorite {
        /// ID of the analysis
        id: ProfileId,
    },

    /// Show the favorite IDs stored locally
    Favorites,

    /// Delete an analysis from the server
    Remove {
        /// ID of the analysis to delete
        id: ProfileId,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Request an on-demand analysis of a GitHub repository
    Analyze {
        /// Repository URL, e.g. https://github.com/owner/name
        url: String,
    },

    /// Open an interactive browsing session
    Browse,
}

/// Listing mode selected by the `list` flags.
pub fn list_mode(search: Option<&str>, topic: Option<&str>, favorites: bool) -> ListMode {
    if let Some(keyword) = search {
        ListMode::search(keyword)
    } else if favorites {
        ListMode::FavoritesOnly
    } else if let Some(topic) = topic {
        FilterChoice::parse(topic).into()
    } else {
        ListMode::All
    }
}
