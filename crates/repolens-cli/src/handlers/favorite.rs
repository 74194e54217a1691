//! Favorite command handler.

use anyhow::Result;
use repolens_core::ProfileId;
use repolens_core::services::FavoritesService;

use crate::bootstrap::CliContext;

/// Toggle `id` in the local favorites set.
///
/// Returns `true` if `id` is now a favorite. The id is not checked against
/// the server.
pub fn execute(ctx: &CliContext, id: ProfileId) -> Result<bool> {
    let mut favorites = FavoritesService::load(ctx.favorites().clone());
    let favorited = favorites.toggle(id);

    if favorited {
        println!("★ Added #{id} to favorites.");
    } else {
        println!("☆ Removed #{id} from favorites.");
    }
    Ok(favorited)
}
