//! Favorites command handler.

use anyhow::Result;
use repolens_core::services::FavoritesService;

use crate::bootstrap::CliContext;

/// Print the favorite ids stored locally. No request is made; use
/// `list --favorites` to fetch the profiles themselves.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let favorites = FavoritesService::load(ctx.favorites().clone());
    let ids = favorites.favorites().ids();

    if ids.is_empty() {
        println!("★ No favorites saved yet.");
        return Ok(());
    }

    let list: Vec<String> = ids.iter().map(|id| format!("#{id}")).collect();
    println!("{} favorite(s): {}", ids.len(), list.join(", "));
    Ok(())
}
