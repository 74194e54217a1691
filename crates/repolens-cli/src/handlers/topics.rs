//! Topics command handler.

use anyhow::Result;
use repolens_core::services::Sidebar;

use crate::bootstrap::CliContext;

/// Print every filter the dashboard offers, topics included.
///
/// A failed topic fetch still prints the fixed filters.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let mut sidebar = Sidebar::new();
    sidebar.load_topics(ctx.api()).await;

    println!("Filters (use with `list --topic <name>`):");
    for choice in sidebar.filter_choices() {
        println!("  {}", choice.label());
    }
    if sidebar.topics().is_empty() {
        println!("(no topics available)");
    }
    Ok(())
}
