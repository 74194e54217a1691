//! List command handler.

use std::sync::Arc;

use anyhow::Result;
use repolens_core::{FixedAnswer, Intent, ListMode, Outcome, SortKey};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::format_listing;

/// Arguments for the list command.
#[derive(Debug, Clone)]
pub struct ListArgs {
    pub mode: ListMode,
    /// One-based page number.
    pub page: u32,
    pub sort: SortKey,
}

/// Execute the list command.
///
/// The first page is always fetched; later pages are reached through the
/// dashboard's normal navigation so the page count is known first.
pub async fn execute(ctx: &CliContext, args: ListArgs) -> Result<()> {
    let mut dashboard = ctx.dashboard(Arc::new(FixedAnswer(false)));

    dashboard.show(args.mode, args.sort).await;
    if let Some(message) = dashboard.list().error_message() {
        return Err(CliError::Api(message.to_string()).into());
    }

    let target = args.page.saturating_sub(1);
    if target > 0 && dashboard.dispatch(Intent::GoToPage(target)).await == Outcome::Ignored {
        let total = dashboard.list().total_pages();
        return Err(CliError::Arguments(format!(
            "page {} is out of range (there {} {total} page{})",
            args.page,
            if total == 1 { "is" } else { "are" },
            if total == 1 { "" } else { "s" },
        ))
        .into());
    }

    println!("{}", format_listing(dashboard.list(), dashboard.favorites()));

    // The page fetch itself can fail too
    match dashboard.list().error_message() {
        Some(message) => Err(CliError::Api(message.to_string()).into()),
        None => Ok(()),
    }
}
