//! Remove command handler.
//!
//! Deletes an analysis on the server. If it was a favorite it is dropped
//! from the local set too.

use std::sync::Arc;

use anyhow::Result;
use repolens_core::ports::ConfirmPrompt;
use repolens_core::{FixedAnswer, Outcome, ProfileId};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::utils::input::StdinConfirm;

/// Execute the remove command.
///
/// Asks for confirmation unless `force` is set.
pub async fn execute(ctx: &CliContext, id: ProfileId, force: bool) -> Result<()> {
    let confirm: Arc<dyn ConfirmPrompt> = if force {
        Arc::new(FixedAnswer(true))
    } else {
        Arc::new(StdinConfirm)
    };
    let mut dashboard = ctx.dashboard(confirm);

    match dashboard.delete(id).await {
        Outcome::Deleted(id) => {
            println!("Analysis #{id} deleted.");
            Ok(())
        }
        Outcome::DeleteCancelled => {
            println!("Remove operation cancelled.");
            Ok(())
        }
        Outcome::DeleteFailed(message) => Err(CliError::Api(message).into()),
        other => anyhow::bail!("unexpected delete outcome: {other:?}"),
    }
}
