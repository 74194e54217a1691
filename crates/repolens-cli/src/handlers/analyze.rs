//! Analyze command handler.

use std::sync::Arc;

use anyhow::Result;
use repolens_core::{FixedAnswer, validate_analyze_url};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Request an on-demand analysis of `url`.
///
/// Non-GitHub URLs are rejected locally without contacting the server.
pub async fn execute(ctx: &CliContext, url: &str) -> Result<()> {
    if let Err(message) = validate_analyze_url(url) {
        return Err(CliError::Arguments(message.text().to_string()).into());
    }

    let mut dashboard = ctx.dashboard(Arc::new(FixedAnswer(false)));
    let message = dashboard.analyze(url).await;

    if message.is_error() {
        return Err(CliError::Api(message.text().to_string()).into());
    }
    println!("{}", message.text());
    Ok(())
}
