//! User input utilities for interactive command-line prompts.

use std::io::{self, Write};

use anyhow::Result;
use repolens_core::ports::ConfirmPrompt;
use tracing::warn;

use crate::error::CliError;

/// Prompts the user for a string input.
///
/// The input is read from stdin and returned with whitespace trimmed.
pub fn prompt_string(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(CliError::from)?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(CliError::from)?;

    Ok(input.trim().to_string())
}

/// Interpret a yes/no answer. Empty input means no.
pub fn parse_confirmation(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" | "" => Some(false),
        _ => None,
    }
}

/// Prompts the user for a yes/no confirmation.
///
/// Accepts 'y', 'yes', 'n', 'no' (case insensitive).
/// Empty input is treated as 'no'.
pub fn prompt_confirmation(prompt: &str) -> Result<bool> {
    loop {
        let input = prompt_string(&format!("{prompt} (y/N)"))?;
        match parse_confirmation(&input) {
            Some(answer) => return Ok(answer),
            None => eprintln!("Please enter 'y' for yes or 'n' for no."),
        }
    }
}

/// Delete confirmation on the terminal.
///
/// A failed read counts as "no".
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfirm;

impl ConfirmPrompt for StdinConfirm {
    fn confirm(&self, question: &str) -> bool {
        prompt_confirmation(question).unwrap_or_else(|e| {
            warn!(error = %e, "Confirmation prompt failed");
            false
        })
    }
}
