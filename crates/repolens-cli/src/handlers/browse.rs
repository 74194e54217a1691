//! Browse command handler - an interactive session over one dashboard.
//!
//! Each input line is parsed into an [`Intent`] and dispatched; the
//! listing is re-rendered after anything that changes it.

use std::sync::Arc;

use anyhow::Result;
use repolens_core::services::Dashboard;
use repolens_core::{FilterChoice, Intent, Outcome, ProfileId, SortKey};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{filter_line, format_listing};
use crate::utils::input::StdinConfirm;

const PROMPT: &str = "repolens> ";

const HELP: &str = "\
Commands:
  search <keyword>     search titles and tech stacks (empty clears)
  filter <name>        all, favorites, On-Demand or a topic name
  filters              show the available filters
  fav <id>             toggle a favorite
  rm <id>              delete an analysis
  analyze <url>        request analysis of https://github.com/...
  next, prev           move between pages
  page <n>             jump to page n
  sort <key>           newest, oldest or name
  refresh              reload the current page
  help                 show this help
  quit                 leave the session";

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Intent(Intent),
    Filters,
    Help,
    Quit,
    Empty,
}

fn parse_id(arg: &str) -> Result<ProfileId, String> {
    arg.parse()
        .map_err(|_| format!("'{arg}' is not a valid analysis id"))
}

/// Parse one line of shell input.
pub fn parse_shell_line(line: &str) -> Result<ShellCommand, String> {
    let line = line.trim();
    let (command, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(command, rest)| (command, rest.trim()));

    let intent = match command.to_lowercase().as_str() {
        "" => return Ok(ShellCommand::Empty),
        "help" | "?" => return Ok(ShellCommand::Help),
        "quit" | "exit" | "q" => return Ok(ShellCommand::Quit),
        "filters" | "topics" => return Ok(ShellCommand::Filters),
        "search" | "s" => Intent::Search(rest.to_string()),
        "filter" | "f" => Intent::Filter(FilterChoice::parse(rest)),
        "fav" | "favorite" => Intent::ToggleFavorite(parse_id(rest)?),
        "rm" | "remove" | "delete" => Intent::Delete(parse_id(rest)?),
        "analyze" | "a" if rest.is_empty() => {
            return Err("usage: analyze <https://github.com/owner/name>".to_string());
        }
        "analyze" | "a" => Intent::Analyze(rest.to_string()),
        "next" | "n" => Intent::NextPage,
        "prev" | "p" => Intent::PreviousPage,
        "page" => {
            let page: u32 = rest
                .parse()
                .map_err(|_| format!("'{rest}' is not a page number"))?;
            if page == 0 {
                return Err("pages start at 1".to_string());
            }
            Intent::GoToPage(page - 1)
        }
        "sort" => Intent::ChangeSort(rest.parse::<SortKey>()?),
        "refresh" | "r" => Intent::Refresh,
        other => return Err(format!("unknown command '{other}' (try 'help')")),
    };
    Ok(ShellCommand::Intent(intent))
}

/// Text to print for an outcome, if any beyond the listing itself.
pub fn describe_outcome(outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::Refreshed => None,
        Outcome::FavoriteToggled { id, favorited: true } => {
            Some(format!("★ Added #{id} to favorites."))
        }
        Outcome::FavoriteToggled { id, favorited: false } => {
            Some(format!("☆ Removed #{id} from favorites."))
        }
        Outcome::Deleted(id) => Some(format!("Analysis #{id} deleted.")),
        Outcome::DeleteCancelled => Some("Delete cancelled.".to_string()),
        Outcome::DeleteFailed(message) => Some(message.clone()),
        Outcome::Analyzed(message) => Some(message.text().to_string()),
        Outcome::Ignored => Some("No such page.".to_string()),
    }
}

/// Whether the listing should be printed again after `outcome`.
const fn redraws_listing(outcome: &Outcome) -> bool {
    matches!(
        outcome,
        Outcome::Refreshed | Outcome::FavoriteToggled { .. } | Outcome::Deleted(_)
    )
}

fn render(dashboard: &Dashboard) {
    println!("{}", format_listing(dashboard.list(), dashboard.favorites()));
}

/// Execute the browse command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let mut dashboard = ctx.dashboard(Arc::new(StdinConfirm));
    dashboard.start().await;

    println!("{}", filter_line(dashboard.sidebar(), dashboard.mode()));
    render(&dashboard);
    println!("Type 'help' for commands.");

    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::Io(format!("failed to start line editor: {e}")))?;
    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(CliError::Io(format!("failed to read input: {e}")).into()),
        };
        let _ = editor.add_history_entry(line.as_str());

        match parse_shell_line(&line) {
            Ok(ShellCommand::Quit) => break,
            Ok(ShellCommand::Empty) => {}
            Ok(ShellCommand::Help) => println!("{HELP}"),
            Ok(ShellCommand::Filters) => {
                println!("{}", filter_line(dashboard.sidebar(), dashboard.mode()));
            }
            Ok(ShellCommand::Intent(intent)) => {
                let outcome = dashboard.dispatch(intent).await;
                if redraws_listing(&outcome) {
                    render(&dashboard);
                }
                if let Some(text) = describe_outcome(&outcome) {
                    println!("{text}");
                }
            }
            Err(message) => eprintln!("{message}"),
        }
    }

    Ok(())
}
