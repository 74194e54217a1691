//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line client for the repository-analysis service.
#[derive(Parser)]
#[command(name = "repolens")]
#[command(about = "Browse, favorite and request repository analyses")]
#[command(version)]
pub struct Cli {
    /// Base URL of the projects API
    #[arg(long = "api-url", env = "REPOLENS_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Directory holding local state such as favorites
    #[arg(long = "data-dir", env = "REPOLENS_DATA_DIR", global = true)]
    pub data_dir: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "repolens",
            "--verbose",
            "--api-url",
            "http://analyzer:8080/api/projects",
            "--data-dir",
            "/tmp/repolens",
            "topics",
        ]);
        assert!(cli.verbose);
        assert_eq!(
            cli.api_url.as_deref(),
            Some("http://analyzer:8080/api/projects")
        );
        assert_eq!(cli.data_dir.as_deref(), Some("/tmp/repolens"));
        assert!(matches!(cli.command, Some(Commands::Topics)));
    }
}
