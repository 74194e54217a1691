//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via
//! bootstrap. Command dispatch routes to handlers which drive the core
//! dashboard.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use repolens_cli::handlers::list::ListArgs;
use repolens_cli::{Cli, CliConfig, CliError, Commands, bootstrap, commands, handlers};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_cli(&cli);
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap(&config)?;

    match command {
        Commands::List {
            search,
            topic,
            favorites,
            page,
            sort,
        } => {
            let args = ListArgs {
                mode: commands::list_mode(search.as_deref(), topic.as_deref(), favorites),
                page,
                sort,
            };
            handlers::list::execute(&ctx, args).await?;
        }
        Commands::Topics => {
            handlers::topics::execute(&ctx).await?;
        }
        Commands::Favorite { id } => {
            handlers::favorite::execute(&ctx, id)?;
        }
        Commands::Favorites => {
            handlers::favorites::execute(&ctx)?;
        }
        Commands::Remove { id, force } => {
            handlers::remove::execute(&ctx, id, force).await?;
        }
        Commands::Analyze { url } => {
            handlers::analyze::execute(&ctx, &url).await?;
        }
        Commands::Browse => {
            handlers::browse::execute(&ctx).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}
