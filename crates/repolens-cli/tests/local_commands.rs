//! Commands that only touch local state, run against a temporary data
//! directory.

use repolens_cli::{CliConfig, bootstrap, handlers};
use repolens_core::FavoritesStore;
use tempfile::TempDir;

fn config(dir: &TempDir) -> CliConfig {
    CliConfig {
        api_url: Some("http://127.0.0.1:9/api/projects".to_string()),
        data_dir: Some(dir.path().to_string_lossy().into_owned()),
    }
}

#[test]
fn favorite_toggles_persist_between_runs() {
    let dir = TempDir::new().unwrap();

    let ctx = bootstrap(&config(&dir)).unwrap();
    assert!(handlers::favorite::execute(&ctx, 9).unwrap());
    assert!(handlers::favorite::execute(&ctx, 7).unwrap());

    let ctx = bootstrap(&config(&dir)).unwrap();
    assert_eq!(ctx.favorites().load().unwrap(), Some(vec![7, 9]));
    assert!(!handlers::favorite::execute(&ctx, 9).unwrap());
    assert_eq!(ctx.favorites().load().unwrap(), Some(vec![7]));

    let file = dir.path().join("project_analyzer_favorites.json");
    assert_eq!(std::fs::read_to_string(file).unwrap(), "[7]");
}

#[test]
fn favorites_listing_handles_corrupt_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("project_analyzer_favorites.json"), "oops").unwrap();

    let ctx = bootstrap(&config(&dir)).unwrap();
    handlers::favorites::execute(&ctx).unwrap();
    assert!(handlers::favorite::execute(&ctx, 1).unwrap());
    assert_eq!(ctx.favorites().load().unwrap(), Some(vec![1]));
}

#[tokio::test]
async fn analyze_rejects_non_github_url_without_network() {
    let dir = TempDir::new().unwrap();
    let ctx = bootstrap(&config(&dir)).unwrap();

    let err = handlers::analyze::execute(&ctx, "https://gitlab.com/a/b")
        .await
        .unwrap_err();
    let cli_err = err.downcast_ref::<repolens_cli::CliError>().unwrap();
    assert_eq!(cli_err.exit_code(), 2);
}
