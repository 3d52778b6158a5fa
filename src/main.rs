use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use qgh::app::event_loop;
use qgh::app::state::AppState;
use qgh::github::GhClient;
use qgh::repo::discovery;
use qgh::search::{SearchMode, filter_repos};
use qgh::ui::table::render_table;
use qgh::util::config::AppConfig;

#[derive(Parser, Debug)]
#[command(
    name = "qgh",
    version,
    about = "Jump between local git repositories and your open GitHub pull requests"
)]
struct Cli {
    /// Traverse all directories, ignoring .gitignore files
    #[arg(long)]
    skip_ignore: bool,

    /// Start in PR search mode
    #[arg(long)]
    pr: bool,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging to file
    #[arg(short, long)]
    debug: bool,

    /// Initial search text
    query: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;

    // Setup logging
    let _guard = setup_logging(&config, cli.debug)?;

    info!("qgh starting");

    let cwd = std::env::current_dir().context("Error getting working directory")?;
    let env_workspace = std::env::var_os("QGH_WORKSPACE").map(PathBuf::from);
    let root = discovery::search_root(
        &cwd,
        env_workspace.as_deref(),
        config.search.workspace.as_deref(),
    );
    let respect_gitignore = config.search.respect_gitignore && !cli.skip_ignore;
    let repos = discovery::discover(&root, respect_gitignore);
    info!(root = %root.display(), count = repos.len(), "Discovered repositories");

    let client = GhClient::new(&config.github.gh_program, config.github.pr_search_limit);
    let mode = if cli.pr {
        SearchMode::PullRequests
    } else {
        SearchMode::Local
    };
    let interactive = io::stdout().is_terminal() && io::stdin().is_terminal();
    let height = config.ui.fallback_height;

    // The working directory is a repository with nothing nested in it
    if repos.is_empty()
        && interactive
        && let Some(current) = discovery::current_repository(&root)
    {
        let state = AppState::for_single_repo(current, cwd, mode, height);
        let result = event_loop::run(state, client.clone()).await;
        report_auth_warning(&client);
        return result;
    }

    if repos.is_empty() {
        println!("No git repositories found in subdirectories.");
        return Ok(());
    }

    if interactive {
        let state = AppState::new(repos, cwd, mode, cli.query.unwrap_or_default(), height);
        let result = event_loop::run(state, client.clone()).await;
        report_auth_warning(&client);
        return result;
    }

    let cache = client.load_pr_cache().await;
    let annotated: Vec<_> = filter_repos(&repos, &cache, "", SearchMode::Local)
        .into_iter()
        .map(|entry| entry.repo)
        .collect();
    print!("{}", render_table(&annotated, &cwd));
    report_auth_warning(&client);
    Ok(())
}

fn report_auth_warning(client: &GhClient) {
    if let Some(warning) = client.take_auth_warning() {
        eprintln!("{warning}\n");
    }
}

fn setup_logging(
    config: &AppConfig,
    debug: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    if !debug {
        return Ok(None);
    }

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "qgh.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter("qgh=debug")
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
