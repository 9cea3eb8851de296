use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use ghfrecency::github::{self, GithubClient, Item, RepoRef};
use ghfrecency::util::config::AppConfig;

#[derive(Parser, Debug)]
#[command(
    name = "ghfrecency",
    version,
    about = "List recently opened pull requests and issues"
)]
struct Cli {
    /// Repository as [HOST/]OWNER/REPO or a clone URL
    repo: String,

    /// Fetch issues instead of pull requests
    #[arg(short, long)]
    issues: bool,

    /// Only items created after this RFC 3339 timestamp
    #[arg(short, long, value_parser = DateTime::parse_from_rfc3339)]
    since: Option<DateTime<FixedOffset>>,

    /// Print items as a JSON array
    #[arg(long)]
    json: bool,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging to file
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;

    let _guard = setup_logging(&config, cli.debug)?;

    let repo = RepoRef::with_default_host(&cli.repo, &config.github.default_host)?;
    info!(repo = %repo, host = repo.host(), "ghfrecency starting");

    let token = match github::auth::resolve_token(repo.host()) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Authentication error: {e}");
            std::process::exit(1);
        }
    };

    let client = GithubClient::from_config(&token, &config.github)?;

    let result = match (cli.issues, cli.since) {
        (false, None) => github::fetch_open_pull_requests(&client, &repo).await,
        (false, Some(since)) => {
            github::fetch_open_pull_requests_since(&client, &repo, &since).await
        }
        (true, None) => github::fetch_open_issues(&client, &repo).await,
        (true, Some(since)) => github::fetch_open_issues_since(&client, &repo, &since).await,
    };

    let items = match result {
        Ok(items) => items,
        Err(e) => {
            eprintln!("Failed to fetch from {}: {e}", repo.host());
            std::process::exit(1);
        }
    };

    print_items(&items, cli.json)
}

fn print_items(items: &[Item], json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(items).context("Failed to serialize items")?;
        println!("{out}");
    } else {
        for item in items {
            println!("#{}\t{}", item.number, item.title);
        }
    }
    Ok(())
}

fn setup_logging(
    config: &AppConfig,
    debug: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    if !debug {
        return Ok(None);
    }

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "ghfrecency.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(config.log.filter.as_str())
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
