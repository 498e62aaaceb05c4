//! launchfeed CLI - print upcoming and past launches from the cached client.
//!
//! The default view fetches via the shared page path and paginates locally.
//! `--block` exercises the independently cached block path the way an
//! embedded widget would.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use launchfeed::page::{paginate, ITEMS_PER_PAGE};
use launchfeed::{FileCache, Launch, LaunchClient, Settings};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ============================================================================
// Constants
// ============================================================================

/// Block view defaults when `--block` is given without arguments
const DEFAULT_BLOCK_LIMIT: usize = 3;
const DEFAULT_BLOCK_TTL_MINUTES: i64 = 10;

const USAGE: &str = "\
Usage: launchfeed [OPTIONS]

Options:
  --page N           Show page N of the launch list (1-based)
  --limit N          Fetch up to N launches instead of the configured default
  --block [N TTL]    Show a block view of N launches cached for TTL minutes
  --refresh          Drop the shared cache entry before fetching
  --help             Show this message";

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[derive(Debug, Default)]
struct CliArgs {
    page: usize,
    limit: Option<usize>,
    block: Option<(usize, i64)>,
    refresh: bool,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut iter = args.iter().peekable();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--page" => {
                let value = iter.next().context("--page requires a number")?;
                let page: usize = value.parse().context("--page requires a number")?;
                parsed.page = page.saturating_sub(1);
            }
            "--limit" => {
                let value = iter.next().context("--limit requires a number")?;
                parsed.limit = Some(value.parse().context("--limit requires a number")?);
            }
            "--block" => {
                // Optional pair of values, matching the block widget defaults
                if let Some(limit) = iter.peek().and_then(|v| v.parse::<usize>().ok()) {
                    iter.next();
                    let ttl: i64 = iter
                        .next()
                        .context("--block takes LIMIT and TTL together")?
                        .parse()
                        .context("--block TTL must be a number of minutes")?;
                    parsed.block = Some((limit, ttl));
                } else {
                    parsed.block = Some((DEFAULT_BLOCK_LIMIT, DEFAULT_BLOCK_TTL_MINUTES));
                }
            }
            "--refresh" => parsed.refresh = true,
            "--help" | "-h" => parsed.help = true,
            other => anyhow::bail!("unknown argument: {}\n\n{}", other, USAGE),
        }
    }

    Ok(parsed)
}

fn format_launch(launch: &Launch) -> String {
    let name = launch.name().unwrap_or("(unnamed)");
    let date = launch.date_utc().unwrap_or("unknown date");
    let outcome = match launch.success() {
        Some(true) => "success",
        Some(false) => "failure",
        None => "pending",
    };
    format!("{:<28} {:<26} {}", name, date, outcome)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&args)?;
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let settings = Settings::load()?;
    let cache = match FileCache::in_user_cache_dir() {
        Ok(cache) => cache,
        Err(_) => FileCache::new(PathBuf::from("./cache"))?,
    };
    let cache = Arc::new(cache);
    let client = LaunchClient::new(cache.clone(), settings)?;

    if args.refresh {
        use launchfeed::CacheStore;
        cache.remove(LaunchClient::page_cache_key());
        info!("dropped shared launch cache entry");
    }

    if let Some((limit, ttl)) = args.block {
        return block_view(&client, limit, ttl).await;
    }
    page_view(&client, args.limit, args.page).await
}

/// Paginated view over the shared page-level cache entry.
async fn page_view(client: &LaunchClient, limit: Option<usize>, page: usize) -> Result<()> {
    let Some(launches) = client.get_launches(limit).await else {
        println!("Unable to load launch data at this time.");
        return Ok(());
    };

    let view = paginate(&launches, page);
    println!(
        "Launches (page {} of {}, {} per page, {} total)",
        view.current_page + 1,
        view.total_pages,
        ITEMS_PER_PAGE,
        view.total_items
    );
    for launch in view.items {
        println!("  {}", format_launch(launch));
    }
    Ok(())
}

/// Block-style view with its own limit and cache lifetime.
async fn block_view(client: &LaunchClient, limit: usize, ttl_minutes: i64) -> Result<()> {
    let Some(launches) = client.get_launches_for_block(limit, ttl_minutes).await else {
        println!("Unable to load launch data at this time.");
        return Ok(());
    };

    println!("Latest launches");
    for launch in &launches {
        println!("  {}", format_launch(launch));
    }
    Ok(())
}
