//! Filechron — file-version catalog extraction.
//!
//! Reads a version-history feed XML document, extracts the ordered
//! file-version catalog, and prints it for inspection.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use filechron_core::config::AppConfig;
use filechron_core::{AppError, AppResult};
use filechron_feed::FeedExtractor;

mod output;

use output::OutputFormat;

/// Extract and display a file-version catalog from a history feed.
#[derive(Debug, Parser)]
#[command(name = "filechron", version)]
struct Cli {
    /// Path to the feed XML document. Falls back to `feed.source` from
    /// the configuration when omitted.
    feed: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Configuration environment overlay to load (`config/<env>.toml`).
    #[arg(long, default_value = "development")]
    env: String,
}

fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(&cli, &config) {
        tracing::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().with_env_filter(filter).with_target(false).init();
        }
    }
}

fn run(cli: &Cli, config: &AppConfig) -> AppResult<()> {
    let feed_path = cli
        .feed
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.feed.source));

    tracing::info!(path = %feed_path.display(), "reading version feed");

    let metadata = std::fs::metadata(&feed_path)?;
    let max_bytes = config.feed.max_size_mb * 1024 * 1024;
    if metadata.len() > max_bytes {
        return Err(AppError::validation(format!(
            "Feed '{}' is {} bytes, larger than the configured maximum of {} MB",
            feed_path.display(),
            metadata.len(),
            config.feed.max_size_mb
        )));
    }

    let xml = std::fs::read_to_string(&feed_path)?;
    let records = FeedExtractor::new().extract(&xml)?;

    output::print_catalog(&records, cli.format)?;
    Ok(())
}
