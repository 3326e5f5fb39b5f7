//! pricematch CLI - suggest catalog prices for a quote line item

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pricematch::{MatchQuery, PriceListItem, PriceMatchConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pricematch")]
#[command(version)]
#[command(about = "Suggest saved catalog prices for a quote line item", long_about = None)]
struct Cli {
    /// Price catalog: JSON array of {"name", "price", "unit"?}
    #[arg(long)]
    catalog: PathBuf,

    /// Line-item name to match
    #[arg(long)]
    name: String,

    /// Line-item unit (ea, hr, sq ft, ...)
    #[arg(long)]
    unit: Option<String>,

    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override options.max_results
    #[arg(long)]
    max_results: Option<usize>,

    /// Override options.min_score
    #[arg(long)]
    min_score: Option<f64>,

    /// Include the per-signal score breakdown
    #[arg(long)]
    explain: bool,

    /// Verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => PriceMatchConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => PriceMatchConfig::default(),
    };

    let raw = fs::read_to_string(&cli.catalog)
        .with_context(|| format!("failed to read catalog {}", cli.catalog.display()))?;
    let catalog: Vec<PriceListItem> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse catalog {}", cli.catalog.display()))?;

    let mut options = config.match_options();
    if let Some(max_results) = cli.max_results {
        options.max_results = max_results;
    }
    if let Some(min_score) = cli.min_score {
        options.min_score = min_score;
    }
    options.explain |= cli.explain;

    let matcher = config.matcher()?;
    let query = MatchQuery::from_parts(&cli.name, cli.unit.as_deref());
    let candidates = matcher.candidates(&query, &catalog, &options);

    tracing::info!(
        catalog_size = catalog.len(),
        returned = candidates.len(),
        "cli_match_complete"
    );

    println!("{}", serde_json::to_string_pretty(&candidates)?);
    Ok(())
}
