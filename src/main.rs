//! Sitemap-Ripple main entry point
//!
//! This is the command-line interface for the Sitemap-Ripple sitemap generator.

use anyhow::{Context, Result};
use clap::Parser;
use sitemap_ripple::config::load_config_or_default;
use sitemap_ripple::output::{print_statistics, HTML_SITEMAP_FILE};
use sitemap_ripple::url::validate_seed_url;
use sitemap_ripple::{generate_sitemap, RunOutcome};
use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Name of the run log written inside the output directory
const LOG_FILE: &str = "sitemap_generator.log";

/// Sitemap-Ripple: a polite single-site sitemap generator
///
/// Sitemap-Ripple crawls one website breadth-first from a seed URL while
/// respecting robots.txt and a request rate limit, then writes sitemap XML
/// (chunked and gzip-compressed) and a browsable HTML sitemap.
#[derive(Parser, Debug)]
#[command(name = "sitemap-ripple")]
#[command(version = "1.0.0")]
#[command(about = "A polite single-site sitemap generator", long_about = None)]
struct Cli {
    /// Site to crawl, e.g. https://example.com (prompted for if omitted)
    #[arg(value_name = "SEED")]
    seed: Option<String>,

    /// Path to TOML configuration file (default: ./sitemap_config.toml if present)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Directory under which the per-host output directory is created
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output_root: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    let input = match cli.seed {
        Some(seed) => seed,
        None => prompt_for_seed()?,
    };
    let seed = validate_seed_url(&input)?;

    // Output directory is named after the seed host
    let output_dir = cli.output_root.join(seed.host_key());
    fs::create_dir_all(&output_dir).with_context(|| {
        format!("Failed to create output directory {}", output_dir.display())
    })?;

    let log_path = output_dir.join(LOG_FILE);
    setup_logging(cli.verbose, cli.quiet, &log_path)?;

    tracing::info!(
        "Crawling {} (max depth {}, {} concurrent, {} req/s)",
        seed.as_str(),
        config.max_depth,
        config.max_concurrent_requests,
        config.requests_per_second
    );

    let outcome = match generate_sitemap(&seed, config, &output_dir).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("Unexpected error: {}", e);
            return Err(e).context("Sitemap generation failed");
        }
    };

    match outcome {
        RunOutcome::Empty { stats } => {
            println!("No URLs found to include in sitemap");
            println!();
            print_statistics(&stats);
        }
        RunOutcome::Written { summary, stats } => {
            if summary.index_written {
                println!(
                    "Sitemap index generated with {} sitemaps containing {} URLs",
                    summary.chunk_count, summary.url_count
                );
            } else {
                println!("Sitemap generated with {} URLs", summary.url_count);
            }
            println!(
                "Compressed sitemap(s) saved as .gz files in {}",
                output_dir.display()
            );
            println!(
                "HTML sitemap saved as '{}' in {}",
                HTML_SITEMAP_FILE,
                output_dir.display()
            );
            println!("Check '{}' for detailed logs", log_path.display());
            println!();
            print_statistics(&stats);
        }
    }

    Ok(())
}

/// Asks for the seed URL on stdin
fn prompt_for_seed() -> Result<String> {
    print!("Enter the website URL (e.g., https://example.com): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read website URL")?;
    Ok(line.trim().to_string())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Events go to stderr and, without colour, to the run log in the output
/// directory. The log file is appended to across runs.
fn setup_logging(verbose: u8, quiet: bool, log_path: &Path) -> Result<()> {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitemap_ripple=info,warn"),
            1 => EnvFilter::new("sitemap_ripple=debug,info"),
            2 => EnvFilter::new("sitemap_ripple=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false),
        )
        .with(
            fmt::layer()
                .with_writer(Mutex::new(log_file))
                .with_ansi(false)
                .with_target(false),
        )
        .init();

    Ok(())
}
