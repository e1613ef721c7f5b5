//! GitHub Topics Scraper entry point
//!
//! Command-line interface for scraping GitHub topics and their top
//! repositories into CSV files.

use clap::Parser;
use github_topics_scraper::config::{load_config_with_hash, validate, Config};
use github_topics_scraper::crawler::run_scrape;
use github_topics_scraper::output::print_summary;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// GitHub Topics Scraper: top repositories for every GitHub topic
///
/// Loads https://github.com/topics in a headless browser, expands the list
/// with its "load more" button, and saves the topics to
/// Topics_Information/topics_information.csv. Then scrapes each topic's
/// repositories into topics/<topic>.csv.
#[derive(Parser, Debug)]
#[command(name = "github-topics-scraper")]
#[command(version = "1.0.0")]
#[command(about = "Scrape GitHub topics and their top repositories to CSV", long_about = None)]
struct Cli {
    /// Optional TOML configuration file; built-in defaults are used without it
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show a browser window instead of running headless
    #[arg(long)]
    headful: bool,

    /// Only scrape repositories for the first N topics
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    max_topics: Option<u64>,

    /// Print the effective configuration without scraping
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    cfg
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => {
            tracing::debug!("No configuration file given, using defaults");
            Config::default()
        }
    };

    // Command-line overrides
    if cli.headful {
        config.browser.headless = false;
    }
    if let Some(max_topics) = cli.max_topics {
        config.output.max_topics = Some(max_topics as usize);
    }
    validate(&config)?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_scrape(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("github_topics_scraper=info,warn"),
            1 => EnvFilter::new("github_topics_scraper=debug,info"),
            2 => EnvFilter::new("github_topics_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows what would be scraped
fn handle_dry_run(config: &Config) {
    println!("=== GitHub Topics Scraper Dry Run ===\n");

    println!("Site:");
    println!("  Topics URL: {}", config.site.topics_url);
    println!("  Base URL: {}", config.site.base_url);

    println!("\nPagination:");
    println!(
        "  Topics page clicks: {}",
        config.pagination.topics_max_clicks
    );
    println!(
        "  Repository page clicks: {}",
        config.pagination.repos_max_clicks
    );
    println!("  Wait timeout: {}s", config.pagination.wait_timeout_secs);
    println!("  Settle delay: {}ms", config.pagination.settle_delay_ms);
    println!(
        "  Load-more selector: {}",
        config.pagination.load_more_selector
    );

    println!("\nBrowser:");
    println!("  Headless: {}", config.browser.headless);
    match &config.browser.chrome_executable {
        Some(path) => println!("  Executable: {}", path.display()),
        None => println!("  Executable: autodetect"),
    }

    println!("\nOutput:");
    println!("  Topics table: {}", config.output.topics_path().display());
    println!(
        "  Repository tables: {}/<topic>.csv",
        config.output.repos_dir.display()
    );
    match config.output.max_topics {
        Some(n) => println!("  Topics to scrape: first {}", n),
        None => println!("  Topics to scrape: all"),
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the main scrape operation
async fn handle_scrape(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Starting scrape of {}", config.site.topics_url);

    match run_scrape(config).await {
        Ok(summary) => {
            tracing::info!("Scrape completed successfully");
            print_summary(&summary);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            Err(e.into())
        }
    }
}
