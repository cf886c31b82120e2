//! Yelp-Scout main entry point
//!
//! This is the command-line interface for the Yelp-Scout directory client.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use yelp_scout::api::{all_restaurants, reviews_for_business, ApiClient, MatchQuery};
use yelp_scout::config::{load_config_or_default, Config};
use yelp_scout::credential::read_api_key;
use yelp_scout::scrape::{build_scrape_client, scrape_reviews};
use yelp_scout::throttle::Pacer;

/// Yelp-Scout: a paced client for the Yelp business directory
///
/// Yelp-Scout collects restaurant listings page by page, resolves business
/// identities to their directory ids, and retrieves reviews either through
/// the API or from public listing pages.
#[derive(Parser, Debug)]
#[command(name = "yelp-scout")]
#[command(version = "0.1.0")]
#[command(about = "A paced client for the Yelp business directory", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults apply when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Path to the file holding the API key
    #[arg(short, long, value_name = "KEY_FILE", default_value = "yelp_api_key.txt")]
    key: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Collect every restaurant listed for a location
    Search {
        /// Free-text location, e.g. "Chicago"
        location: String,
    },

    /// Resolve a business identity and print its reviews
    Reviews {
        /// Business name
        #[arg(long)]
        name: String,

        /// Street address line
        #[arg(long, default_value = "")]
        address: String,

        /// City name
        #[arg(long)]
        city: String,

        /// Two-letter state code
        #[arg(long)]
        state: String,

        /// Two-letter country code
        #[arg(long)]
        country: String,
    },

    /// Extract reviews from a public listing page, following pagination
    Scrape {
        /// Listing page URL to start from
        url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config =
        load_config_or_default(cli.config.as_deref()).context("failed to load configuration")?;

    match cli.command {
        Command::Search { location } => handle_search(&config, &cli.key, &location).await,
        Command::Reviews {
            name,
            address,
            city,
            state,
            country,
        } => {
            let query = MatchQuery {
                name,
                address,
                city,
                state,
                country,
            };
            handle_reviews(&config, &cli.key, &query).await
        }
        Command::Scrape { url } => handle_scrape(&config, &url).await,
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("yelp_scout=info,warn"),
            1 => EnvFilter::new("yelp_scout=debug,info"),
            2 => EnvFilter::new("yelp_scout=trace,debug"),
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

/// Handles the `search` subcommand: collects the full restaurant listing
async fn handle_search(config: &Config, key_path: &Path, location: &str) -> anyhow::Result<()> {
    let key = read_api_key(key_path)
        .with_context(|| format!("failed to read API key from {}", key_path.display()))?;
    let client = ApiClient::new(&config.api).context("failed to build API client")?;
    let pacer = Pacer::from_millis(config.api.page_delay_ms);

    let businesses = all_restaurants(&client, &key, location, &pacer)
        .await
        .context("bulk search failed")?;

    println!("Collected {} restaurants for {}", businesses.len(), location);
    for business in &businesses {
        match (&business.name, &business.url) {
            (Some(name), Some(url)) => println!("  {} - {}", name, url),
            (Some(name), None) => println!("  {}", name),
            _ => println!("  {}", business.id),
        }
    }

    Ok(())
}

/// Handles the `reviews` subcommand: identity match followed by review fetch
async fn handle_reviews(
    config: &Config,
    key_path: &Path,
    query: &MatchQuery,
) -> anyhow::Result<()> {
    let key = read_api_key(key_path)
        .with_context(|| format!("failed to read API key from {}", key_path.display()))?;
    let client = ApiClient::new(&config.api).context("failed to build API client")?;

    match reviews_for_business(&client, &key, query)
        .await
        .context("review lookup failed")?
    {
        Some(result) => {
            println!(
                "{} of {} reviews available via the API:",
                result.reviews.len(),
                result.total
            );
            for review in &result.reviews {
                println!("  {} rated {} on {}", review.author, review.rating, review.date);
                println!("    {}", review.text);
            }
        }
        None => println!("No business matched '{}'", query.name),
    }

    Ok(())
}

/// Handles the `scrape` subcommand: multi-page review extraction
async fn handle_scrape(config: &Config, url: &str) -> anyhow::Result<()> {
    let client = build_scrape_client(&config.scrape).context("failed to build scrape client")?;

    let reviews = scrape_reviews(&client, url)
        .await
        .context("review scrape failed")?;

    println!("Extracted {} reviews", reviews.len());
    for review in &reviews {
        println!("  {} rated {} on {}", review.author, review.rating, review.date);
        println!("    {}", review.text);
    }

    Ok(())
}
