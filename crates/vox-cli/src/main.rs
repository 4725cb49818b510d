//! One-shot batch scraper for VOX Cinemas showtimes.
//!
//! Fetches the "What's On" listing, enriches every movie with a
//! multi-day showtime schedule, and writes the full record set to a
//! JSON file. A failure while fetching or parsing the listing aborts
//! the run without writing output; per-date failures during enrichment
//! only leave that date's schedule empty.

use std::path::PathBuf;
use std::process;

use chrono::NaiveDate;
use clap::Parser;
use tracing::{error, info, Level};

use vox_core::{write_movies, ClientConfig, VoxScraper};

#[derive(Parser, Debug)]
#[command(version, about = "Scrape VOX Cinemas listings and showtimes into a JSON export")]
struct Args {
    /// First calendar date to collect showtimes for (YYYY-MM-DD)
    #[arg(long, default_value = "2025-02-12")]
    start_date: NaiveDate,

    /// Number of consecutive days to collect
    #[arg(long, default_value_t = 10)]
    days: u32,

    /// Output file for the JSON export
    #[arg(short, long, default_value = "movies.json")]
    output: PathBuf,

    /// Base URL of the cinema site
    #[arg(long, default_value = vox_core::client::DEFAULT_BASE_URL)]
    base_url: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        error!("scrape failed: {e}");
        process::exit(1);
    }
}

async fn run(args: Args) -> vox_core::Result<()> {
    info!("fetching movie listings from {}", args.base_url);

    let scraper = VoxScraper::with_config(ClientConfig {
        base_url: args.base_url,
        ..ClientConfig::default()
    })?;

    let mut movies = scraper.whats_on().await?;
    info!("found {} movies", movies.len());

    for movie in &mut movies {
        info!("enriching '{}' with daily showtimes", movie.title);
        scraper
            .enrich_timings(movie, args.start_date, args.days)
            .await;
    }

    write_movies(&movies, &args.output)?;
    info!("data saved to {}", args.output.display());

    Ok(())
}
