//! Main VOX scraper API
//!
//! This module provides the high-level API for scraping the VOX
//! Cinemas website. It combines the HTTP client with the parsers: the
//! movie listing, a single date's schedule for one movie, and the
//! date-range enrichment that merges daily schedules into a movie
//! record.

use chrono::{Days, NaiveDate};
use indexmap::IndexMap;
use tracing::{info, warn};

use crate::client::{ClientConfig, VoxClient};
use crate::error::Result;
use crate::parser::{parse_listing, parse_showtimes};
use crate::types::{DaySchedule, Movie, Showtimes};

/// Path of the "What's On" listing page
const WHATS_ON_PATH: &str = "/movies/whatson";

/// High-level scraper for VOX Cinemas.
///
/// All operations are asynchronous and fully sequential: every fetch
/// completes (or fails) before the next begins.
///
/// # Example
/// ```no_run
/// use vox_core::VoxScraper;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = VoxScraper::new()?;
///
///     let movies = scraper.whats_on().await?;
///     println!("Found {} movies", movies.len());
///
///     Ok(())
/// }
/// ```
pub struct VoxScraper {
    client: VoxClient,
}

impl VoxScraper {
    /// Create a new scraper against the production site.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        let client = VoxClient::new()?;
        Ok(Self { client })
    }

    /// Create a new scraper with custom client configuration.
    ///
    /// This is how tests point the scraper at a mock server.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = VoxClient::with_config(config)?;
        Ok(Self { client })
    }

    /// Create a new scraper with a pre-configured client.
    pub fn with_client(client: VoxClient) -> Self {
        Self { client }
    }

    /// Fetch and parse the "What's On" listing.
    ///
    /// # Returns
    /// * `Ok(Vec<Movie>)` with one record per listed movie, `timings`
    ///   empty
    /// * `Err(VoxError)` if the listing fetch or parse fails
    pub async fn whats_on(&self) -> Result<Vec<Movie>> {
        let html = self.client.fetch(WHATS_ON_PATH).await?;
        parse_listing(&html)
    }

    /// Fetch and parse one movie's schedule for one date.
    ///
    /// # Arguments
    /// * `slug` - The movie's URL slug from the listing
    /// * `date` - Calendar date to request
    ///
    /// # Returns
    /// * `Ok(Showtimes)` — empty if the page has no schedule container
    /// * `Err(VoxError)` on fetch failure
    pub async fn day_schedule(&self, slug: &str, date: NaiveDate) -> Result<Showtimes> {
        let path = format!("/movies/{}?d={}#showtimes", slug, date.format("%Y%m%d"));
        let html = self.client.fetch(&path).await?;
        parse_showtimes(&html)
    }

    /// Fill a movie's `timings` with schedules for a contiguous date
    /// range.
    ///
    /// Any existing timings are discarded. For each of the `days`
    /// consecutive dates starting at `start_date`, the movie's detail
    /// page is fetched and parsed; the result is stored under the ISO
    /// date key together with the weekday name computed from the date.
    /// A failed date is logged and stored with an empty schedule — one
    /// bad day must not lose the others — so `timings` always ends up
    /// with exactly `days` entries.
    ///
    /// # Arguments
    /// * `movie` - Record to enrich (mutated in place)
    /// * `start_date` - First date of the range
    /// * `days` - Number of consecutive dates to request
    pub async fn enrich_timings(&self, movie: &mut Movie, start_date: NaiveDate, days: u32) {
        movie.timings = IndexMap::new();

        if movie.slug.is_empty() {
            // The request is still issued; a slug-less entry ends up
            // with an empty schedule for every date rather than being
            // dropped from the export.
            warn!("'{}' has an empty slug, detail requests will likely fail", movie.title);
        }

        for offset in 0..days {
            let date = start_date + Days::new(u64::from(offset));
            let iso_date = date.format("%Y-%m-%d").to_string();
            let day_of_week = date.format("%A").to_string();

            info!(
                "fetching showtimes for '{}' on {} ({})",
                movie.title, iso_date, day_of_week
            );

            let showtimes = match self.day_schedule(&movie.slug, date).await {
                Ok(showtimes) => showtimes,
                Err(e) => {
                    warn!("no showtimes for '{}' on {}: {}", movie.title, iso_date, e);
                    Showtimes::new()
                }
            };

            movie.timings.insert(
                iso_date,
                DaySchedule {
                    day_of_week,
                    showtimes,
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scraper_creation() {
        let scraper = VoxScraper::new();
        assert!(scraper.is_ok());
    }

    #[test]
    fn test_detail_path_shape() {
        // The detail URL combines slug, compact date and page anchor.
        let date = NaiveDate::from_ymd_opt(2025, 2, 12).unwrap();
        let path = format!("/movies/{}?d={}#showtimes", "the-batman", date.format("%Y%m%d"));
        assert_eq!(path, "/movies/the-batman?d=20250212#showtimes");
    }

    #[test]
    fn test_weekday_names_from_dates() {
        let wednesday = NaiveDate::from_ymd_opt(2025, 2, 12).unwrap();
        assert_eq!(wednesday.format("%A").to_string(), "Wednesday");

        let thursday = wednesday + Days::new(1);
        assert_eq!(thursday.format("%A").to_string(), "Thursday");

        let friday = wednesday + Days::new(2);
        assert_eq!(friday.format("%A").to_string(), "Friday");
    }
}
