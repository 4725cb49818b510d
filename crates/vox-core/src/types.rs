//! Data types for the VOX showtimes scraper
//!
//! This module contains the core data structures used throughout the
//! library. All types implement Serialize and Deserialize so the full
//! record set can round-trip through the JSON export.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Cinema location → experience → ordered showtime strings.
///
/// Times appear in document order as scraped from the detail page.
/// A time entry is usually `H:MM`/`HH:MM`, but non-numeric labels such
/// as "Sold Out" are kept verbatim as opaque tokens.
pub type Showtimes = IndexMap<String, IndexMap<String, Vec<String>>>;

/// One movie from the "What's On" listing page.
///
/// Display metadata fields are empty strings when the listing markup
/// does not carry them. `timings` starts empty and is filled in by
/// [`crate::scraper::VoxScraper::enrich_timings`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// URL slug used to build detail-page requests
    pub slug: String,
    /// Secondary site-assigned identifier (opaque)
    pub identifier: String,
    /// Display title
    pub title: String,
    /// Synopsis text
    pub description: String,
    /// Poster image URL
    pub image_url: String,
    /// Age classification label
    pub classification: String,
    /// Spoken language, without the site's "Language:" prefix
    pub language: String,
    /// Showtimes link advertised on the listing page (informational)
    pub showtimes_url: String,
    /// ISO date (`YYYY-MM-DD`) → schedule for that day
    pub timings: IndexMap<String, DaySchedule>,
}

/// Schedule for a single calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Full English weekday name, derived from the date itself
    pub day_of_week: String,
    /// Cinema → experience → times; empty when the date's fetch or
    /// parse failed
    pub showtimes: Showtimes,
}
