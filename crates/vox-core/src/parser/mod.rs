//! HTML parsers for VOX Cinemas pages
//!
//! This module contains parsers for extracting data from VOX HTML pages:
//! - `listing`: parse the "What's On" page into movie records
//! - `showtimes`: parse a per-date detail page into a cinema →
//!   experience → time-list tree

pub mod listing;
pub mod showtimes;

// Re-export main parsing functions
pub use listing::parse_listing;
pub use showtimes::{parse_showtimes, time_tokens};

use scraper::ElementRef;

/// Collect an element's text nodes, trimmed and joined with single
/// spaces. Empty string if the element has no visible text.
pub(crate) fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
