//! Listing page parser for VOX Cinemas
//!
//! Parses HTML from the "What's On" page to extract one movie record
//! per summary entry, in document order.

use indexmap::IndexMap;
use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, VoxError};
use crate::types::Movie;

use super::element_text;

/// Parse the "What's On" listing page into movie records.
///
/// Every `article.movie-summary` entry yields one record. Missing
/// optional sub-elements (description, image, classification,
/// language, showtimes link) yield empty strings rather than errors;
/// markup with no matching entries yields an empty list.
///
/// # Arguments
/// * `html` - Raw HTML content of the listing page
///
/// # Returns
/// * `Ok(Vec<Movie>)` with one record per movie entry, in document order
/// * `Err(VoxError::Parse)` only on internal selector failure
pub fn parse_listing(html: &str) -> Result<Vec<Movie>> {
    let document = Html::parse_document(html);

    let entry_selector = Selector::parse("article.movie-summary")
        .map_err(|e| VoxError::Parse(format!("Invalid selector: {e:?}")))?;

    let mut movies = Vec::new();
    for entry in document.select(&entry_selector) {
        movies.push(parse_movie_entry(&entry));
    }

    Ok(movies)
}

/// Parse a single movie summary entry.
fn parse_movie_entry(entry: &ElementRef) -> Movie {
    // "Language: English" → "English"
    let language = select_text(entry, "p.language")
        .replace("Language:", "")
        .trim()
        .to_string();

    Movie {
        slug: attr_or_default(entry, "data-slug"),
        identifier: attr_or_default(entry, "data-identifier"),
        title: attr_or_default(entry, "data-title"),
        description: select_text(entry, "p.movie-description"),
        image_url: select_attr(entry, "a img", "data-src"),
        classification: select_text(entry, "span.classification"),
        language,
        showtimes_url: showtimes_link(entry),
        timings: IndexMap::new(),
    }
}

/// Read a structured data attribute of the entry, trimmed, or empty.
fn attr_or_default(entry: &ElementRef, name: &str) -> String {
    entry.value().attr(name).unwrap_or("").trim().to_string()
}

/// Text of the first descendant matching `selector`, or empty.
fn select_text(entry: &ElementRef, selector: &str) -> String {
    Selector::parse(selector)
        .ok()
        .and_then(|sel| entry.select(&sel).next().map(|el| element_text(&el)))
        .unwrap_or_default()
}

/// Attribute of the first descendant matching `selector`, or empty.
fn select_attr(entry: &ElementRef, selector: &str, attr: &str) -> String {
    Selector::parse(selector)
        .ok()
        .and_then(|sel| entry.select(&sel).next())
        .and_then(|el| el.value().attr(attr))
        .unwrap_or("")
        .trim()
        .to_string()
}

/// Target of the first hyperlink whose visible text mentions
/// "Showtimes", or empty.
fn showtimes_link(entry: &ElementRef) -> String {
    let Ok(selector) = Selector::parse("a") else {
        return String::new();
    };

    entry
        .select(&selector)
        .find(|a| element_text(a).contains("Showtimes"))
        .and_then(|a| a.value().attr("href"))
        .unwrap_or("")
        .trim()
        .to_string()
}
