//! Detail page showtimes parser for VOX Cinemas
//!
//! Extracts the cinema → experience → time-list tree from one movie's
//! detail page for one date. The site's markup is not uniform, so
//! extraction is best-effort: malformed sub-structure degrades to
//! omission of that sub-entry, never to a parser-wide failure.

use indexmap::IndexMap;
use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, VoxError};
use crate::types::Showtimes;

use super::element_text;

/// Pattern for displayed times such as "9:30" or "14:05"
const TIME_PATTERN: &str = r"\b\d{1,2}:\d{2}\b";

/// Parse a detail page's schedule into a cinema → experience → times
/// tree.
///
/// The schedule lives in a `div.dates` container; each cinema is an
/// `h3.highlight` heading followed by an `ol.showtimes` sibling whose
/// direct list items are experiences. A page with no schedule container
/// yields an empty map.
///
/// # Arguments
/// * `html` - Raw HTML content of the detail page for one date
///
/// # Returns
/// * `Ok(Showtimes)` with cinemas in document order
/// * `Err(VoxError::Parse)` only on internal selector failure
pub fn parse_showtimes(html: &str) -> Result<Showtimes> {
    let document = Html::parse_document(html);

    let container_selector = Selector::parse("div.dates")
        .map_err(|e| VoxError::Parse(format!("Invalid selector: {e:?}")))?;
    let heading_selector = Selector::parse("h3.highlight")
        .map_err(|e| VoxError::Parse(format!("Invalid selector: {e:?}")))?;

    let container = match document.select(&container_selector).next() {
        Some(el) => el,
        None => return Ok(Showtimes::new()),
    };

    let mut by_cinema = Showtimes::new();

    for heading in container.select(&heading_selector) {
        let cinema = element_text(&heading);

        // A heading without a following experience list has nothing to
        // offer for this date.
        let experience_list = match following_showtimes_list(&heading) {
            Some(list) => list,
            None => continue,
        };

        by_cinema.insert(cinema, parse_experiences(&experience_list));
    }

    Ok(by_cinema)
}

/// Find the heading's following sibling `<ol class="showtimes">`.
fn following_showtimes_list<'a>(heading: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "ol" && el.value().classes().any(|c| c == "showtimes"))
}

/// Parse the experiences of one cinema's showtimes list.
///
/// Only direct `<li>` children are experience entries; deeper `<li>`
/// elements belong to the nested time lists.
fn parse_experiences(list: &ElementRef) -> IndexMap<String, Vec<String>> {
    let mut experiences = IndexMap::new();

    for item in list.children().filter_map(ElementRef::wrap) {
        if item.value().name() != "li" {
            continue;
        }
        if let Some((label, times)) = parse_experience_item(&item) {
            experiences.insert(label, times);
        }
    }

    experiences
}

/// Parse one experience entry: an emphasized label plus a nested list
/// of times. Items without either are skipped.
fn parse_experience_item(item: &ElementRef) -> Option<(String, Vec<String>)> {
    let label_selector = Selector::parse("strong").ok()?;
    let label = item
        .select(&label_selector)
        .next()
        .map(|el| element_text(&el))?;

    let list_selector = Selector::parse("ol").ok()?;
    let time_list = item.select(&list_selector).next()?;

    let entry_selector = Selector::parse("li").ok()?;
    let link_selector = Selector::parse("a").ok()?;

    let mut times = Vec::new();
    for entry in time_list.select(&entry_selector) {
        // Prefer the booking link's text; some entries carry a bare
        // label instead of a link.
        let text = match entry.select(&link_selector).next() {
            Some(link) => element_text(&link),
            None => element_text(&entry),
        };
        times.extend(time_tokens(&text));
    }

    Some((label, times))
}

/// Extract every `H:MM`/`HH:MM` token from a time entry's text.
///
/// Entries with no recognizable time keep their raw trimmed text as a
/// single opaque token, so labels such as "Sold Out" survive in the
/// schedule instead of being dropped.
pub fn time_tokens(text: &str) -> Vec<String> {
    if let Ok(pattern) = regex_lite::Regex::new(TIME_PATTERN) {
        let times: Vec<String> = pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();
        if !times.is_empty() {
            return times;
        }
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        Vec::new()
    } else {
        vec![trimmed.to_string()]
    }
}
