//! Turns format-instructed (but not format-guaranteed) model output into
//! review records. Segments that break the field contract are dropped one by
//! one; the whole input never fails.

use super::model::{Review, ReviewSource};
use regex::Regex;
use std::sync::LazyLock;

pub const START_MARKER: &str = "START_REVIEW";
pub const END_MARKER: &str = "END_REVIEW";

/// Prefix for synthetic ids; the suffix is the zero-based position among
/// accepted records.
const LIVE_ID_PREFIX: &str = "google-live";

/// Bold/italic runs the model sometimes wraps around field labels.
static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[*_]{2,}").unwrap());

static AUTHOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)Author:\s*(.+)").unwrap());
static RATING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)Rating:\s*(\d+)").unwrap());
static DATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)Date:\s*(.+)").unwrap());
static TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?is)Text:\s*(.+?)(?:{END_MARKER}|$)")).unwrap()
});

/// Parse raw model output into reviews, all tagged `Google` and carrying the
/// shared attribution URL. Returns an empty vec (never an error) when nothing
/// matches the contract.
pub fn extract_reviews(raw: &str, attribution_url: &str) -> Vec<Review> {
    let mut reviews = Vec::new();

    // Everything before the first marker is preamble the model added despite
    // instructions; skip(1) discards it.
    for segment in raw.split(START_MARKER).skip(1) {
        let cleaned = EMPHASIS.replace_all(segment, "");

        let Some(author) = AUTHOR
            .captures(&cleaned)
            .map(|captures| captures[1].trim().to_string())
        else {
            continue;
        };
        let Some(rating) = RATING
            .captures(&cleaned)
            .and_then(|captures| captures[1].parse::<u8>().ok())
        else {
            continue;
        };
        let Some(text) = TEXT
            .captures(&cleaned)
            .map(|captures| captures[1].trim().to_string())
        else {
            continue;
        };
        let date = DATE.captures(&cleaned).map_or_else(
            || "Recent".to_string(),
            |captures| captures[1].trim().to_string(),
        );

        reviews.push(Review {
            id: format!("{LIVE_ID_PREFIX}-{}", reviews.len()),
            author,
            rating,
            text,
            date,
            source: ReviewSource::Google,
            url: Some(attribution_url.to_string()),
        });
    }

    reviews
}

#[cfg(test)]
mod tests;
