//! Coercion of stored film documents into typed [`Film`] records.
//!
//! This is the single place where loosely typed values are turned into
//! numbers. It runs once, right after the fetch:
//! - numeric `worldwideGross` values pass through unchanged
//! - text values are trimmed and parsed as `f64`
//! - anything that does not parse fails the *whole* batch
//!
//! Rust concepts you'll learn here:
//! - Converting between types with `str::parse`
//! - Collecting an iterator of `Result`s into a `Result<Vec<_>>`
//! - Error handling with the `?` operator

use crate::error::{DataLoadError, Result};
use crate::types::*;

/// Parse a text-encoded number the way the stored data writes them.
///
/// Surrounding whitespace is ignored. Returns `None` when the text is not a
/// floating-point literal.
///
/// The accepted grammar is Rust's `f64` literal syntax: digit-grouping
/// underscores (`"1_000"`) and thousands separators are rejected, while
/// `"nan"`, `"inf"` and out-of-range values such as `"1e400"` (infinity)
/// are accepted.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

/// Coerce a single document into a typed film.
///
/// `index` is the document's position in the batch; it is only used to
/// make error messages point at the offending record.
pub fn parse_film(index: usize, doc: &FilmDocument) -> Result<Film> {
    let worldwide_gross = match &doc.worldwide_gross {
        None => None,
        Some(GrossValue::Number(value)) => Some(*value),
        Some(GrossValue::Text(text)) => Some(parse_number(text).ok_or_else(|| {
            DataLoadError::MalformedRecord {
                index,
                title: doc.title.clone().unwrap_or_else(|| "<untitled>".to_string()),
                field: "worldwideGross".to_string(),
                value: text.clone(),
            }
        })?),
    };

    Ok(Film {
        title: doc.title.clone(),
        release_year: doc.release_year,
        box_office: doc.box_office,
        worldwide_gross,
        directors: doc.directors.clone(),
        country_of_origin: doc.country_of_origin.clone(),
    })
}

/// Coerce a whole batch of documents.
///
/// Stops at the first malformed record: no partial result is returned.
pub fn parse_films(docs: &[FilmDocument]) -> Result<Vec<Film>> {
    // Rust concept: `collect()` into `Result<Vec<_>>` short-circuits on the
    // first `Err`, so there is no need for a manual loop.
    docs.iter()
        .enumerate()
        .map(|(index, doc)| parse_film(index, doc))
        .collect()
}
