//! Core domain types for the film collection.
//!
//! Two representations of a film live here:
//! - [`FilmDocument`]: the record exactly as it is stored in the database,
//!   loosely typed (`worldwideGross` may be a number *or* text)
//! - [`Film`]: the typed record the aggregation pipeline works on
//!
//! Key Rust concepts demonstrated here:
//! - serde attributes for mapping camelCase storage names onto snake_case fields
//! - `#[serde(untagged)]` enums for values that can arrive in more than one shape
//! - `Option<T>` for fields a record may not carry

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// Stored Representation
// =============================================================================

/// A film as stored in the `films` collection.
///
/// Unknown fields (such as MongoDB's `_id`) are ignored when decoding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmDocument {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub box_office: Option<f64>,
    #[serde(default)]
    pub worldwide_gross: Option<GrossValue>,
    /// Stored as `null` when the scraper found no directors
    #[serde(default, deserialize_with = "null_as_empty")]
    pub directors: Vec<String>,
    #[serde(default)]
    pub country_of_origin: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Worldwide gross as it arrives from storage.
///
/// Rust concept: an untagged enum lets serde try each variant in order,
/// so `1.5e9` decodes as `Number` and `"1500000000"` as `Text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GrossValue {
    Number(f64),
    Text(String),
}

impl From<f64> for GrossValue {
    fn from(value: f64) -> Self {
        GrossValue::Number(value)
    }
}

impl From<&str> for GrossValue {
    fn from(value: &str) -> Self {
        GrossValue::Text(value.to_string())
    }
}

// =============================================================================
// Typed Representation
// =============================================================================

/// A film record after field coercion.
///
/// Every numeric field is a real `f64` here; the pipeline never has to
/// parse anything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub title: Option<String>,
    /// Records without a year are left out of the per-year series only
    pub release_year: Option<i32>,
    /// Domestic / primary-market gross
    pub box_office: Option<f64>,
    pub worldwide_gross: Option<f64>,
    /// Ordered as stored; duplicates are kept
    pub directors: Vec<String>,
    pub country_of_origin: Option<String>,
}

impl Film {
    /// Title for log and error messages
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("<untitled>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_from_json_with_numeric_gross() {
        let doc: FilmDocument = serde_json::from_str(
            r#"{
                "title": "Avatar",
                "releaseYear": 2009,
                "boxOffice": 785221649,
                "worldwideGross": 2923706026,
                "directors": ["James Cameron"],
                "countryOfOrigin": "United States"
            }"#,
        )
        .unwrap();

        assert_eq!(doc.title.as_deref(), Some("Avatar"));
        assert_eq!(doc.release_year, Some(2009));
        assert_eq!(doc.box_office, Some(785221649.0));
        assert_eq!(doc.worldwide_gross, Some(GrossValue::Number(2923706026.0)));
        assert_eq!(doc.directors, vec!["James Cameron".to_string()]);
    }

    #[test]
    fn test_document_with_text_gross_and_missing_fields() {
        let doc: FilmDocument = serde_json::from_str(
            r#"{ "_id": "abc", "worldwideGross": "1234.5" }"#,
        )
        .unwrap();

        assert_eq!(doc.worldwide_gross, Some(GrossValue::Text("1234.5".to_string())));
        assert_eq!(doc.release_year, None);
        assert!(doc.directors.is_empty());
        assert!(doc.country_of_origin.is_none());
    }

    #[test]
    fn test_null_directors_decode_as_empty() {
        let doc: FilmDocument =
            serde_json::from_str(r#"{ "title": "Untitled", "directors": null }"#).unwrap();
        assert!(doc.directors.is_empty());
    }

    #[test]
    fn test_display_title_fallback() {
        let film = Film::default();
        assert_eq!(film.display_title(), "<untitled>");
    }
}
