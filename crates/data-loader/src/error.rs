//! Error types for the data-loader crate.
//!
//! Rust error handling concepts demonstrated:
//! - thiserror for defining custom error types
//! - Enum variants for different error cases
//! - Error messages with context
//! - Automatic `Display` and `Error` trait implementations

use thiserror::Error;

/// Errors that can occur while fetching and coercing film records
///
/// An empty collection is *not* an error: it produces an empty dashboard.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// The record source could not be reached or queried
    /// (connection refused, authentication failure, unreadable file)
    #[error("Record source {source_name} unavailable: {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    /// A stored document could not be decoded into a film document at all
    #[error("Invalid document at position {index}: {reason}")]
    InvalidDocument { index: usize, reason: String },

    /// A field could not be coerced to its typed representation
    ///
    /// One malformed record fails the whole batch; there is no skip policy.
    #[error("Malformed record at position {index} ({title}): cannot coerce {field} value {value:?} to a number")]
    MalformedRecord {
        index: usize,
        title: String,
        field: String,
        value: String,
    },

    /// I/O error occurred while reading a local source
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DataLoadError {
    pub(crate) fn unavailable(source_name: &str, reason: impl ToString) -> Self {
        DataLoadError::SourceUnavailable {
            source_name: source_name.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Convenience type alias for Results in this crate
///
/// Rust concept: Type aliases make code more readable
/// Instead of writing `Result<T, DataLoadError>` everywhere,
/// we can write `Result<T>`
pub type Result<T> = std::result::Result<T, DataLoadError>;
