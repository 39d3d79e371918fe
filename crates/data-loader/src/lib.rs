//! # Data Loader Crate
//!
//! This crate is the record source of the film dashboard: it fetches every
//! stored film document and coerces it into a typed record.
//!
//! ## Main Components
//!
//! - **types**: `FilmDocument` (as stored) and `Film` (typed)
//! - **source**: the `RecordSource` trait with MongoDB, JSON-file and in-memory implementations
//! - **parser**: coercion from documents to films (`worldwideGross` text → `f64`)
//! - **error**: error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{MongoConfig, MongoSource, RecordSource, parse_films};
//!
//! let source = MongoSource::connect(MongoConfig::default()).await?;
//! let documents = source.fetch_all_films().await?;
//! let films = parse_films(&documents)?;
//!
//! println!("Loaded {} films", films.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod source;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use parser::{parse_film, parse_films, parse_number};
pub use source::{JsonFileSource, MongoConfig, MongoSource, RecordSource, StaticSource};
pub use types::{Film, FilmDocument, GrossValue};
