//! Aggregation pipeline for the film dashboard.
//!
//! This crate provides:
//! - Aggregation trait and one implementation per dashboard series
//! - FrequencyCounter for rankings with a first-seen tie-break
//! - StatsPipeline for computing all series in one batch call
//!
//! ## Architecture
//! The pipeline is a pure batch transform:
//! 1. `data_loader::parse_films` coerces stored documents into typed films
//! 2. Each aggregation reads the whole table and produces one series
//! 3. The five series are bundled into an immutable `DashboardStats`
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{StatsPipeline, aggregate_documents};
//!
//! // From stored documents (fails on a malformed worldwideGross)
//! let stats = aggregate_documents(&documents)?;
//!
//! // From typed films
//! let stats = StatsPipeline::new().compute(&films);
//! println!("{:?}", stats.top_directors);
//! ```

pub mod traits;
pub mod counter;
pub mod series;
pub mod aggregations;
pub mod stats_pipeline;

// Re-export main types
pub use traits::Aggregation;
pub use counter::FrequencyCounter;
pub use series::{DashboardStats, RankedEntry, YearCounts, YearTotals};
pub use stats_pipeline::{StatsPipeline, aggregate_documents, compute_dashboard_stats};
