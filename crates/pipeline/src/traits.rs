//! Core traits for the aggregation pipeline.
//!
//! This module defines the Aggregation trait that every derived series
//! implements, so each one can be computed, tested and benchmarked alone.

use data_loader::Film;

/// A pure function from the full film table to one derived series.
///
/// ## Design Note
/// - Aggregations borrow the table (`&[Film]`); they never mutate or keep it
/// - The output type is chosen by the implementation (per-year map, ranking, ...)
/// - Running the same aggregation twice on the same table yields identical output
pub trait Aggregation {
    /// The derived series this aggregation produces
    type Output;

    /// Returns the name of this aggregation (for logging/debugging)
    fn name(&self) -> &str;

    /// Compute the series over the whole table.
    fn compute(&self, films: &[Film]) -> Self::Output;
}
