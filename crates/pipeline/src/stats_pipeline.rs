//! The StatsPipeline runs every aggregation over the film table.
//!
//! This module provides the one batch call of the dashboard: a full table
//! in, the five derived series out. It is a pure function of its input;
//! rerunning on changed data means rerunning the whole thing.

use data_loader::{DataLoadError, Film, FilmDocument, parse_films};
use tracing;

use crate::aggregations::{
    BoxOfficePerYear, FilmsPerYear, TopCountries, TopDirectors, WorldwideGrossPerYear,
};
use crate::series::DashboardStats;
use crate::traits::Aggregation;

/// Computes all five dashboard series.
///
/// ## Usage
/// ```ignore
/// let stats = StatsPipeline::new()
///     .with_director_limit(3)
///     .with_country_limit(5)
///     .compute(&films);
/// ```
pub struct StatsPipeline {
    top_directors: TopDirectors,
    top_countries: TopCountries,
}

impl StatsPipeline {
    /// Create a pipeline with the default ranking sizes (3 directors, 5 countries).
    pub fn new() -> Self {
        Self {
            top_directors: TopDirectors::default(),
            top_countries: TopCountries::default(),
        }
    }

    /// Keep `limit` directors in the ranking (builder pattern).
    pub fn with_director_limit(mut self, limit: usize) -> Self {
        self.top_directors = TopDirectors::new(limit);
        self
    }

    /// Keep `limit` countries in the ranking (builder pattern).
    pub fn with_country_limit(mut self, limit: usize) -> Self {
        self.top_countries = TopCountries::new(limit);
        self
    }

    /// Run every aggregation over already-typed films.
    ///
    /// An empty table is legal and yields five empty series.
    pub fn compute(&self, films: &[Film]) -> DashboardStats {
        tracing::debug!("Aggregating {} films", films.len());

        let stats = DashboardStats {
            films_per_year: run(&FilmsPerYear, films),
            box_office_per_year: run(&BoxOfficePerYear, films),
            worldwide_gross_per_year: run(&WorldwideGrossPerYear, films),
            top_directors: run(&self.top_directors, films),
            top_countries: run(&self.top_countries, films),
        };

        tracing::debug!(
            "Aggregated {} years, {} directors, {} countries",
            stats.films_per_year.len(),
            stats.top_directors.len(),
            stats.top_countries.len()
        );
        stats
    }

    /// Coerce stored documents, then aggregate.
    ///
    /// # Returns
    /// * `Ok(DashboardStats)` - the five series
    /// * `Err(DataLoadError::MalformedRecord)` - if any `worldwideGross`
    ///   cannot be coerced; no partial result is produced
    pub fn aggregate_documents(
        &self,
        documents: &[FilmDocument],
    ) -> Result<DashboardStats, DataLoadError> {
        let films = parse_films(documents)?;
        Ok(self.compute(&films))
    }
}

impl Default for StatsPipeline {
    fn default() -> Self {
        Self::new()
    }
}

fn run<A: Aggregation>(aggregation: &A, films: &[Film]) -> A::Output {
    tracing::trace!("Running aggregation: {}", aggregation.name());
    aggregation.compute(films)
}

/// Compute the dashboard series with the default pipeline.
pub fn compute_dashboard_stats(films: &[Film]) -> DashboardStats {
    StatsPipeline::new().compute(films)
}

/// Coerce and aggregate stored documents with the default pipeline.
pub fn aggregate_documents(documents: &[FilmDocument]) -> Result<DashboardStats, DataLoadError> {
    StatsPipeline::new().aggregate_documents(documents)
}
