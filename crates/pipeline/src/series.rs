//! Output types of the aggregation pipeline.
//!
//! Per-year series use `BTreeMap` so iteration is always ascending by year;
//! only years present in the data appear.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Release year → number of films
pub type YearCounts = BTreeMap<i32, u64>;

/// Release year → summed revenue
pub type YearTotals = BTreeMap<i32, f64>;

/// One row of a top-N ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub name: String,
    pub count: u64,
}

/// The five derived series that drive the dashboard.
///
/// Computed once at startup and never modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub films_per_year: YearCounts,
    pub box_office_per_year: YearTotals,
    pub worldwide_gross_per_year: YearTotals,
    pub top_directors: Vec<RankedEntry>,
    pub top_countries: Vec<RankedEntry>,
}

impl DashboardStats {
    /// True when every series is empty (e.g. the collection had no films)
    pub fn is_empty(&self) -> bool {
        self.films_per_year.is_empty()
            && self.box_office_per_year.is_empty()
            && self.worldwide_gross_per_year.is_empty()
            && self.top_directors.is_empty()
            && self.top_countries.is_empty()
    }

    /// Number of films that carried a release year
    pub fn films_with_year(&self) -> u64 {
        self.films_per_year.values().sum()
    }
}
