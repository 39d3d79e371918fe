//! Number of films released per year.

use data_loader::Film;

use crate::series::YearCounts;
use crate::traits::Aggregation;

/// Groups films by release year and counts them.
///
/// ## Algorithm
/// For each film with a release year, bump that year's count.
/// Years with no films are not synthesized.
pub struct FilmsPerYear;

impl Aggregation for FilmsPerYear {
    type Output = YearCounts;

    fn name(&self) -> &str {
        "FilmsPerYear"
    }

    fn compute(&self, films: &[Film]) -> YearCounts {
        let mut counts = YearCounts::new();
        for year in films.iter().filter_map(|film| film.release_year) {
            *counts.entry(year).or_insert(0) += 1;
        }
        counts
    }
}
