//! Aggregation implementations for the dashboard series.
//!
//! One module per derived series. The per-year revenue sums share
//! [`sum_per_year`].

pub mod box_office;
pub mod films_per_year;
pub mod top_countries;
pub mod top_directors;
pub mod worldwide_gross;

// Re-export for convenience
pub use box_office::BoxOfficePerYear;
pub use films_per_year::FilmsPerYear;
pub use top_countries::TopCountries;
pub use top_directors::TopDirectors;
pub use worldwide_gross::WorldwideGrossPerYear;

use data_loader::Film;

use crate::series::YearTotals;

/// Sum one revenue field per release year.
///
/// Films without a year are skipped. A film with a year but no value for
/// the field still creates its year bucket (adding 0.0), so the revenue
/// series cover the same years as the film counts. NaN values count as
/// missing.
pub(crate) fn sum_per_year(films: &[Film], value: impl Fn(&Film) -> Option<f64>) -> YearTotals {
    let mut totals = YearTotals::new();
    for film in films {
        if let Some(year) = film.release_year {
            let amount = value(film).filter(|amount| !amount.is_nan());
            *totals.entry(year).or_insert(0.0) += amount.unwrap_or(0.0);
        }
    }
    totals
}
