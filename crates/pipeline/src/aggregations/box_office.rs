//! Box office revenue summed per year.

use data_loader::Film;

use crate::aggregations::sum_per_year;
use crate::series::YearTotals;
use crate::traits::Aggregation;

/// Sums `box_office` per release year into an `f64` accumulator,
/// which comfortably holds totals in the billions.
pub struct BoxOfficePerYear;

impl Aggregation for BoxOfficePerYear {
    type Output = YearTotals;

    fn name(&self) -> &str {
        "BoxOfficePerYear"
    }

    fn compute(&self, films: &[Film]) -> YearTotals {
        sum_per_year(films, |film| film.box_office)
    }
}
