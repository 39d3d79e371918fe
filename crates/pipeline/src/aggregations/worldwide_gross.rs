//! Worldwide gross revenue summed per year.

use data_loader::Film;

use crate::aggregations::sum_per_year;
use crate::series::YearTotals;
use crate::traits::Aggregation;

/// Sums the coerced `worldwide_gross` per release year.
///
/// Coercion from text already happened in `data_loader::parse_films`;
/// a malformed value never reaches this point.
pub struct WorldwideGrossPerYear;

impl Aggregation for WorldwideGrossPerYear {
    type Output = YearTotals;

    fn name(&self) -> &str {
        "WorldwideGrossPerYear"
    }

    fn compute(&self, films: &[Film]) -> YearTotals {
        sum_per_year(films, |film| film.worldwide_gross)
    }
}
