//! Countries producing the most films.

use data_loader::Film;

use crate::counter::FrequencyCounter;
use crate::series::RankedEntry;
use crate::traits::Aggregation;

/// Ranks countries of origin by number of films.
///
/// Films without a country are not counted. Same tie-break as
/// [`crate::aggregations::TopDirectors`]: first seen ranks first.
pub struct TopCountries {
    limit: usize,
}

impl TopCountries {
    pub const DEFAULT_LIMIT: usize = 5;

    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Default for TopCountries {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT)
    }
}

impl Aggregation for TopCountries {
    type Output = Vec<RankedEntry>;

    fn name(&self) -> &str {
        "TopCountries"
    }

    fn compute(&self, films: &[Film]) -> Vec<RankedEntry> {
        let counter: FrequencyCounter = films
            .iter()
            .filter_map(|film| film.country_of_origin.as_deref())
            .collect();

        counter.most_common(self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn film(country: Option<&str>) -> Film {
        Film {
            country_of_origin: country.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_top_countries() {
        let films: Vec<Film> = [
            "United States", "China", "United States", "Japan", "United Kingdom",
            "France", "New Zealand", "China", "United States",
        ]
        .into_iter()
        .map(|c| film(Some(c)))
        .collect();

        let top = TopCountries::default().compute(&films);
        let names: Vec<&str> = top.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(top.len(), 5);
        assert_eq!(names, vec!["United States", "China", "Japan", "United Kingdom", "France"]);
        assert_eq!(top[0].count, 3);
    }

    #[test]
    fn test_missing_country_not_counted() {
        let films = vec![film(None), film(Some("India")), film(None)];
        let top = TopCountries::default().compute(&films);

        assert_eq!(top.len(), 1);
        assert_eq!(top[0].count, 1);
    }
}
