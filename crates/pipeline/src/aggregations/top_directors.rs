//! Directors with the most films.

use data_loader::Film;

use crate::counter::FrequencyCounter;
use crate::series::RankedEntry;
use crate::traits::Aggregation;

/// Ranks directors by number of films.
///
/// ## Algorithm
/// 1. Flatten every film's director list into one multiset
///    (a film with N directors contributes N entries)
/// 2. Count occurrences per name, remembering first-seen order
/// 3. Keep the `limit` highest counts; ties stay in first-seen order
pub struct TopDirectors {
    limit: usize,
}

impl TopDirectors {
    pub const DEFAULT_LIMIT: usize = 3;

    /// Create a new TopDirectors ranking keeping `limit` entries.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Default for TopDirectors {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT)
    }
}

impl Aggregation for TopDirectors {
    type Output = Vec<RankedEntry>;

    fn name(&self) -> &str {
        "TopDirectors"
    }

    fn compute(&self, films: &[Film]) -> Vec<RankedEntry> {
        let counter: FrequencyCounter = films
            .iter()
            .flat_map(|film| film.directors.iter().map(String::as_str))
            .collect();

        counter.most_common(self.limit)
    }
}
