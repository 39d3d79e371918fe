//! Insertion-ordered frequency counting.
//!
//! Rankings need a reproducible tie-break: among names with the same count,
//! the one seen first in the data ranks first. A plain `HashMap` has no
//! stable iteration order, so counts are kept in a `Vec` in first-seen
//! order with a `HashMap` pointing into it.

use std::collections::HashMap;

use crate::series::RankedEntry;

/// Counts occurrences of names, remembering the order they were first seen.
#[derive(Debug, Clone, Default)]
pub struct FrequencyCounter {
    /// (name, count) in first-seen order
    entries: Vec<(String, u64)>,
    /// name -> position in `entries`
    positions: HashMap<String, usize>,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `name`.
    pub fn add(&mut self, name: &str) {
        match self.positions.get(name) {
            Some(&position) => self.entries[position].1 += 1,
            None => {
                self.positions.insert(name.to_string(), self.entries.len());
                self.entries.push((name.to_string(), 1));
            }
        }
    }

    /// Number of occurrences recorded for `name` (0 if never seen)
    pub fn count(&self, name: &str) -> u64 {
        self.positions
            .get(name)
            .map(|&position| self.entries[position].1)
            .unwrap_or(0)
    }

    /// Number of distinct names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of occurrences across all names
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// The `n` most frequent names, highest count first.
    ///
    /// `sort_by` is stable, so names with equal counts keep their
    /// first-seen order. Fewer than `n` distinct names returns all of them.
    pub fn most_common(&self, n: usize) -> Vec<RankedEntry> {
        let mut ranked: Vec<&(String, u64)> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        ranked
            .into_iter()
            .take(n)
            .map(|(name, count)| RankedEntry {
                name: name.clone(),
                count: *count,
            })
            .collect()
    }
}

impl<'a> FromIterator<&'a str> for FrequencyCounter {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut counter = FrequencyCounter::new();
        for name in iter {
            counter.add(name);
        }
        counter
    }
}
