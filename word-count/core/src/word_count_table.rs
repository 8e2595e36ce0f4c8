use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from lowercased token to its number of occurrences
/// Used both for a single worker's partial result and for the merged global result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordCountTable {
    counts: HashMap<String, u64>,
}

impl WordCountTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` occurrences of `token`
    pub fn add(&mut self, token: &str, count: u64) {
        if let Some(existing) = self.counts.get_mut(token) {
            *existing += count;
        } else {
            self.counts.insert(token.to_string(), count);
        }
    }

    /// Fold another table into this one by summing counts per token
    pub fn merge(&mut self, other: WordCountTable) {
        if self.counts.is_empty() {
            self.counts = other.counts;
            return;
        }
        for (token, count) in other.counts {
            *self.counts.entry(token).or_insert(0) += count;
        }
    }

    pub fn get(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all occurrences
    pub fn total_words(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(token, count)| (token.as_str(), *count))
    }

    /// The `n` most frequent tokens, highest count first
    /// Ties are broken alphabetically so the ordering is stable between runs
    pub fn most_common(&self, n: usize) -> Vec<(&str, u64)> {
        let mut sorted: Vec<(&str, u64)> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        sorted.truncate(n);
        sorted
    }

    pub fn into_inner(self) -> HashMap<String, u64> {
        self.counts
    }
}

impl From<HashMap<String, u64>> for WordCountTable {
    fn from(counts: HashMap<String, u64>) -> Self {
        Self { counts }
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for WordCountTable {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut table = WordCountTable::new();
        for (token, count) in iter {
            *table.counts.entry(token.into()).or_insert(0) += count;
        }
        table
    }
}
