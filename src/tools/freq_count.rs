use rustc_hash::FxHashMap;

use crate::Symbol;

/// Occurrence count of every symbol seen in an input sequence.
///
/// Only symbols that actually occur are present, so the counts always sum to the input length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyMap<S: Symbol> {
    counts: FxHashMap<S, u64>,
}

impl<S: Symbol> FrequencyMap<S> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            counts: FxHashMap::default(),
        }
    }

    /// Count of `symbol`, or None if it never occurred.
    pub fn get(&self, symbol: &S) -> Option<u64> {
        self.counts.get(symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, which is the length of the counted input. Saturates at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.counts.values().fold(0, |acc, &n| acc.saturating_add(n))
    }

    /// Iterate over (symbol, count) pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &u64)> {
        self.counts.iter()
    }
}

impl<S: Symbol> Default for FrequencyMap<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a map by hand. Zero counts are dropped and repeated symbols accumulate, saturating at
/// `u64::MAX`.
impl<S: Symbol> FromIterator<(S, u64)> for FrequencyMap<S> {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (symbol, count) in iter.into_iter().filter(|(_, c)| *c > 0) {
            let entry = map.counts.entry(symbol).or_insert(0);
            *entry = entry.saturating_add(count);
        }
        map
    }
}

/// Returns a frequency count of the input sequence.
pub fn count<S, I>(sequence: I) -> FrequencyMap<S>
where
    S: Symbol,
    I: IntoIterator<Item = S>,
{
    let mut map = FrequencyMap::new();
    sequence
        .into_iter()
        .for_each(|sym| *map.counts.entry(sym).or_insert(0) += 1);
    map
}
