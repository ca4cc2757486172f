use std::collections::HashMap;
use std::hash::Hash;

use log::debug;

/// A distinct symbol together with the number of times it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry<S> {
    pub symbol: S,
    pub count: u64,
}

/// Per-symbol occurrence counts, enumerated in first-seen order.
#[derive(Debug, Clone)]
pub struct FreqTable<S> {
    entries: Vec<FrequencyEntry<S>>,
    index: HashMap<S, usize>,
}

impl<S: Eq + Hash + Clone> FreqTable<S> {
    /// Counts every symbol of `symbols` in a single pass.
    pub fn count<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut entries: Vec<FrequencyEntry<S>> = Vec::new();
        let mut index: HashMap<S, usize> = HashMap::new();

        for symbol in symbols {
            match index.get(&symbol) {
                Some(&i) => entries[i].count += 1,
                None => {
                    index.insert(symbol.clone(), entries.len());
                    entries.push(FrequencyEntry { symbol, count: 1 });
                }
            }
        }

        debug!("Counted {} distinct symbols", entries.len());
        FreqTable { entries, index }
    }

    /// Occurrences of `symbol`, `0` if it never appeared.
    pub fn get(&self, symbol: &S) -> u64 {
        self.index
            .get(symbol)
            .map_or(0, |&i| self.entries[i].count)
    }

    pub fn contains(&self, symbol: &S) -> bool {
        self.index.contains_key(symbol)
    }
}

impl<S> FreqTable<S> {
    /// Entries in order of first occurrence.
    pub fn entries(&self) -> &[FrequencyEntry<S>] {
        &self.entries
    }

    pub fn symbols(&self) -> impl Iterator<Item = &S> {
        self.entries.iter().map(|e| &e.symbol)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the length of the counted sequence.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }
}
