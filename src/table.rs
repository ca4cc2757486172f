use std::collections::HashMap;
use std::hash::Hash;

use crate::codes::CodeTable;
use crate::frequency::FreqTable;

/// One row of the frequency/code table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTableEntry<S> {
    symbol: S,
    count: u64,
    encoding: String,
}

impl<S> FrequencyTableEntry<S> {
    pub fn symbol(&self) -> &S {
        &self.symbol
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    pub fn encoding_len(&self) -> usize {
        self.encoding.len()
    }
}

#[derive(Debug, Clone)]
struct Record {
    count: u64,
    code: String,
}

/// Immutable join of symbol counts and codes.
///
/// Rows keep first-seen order, but callers should not rely on any
/// particular order; sorting is up to whoever displays the table.
#[derive(Debug, Clone)]
pub struct SymbolTable<S> {
    order: Vec<S>,
    records: HashMap<S, Record>,
}

impl<S: Eq + Hash + Clone> SymbolTable<S> {
    pub fn new(frequencies: &FreqTable<S>, mut codes: CodeTable<S>) -> Self {
        let mut order = Vec::with_capacity(frequencies.len());
        let mut records = HashMap::with_capacity(frequencies.len());

        for entry in frequencies.entries() {
            let code = codes.remove(&entry.symbol).unwrap_or_default();
            order.push(entry.symbol.clone());
            records.insert(
                entry.symbol.clone(),
                Record {
                    count: entry.count,
                    code,
                },
            );
        }

        SymbolTable { order, records }
    }

    /// Occurrences of `symbol`, `0` when absent.
    pub fn count(&self, symbol: &S) -> u64 {
        self.records.get(symbol).map_or(0, |r| r.count)
    }

    /// Code of `symbol`, `None` when absent.
    pub fn encoding(&self, symbol: &S) -> Option<&str> {
        self.records.get(symbol).map(|r| r.code.as_str())
    }

    pub fn entries(&self) -> Vec<FrequencyTableEntry<S>> {
        self.order
            .iter()
            .filter_map(|symbol| {
                self.records.get(symbol).map(|r| FrequencyTableEntry {
                    symbol: symbol.clone(),
                    count: r.count,
                    encoding: r.code.clone(),
                })
            })
            .collect()
    }
}

impl<S> SymbolTable<S> {
    pub fn symbols(&self) -> &[S] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
