use std::fmt::Debug;
use std::hash::Hash;

use log::debug;

use crate::codes::generate_codes;
use crate::frequency::FreqTable;
use crate::table::{FrequencyTableEntry, SymbolTable};
use crate::tree::HuffmanTree;

/// A Huffman code derived from one input sequence.
///
/// Built once and immutable afterwards, so it can be shared across threads
/// for reading whenever `S` allows it.
#[derive(Debug, Clone)]
pub struct HuffmanModel<S> {
    table: SymbolTable<S>,
    tree: HuffmanTree<S>,
}

impl<S> HuffmanModel<S>
where
    S: Eq + Hash + Clone + Debug,
{
    /// Counts `symbols`, builds the tree and assigns codes.
    pub fn new<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let frequencies = FreqTable::count(symbols);
        let tree = HuffmanTree::build(&frequencies);
        let codes = generate_codes(&tree);
        debug!("Code table built with {} entries.", codes.len());

        HuffmanModel {
            table: SymbolTable::new(&frequencies, codes),
            tree,
        }
    }

    /// Occurrences of `symbol` in the input, `0` if it never appeared.
    pub fn count(&self, symbol: &S) -> u64 {
        self.table.count(symbol)
    }

    /// The code assigned to `symbol`, `None` if it never appeared.
    pub fn encoding(&self, symbol: &S) -> Option<&str> {
        self.table.encoding(symbol)
    }

    pub fn frequency_table(&self) -> Vec<FrequencyTableEntry<S>> {
        self.table.entries()
    }

    /// Number of bits needed to encode the whole input with this code.
    pub fn encoded_bits(&self) -> u64 {
        self.table
            .entries()
            .iter()
            .map(|e| e.count() * e.encoding_len() as u64)
            .sum()
    }

    pub fn average_code_length(&self) -> f64 {
        let total = self.total_count();
        if total == 0 {
            return 0.0;
        }
        self.encoded_bits() as f64 / total as f64
    }

    /// Shannon entropy of the input in bits per symbol.
    pub fn entropy(&self) -> f64 {
        let total = self.total_count();
        if total == 0 {
            return 0.0;
        }
        let total_f = total as f64;

        let entropy: f64 = self
            .table
            .entries()
            .iter()
            .map(|e| {
                let p = e.count() as f64 / total_f;
                -p * p.log2()
            })
            .sum();

        debug!(
            "Calculated entropy: {:.4} bits/symbol (Total samples: {})",
            entropy, total
        );
        entropy
    }
}

impl HuffmanModel<char> {
    pub fn from_text(text: &str) -> Self {
        Self::new(text.chars())
    }
}

impl<S> HuffmanModel<S> {
    /// Distinct symbols in order of first occurrence.
    pub fn characters(&self) -> &[S] {
        self.table.symbols()
    }

    pub fn tree(&self) -> &HuffmanTree<S> {
        &self.tree
    }

    /// Length of the input sequence.
    pub fn total_count(&self) -> u64 {
        self.tree.weight()
    }
}
