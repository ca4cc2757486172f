//! Huffman code construction.
//!
//! Counts symbol frequencies, builds a Huffman tree with a binary min-heap
//! and derives a prefix-free code for every symbol.
//!
//! ```
//! use huffman_codes::HuffmanModel;
//!
//! let model = HuffmanModel::from_text("aaabbc");
//! assert_eq!(model.count(&'a'), 3);
//! assert_eq!(model.encoding(&'a').map(str::len), Some(1));
//! assert_eq!(model.encoded_bits(), 9);
//! ```

pub mod codes;
pub mod error;
pub mod frequency;
pub mod model;
pub mod priority_queue;
pub mod table;
pub mod tree;

pub use error::HuffmanError;
pub use model::HuffmanModel;
pub use table::FrequencyTableEntry;
pub use tree::{HuffmanTree, Node};
