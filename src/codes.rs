use std::collections::HashMap;
use std::hash::Hash;

use log::trace;

use crate::tree::{HuffmanTree, Node};

/// Symbol to bit-string, each bit written as `'0'` or `'1'`.
pub type CodeTable<S> = HashMap<S, String>;

/// Assigns a code to every leaf of `tree`: `'0'` for a left edge, `'1'`
/// for a right edge.
///
/// A tree that is a single leaf gives its symbol the empty code. That code
/// only decodes if the reader already knows the message is one symbol
/// repeated, since it carries no length information.
pub fn generate_codes<S>(tree: &HuffmanTree<S>) -> CodeTable<S>
where
    S: Eq + Hash + Clone + std::fmt::Debug,
{
    let mut table = CodeTable::new();
    if let Some(root) = tree.root() {
        build_code_table(root, String::new(), &mut table);
    }
    table
}

fn build_code_table<S>(node: &Node<S>, prefix: String, table: &mut CodeTable<S>)
where
    S: Eq + Hash + Clone + std::fmt::Debug,
{
    match node {
        Node::Leaf { symbol, .. } => {
            trace!("Assigning code to {:?} : '{}'", symbol, prefix);
            table.insert(symbol.clone(), prefix);
        }
        Node::Internal { left, right, .. } => {
            build_code_table(left, format!("{}0", prefix), table);
            build_code_table(right, format!("{}1", prefix), table);
        }
    }
}
