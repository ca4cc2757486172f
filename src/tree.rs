use log::debug;

use crate::frequency::FreqTable;
use crate::priority_queue::PriorityQueue;

/// A node of a Huffman tree. Internal nodes always own exactly two subtrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    Leaf {
        symbol: S,
        freq: u64,
    },
    Internal {
        freq: u64,
        left: Box<Node<S>>,
        right: Box<Node<S>>,
    },
}

impl<S> Node<S> {
    /// Construction weight: the symbol count for a leaf, the sum of both
    /// children for an internal node.
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    pub fn symbol(&self) -> Option<&S> {
        match self {
            Node::Leaf { symbol, .. } => Some(symbol),
            Node::Internal { .. } => None,
        }
    }

    pub fn left(&self) -> Option<&Node<S>> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, .. } => Some(left),
        }
    }

    pub fn right(&self) -> Option<&Node<S>> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { right, .. } => Some(right),
        }
    }

    fn merge(first: Node<S>, second: Node<S>) -> Node<S> {
        Node::Internal {
            freq: first.weight() + second.weight(),
            left: Box::new(first),
            right: Box::new(second),
        }
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a S>) {
        match self {
            Node::Leaf { symbol, .. } => out.push(symbol),
            Node::Internal { left, right, .. } => {
                left.collect_leaves(out);
                right.collect_leaves(out);
            }
        }
    }

    fn height(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }

    fn leaf_weight_sum(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { left, right, .. } => left.leaf_weight_sum() + right.leaf_weight_sum(),
        }
    }
}

/// A Huffman tree, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: Option<Node<S>>,
}

impl<S: Clone> HuffmanTree<S> {
    /// Greedily merges the two lightest subtrees until one remains.
    ///
    /// Ties between equal weights are resolved by the heap, so tied
    /// branches may be laid out differently than another implementation
    /// would; code lengths are optimal either way.
    pub fn build(frequencies: &FreqTable<S>) -> Self {
        debug!(
            "Building Huffman Tree from {} unique symbols",
            frequencies.len()
        );

        if frequencies.is_empty() {
            return HuffmanTree { root: None };
        }

        let mut heap = PriorityQueue::with_capacity(frequencies.len());
        for entry in frequencies.entries() {
            heap.insert(
                entry.count,
                Node::Leaf {
                    symbol: entry.symbol.clone(),
                    freq: entry.count,
                },
            );
        }
        debug!("Initial heap size: {}", heap.len());

        let root = loop {
            let first = match heap.remove_min() {
                Ok(node) => node,
                Err(_) => break None,
            };
            let second = match heap.remove_min() {
                Ok(node) => node,
                Err(_) => break Some(first),
            };

            let merged = Node::merge(first, second);
            heap.insert(merged.weight(), merged);
        };

        debug!("Tree construction complete.");
        HuffmanTree { root }
    }
}

impl<S> HuffmanTree<S> {
    pub fn root(&self) -> Option<&Node<S>> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// True when the whole tree is a single leaf.
    pub fn is_leaf(&self) -> bool {
        self.root.as_ref().is_some_and(Node::is_leaf)
    }

    pub fn left(&self) -> Option<&Node<S>> {
        self.root.as_ref().and_then(Node::left)
    }

    pub fn right(&self) -> Option<&Node<S>> {
        self.root.as_ref().and_then(Node::right)
    }

    pub fn symbol(&self) -> Option<&S> {
        self.root.as_ref().and_then(Node::symbol)
    }

    pub fn weight(&self) -> u64 {
        self.root.as_ref().map_or(0, Node::weight)
    }

    /// Leaf symbols, left to right.
    pub fn leaves(&self) -> Vec<&S> {
        let mut out = Vec::new();
        if let Some(root) = &self.root {
            root.collect_leaves(&mut out);
        }
        out
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().len()
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, Node::height)
    }

    pub fn leaf_weight_sum(&self) -> u64 {
        self.root.as_ref().map_or(0, Node::leaf_weight_sum)
    }
}
