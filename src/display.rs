use std::cmp::Ordering;
use std::str::FromStr;

use huffman_codes::{FrequencyTableEntry, HuffmanModel, HuffmanTree, Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Char,
    Count,
    Code,
    Length,
}

/// A column to sort by, optionally descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    field: Field,
    descending: bool,
}

impl SortKey {
    pub const fn asc(field: Field) -> Self {
        SortKey {
            field,
            descending: false,
        }
    }

    pub const fn desc(field: Field) -> Self {
        SortKey {
            field,
            descending: true,
        }
    }

    fn compare(&self, a: &FrequencyTableEntry<char>, b: &FrequencyTableEntry<char>) -> Ordering {
        let ord = match self.field {
            Field::Char => a.symbol().cmp(b.symbol()),
            Field::Count => a.count().cmp(&b.count()),
            Field::Code => a.encoding().cmp(b.encoding()),
            Field::Length => a.encoding_len().cmp(&b.encoding_len()),
        };
        if self.descending { ord.reverse() } else { ord }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (descending, name) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let field = match name {
            "char" | "character" => Field::Char,
            "count" | "frequency" => Field::Count,
            "code" | "encoding" => Field::Code,
            "length" | "len" => Field::Length,
            other => {
                return Err(format!(
                    "unknown sort key '{}' (expected char, count, code or length)",
                    other
                ));
            }
        };
        Ok(SortKey { field, descending })
    }
}

/// Most frequent first, then shortest code, then code order.
pub const DEFAULT_ORDER: [SortKey; 3] = [
    SortKey::desc(Field::Count),
    SortKey::asc(Field::Length),
    SortKey::asc(Field::Code),
];

/// Stable sort by `keys`, each later key breaking ties of the earlier ones.
pub fn sort_entries(entries: &mut [FrequencyTableEntry<char>], keys: &[SortKey]) {
    entries.sort_by(|a, b| {
        keys.iter()
            .fold(Ordering::Equal, |ord, key| ord.then_with(|| key.compare(a, b)))
    });
}

pub fn escape(c: char) -> String {
    match c {
        ' ' => "' '".to_string(),
        c if c.is_control() || c.is_whitespace() => format!("'{}'", c.escape_default()),
        c => c.to_string(),
    }
}

pub fn render_table(entries: &[FrequencyTableEntry<char>]) -> String {
    let mut out = format!("{:<8} {:>10}  Code\n", "Char", "Count");
    for e in entries {
        let row = format!(
            "{:<8} {:>10}  {}",
            escape(*e.symbol()),
            e.count(),
            e.encoding()
        );
        // A lone symbol has an empty code.
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

pub fn render_summary(model: &HuffmanModel<char>) -> String {
    [
        format!("Distinct symbols: {}", model.characters().len()),
        format!("Total symbols:    {}", model.total_count()),
        format!("Encoded size:     {} bits", model.encoded_bits()),
        format!(
            "Average length:   {:.4} bits/symbol",
            model.average_code_length()
        ),
        format!("Entropy:          {:.4} bits/symbol", model.entropy()),
    ]
    .iter()
    .map(|line| format!("{}\n", line))
    .collect()
}

/// Indented drawing of the tree; internal nodes show their weight, leaves
/// show `symbol:weight`.
pub fn render_tree(tree: &HuffmanTree<char>) -> String {
    let mut out = String::new();
    match tree.root() {
        Some(root) => render_node(root, "", "", &mut out),
        None => out.push_str("(empty)\n"),
    }
    out
}

fn render_node(node: &Node<char>, edge: &str, indent: &str, out: &mut String) {
    match node {
        Node::Leaf { symbol, freq } => {
            out.push_str(&format!("{}{}{}:{}\n", indent, edge, escape(*symbol), freq));
        }
        Node::Internal { freq, left, right } => {
            out.push_str(&format!("{}{}{}\n", indent, edge, freq));
            let child_indent = format!("{}  ", indent);
            render_node(left, "0 ", &child_indent, out);
            render_node(right, "1 ", &child_indent, out);
        }
    }
}
