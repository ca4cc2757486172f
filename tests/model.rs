//! End-to-end checks of the public model API.

use std::collections::HashSet;

use huffman_codes::{HuffmanModel, Node};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_full_binary(node: &Node<char>) {
    match node {
        Node::Leaf { .. } => {
            assert!(node.left().is_none());
            assert!(node.right().is_none());
        }
        Node::Internal { left, right, .. } => {
            assert!(node.left().is_some());
            assert!(node.right().is_some());
            assert_full_binary(left);
            assert_full_binary(right);
        }
    }
}

fn assert_prefix_free(model: &HuffmanModel<char>) {
    let rows = model.frequency_table();
    for a in &rows {
        for b in &rows {
            if a.symbol() != b.symbol() {
                assert!(
                    !b.encoding().starts_with(a.encoding()),
                    "{:?} ({}) is a prefix of {:?} ({})",
                    a.symbol(),
                    a.encoding(),
                    b.symbol(),
                    b.encoding()
                );
            }
        }
    }
}

#[test]
fn leaf_weights_sum_to_input_length() {
    init_logger();
    for text in ["", "x", "ab", "aaabbc", "hello world", "Lorem ipsum dolor sit amet"] {
        let model = HuffmanModel::from_text(text);
        let expected = text.chars().count() as u64;
        assert_eq!(model.tree().leaf_weight_sum(), expected);
        assert_eq!(model.total_count(), expected);
    }
}

#[test]
fn codes_are_prefix_free() {
    init_logger();
    let text = "It was the best of times, it was the worst of times, it was the age of wisdom";
    let model = HuffmanModel::from_text(text);
    assert!(model.characters().len() >= 2);
    assert_prefix_free(&model);
}

#[test]
fn empty_input() {
    let model = HuffmanModel::from_text("");
    assert!(model.characters().is_empty());
    assert!(model.frequency_table().is_empty());
    assert!(model.tree().is_empty());
    assert_eq!(model.count(&'a'), 0);
    assert_eq!(model.encoding(&'a'), None);
}

#[test]
fn single_symbol_gets_empty_code() {
    let model = HuffmanModel::from_text("xxxxx");
    assert_eq!(model.characters(), &['x']);
    assert_eq!(model.count(&'x'), 5);
    assert_eq!(model.encoding(&'x'), Some(""));
    assert!(model.tree().is_leaf());
    assert_eq!(model.tree().symbol(), Some(&'x'));
}

#[test]
fn tree_is_full_binary() {
    let model = HuffmanModel::from_text("abracadabra alakazam");
    let root = model.tree().root().expect("non-empty tree");
    assert_full_binary(root);
    assert_eq!(model.tree().leaf_count(), model.characters().len());
}

#[test]
fn aaabbc_is_optimal() {
    init_logger();
    let model = HuffmanModel::from_text("aaabbc");
    assert_eq!(model.characters(), &['a', 'b', 'c']);
    assert_eq!(model.count(&'a'), 3);
    assert_eq!(model.count(&'b'), 2);
    assert_eq!(model.count(&'c'), 1);

    assert_eq!(sorted_code_lengths(&model), vec![1, 2, 2]);
    assert_eq!(model.encoding(&'a').map(str::len), Some(1));
    assert_eq!(model.encoded_bits(), 9);
    assert_prefix_free(&model);
}

fn sorted_code_lengths(model: &HuffmanModel<char>) -> Vec<usize> {
    let mut lengths: Vec<usize> = model
        .frequency_table()
        .iter()
        .map(|e| e.encoding_len())
        .collect();
    lengths.sort();
    lengths
}

#[test]
fn tied_weights_still_give_optimal_lengths() {
    init_logger();
    let cases: [(&str, Vec<usize>, u64); 4] = [
        ("aabbcc", vec![1, 2, 2], 10),
        ("aabbccdd", vec![2, 2, 2, 2], 16),
        ("abcde", vec![2, 2, 2, 3, 3], 12),
        ("abcdefgh", vec![3; 8], 24),
    ];

    for (text, lengths, bits) in cases {
        let model = HuffmanModel::from_text(text);
        assert_eq!(sorted_code_lengths(&model), lengths, "lengths for {:?}", text);
        assert_eq!(model.encoded_bits(), bits, "bits for {:?}", text);
        assert_prefix_free(&model);

        let again = HuffmanModel::from_text(text);
        assert_eq!(sorted_code_lengths(&again), lengths);
        assert_eq!(again.encoded_bits(), bits);
    }
}

#[test]
fn distinct_weights_give_repeatable_codes() {
    // Counts 1, 2, 4, 8, 16: no ties anywhere during construction.
    let text = format!(
        "{}{}{}{}{}",
        "e".repeat(16),
        "d".repeat(8),
        "c".repeat(4),
        "b".repeat(2),
        "a"
    );
    let first = HuffmanModel::from_text(&text);
    for _ in 0..5 {
        let again = HuffmanModel::from_text(&text);
        for c in first.characters() {
            assert_eq!(first.encoding(c), again.encoding(c));
        }
    }
    assert_eq!(first.encoding(&'e'), Some("1"));
    assert_eq!(first.encoding(&'a'), Some("0000"));
}

#[test]
fn frequency_table_covers_every_symbol_once() {
    let text = "mississippi river";
    let model = HuffmanModel::from_text(text);
    let rows = model.frequency_table();
    let symbols: HashSet<char> = rows.iter().map(|r| *r.symbol()).collect();
    assert_eq!(symbols, text.chars().collect::<HashSet<_>>());
    assert_eq!(rows.len(), symbols.len());
    assert_eq!(rows.iter().map(|r| r.count()).sum::<u64>(), 17);
}

#[test]
fn model_is_shareable_across_threads() {
    let model = HuffmanModel::from_text("concurrent readers");
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                assert_eq!(model.count(&'r'), 4);
                assert!(model.encoding(&'r').is_some());
            });
        }
    });
}
