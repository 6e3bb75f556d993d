//! Property-based tests for merging and key ordering.

use super::deep::{deep_merge, is_sorted, sort_keys};
use crate::flatten::flatten_value;
use proptest::prelude::*;
use serde_yaml::{Mapping, Value};

// Scalars drawn from a small alphabet so keys collide across documents
fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        any::<bool>().prop_map(Value::Bool),
        "[a-z]{0,6}".prop_map(Value::String),
    ]
}

fn document_strategy() -> impl Strategy<Value = Value> {
    let leaf = scalar_strategy();
    let tree = leaf.prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3).prop_map(Value::Sequence),
            prop::collection::btree_map("[a-e]{1,2}", inner, 0..4).prop_map(|entries| {
                let mut map = Mapping::new();
                for (key, value) in entries {
                    map.insert(Value::String(key), value);
                }
                Value::Mapping(map)
            }),
        ]
    });
    prop::collection::btree_map("[a-e]{1,2}", tree, 0..5).prop_map(|entries| {
        // Insert in reverse so key order is never accidentally sorted
        let mut map = Mapping::new();
        for (key, value) in entries.into_iter().rev() {
            map.insert(Value::String(key), value);
        }
        Value::Mapping(map)
    })
}

// Documents that agree on shape: `[a-c]` keys always hold mappings and
// `[x-z]` keys always hold scalars, so no key flips between kinds
fn uniform_document_strategy() -> impl Strategy<Value = Value> {
    let section = prop::collection::btree_map("[x-z]", scalar_strategy(), 0..3);
    prop::collection::btree_map("[a-c]", section, 0..3).prop_map(|sections| {
        let mut map = Mapping::new();
        for (name, leaves) in sections {
            let mut inner = Mapping::new();
            for (key, value) in leaves {
                inner.insert(Value::String(key), value);
            }
            map.insert(Value::String(name), Value::Mapping(inner));
        }
        Value::Mapping(map)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Every leaf of the overlay is present unchanged in the result
    #[test]
    fn overlay_leaves_always_win(base in document_strategy(), overlay in document_strategy()) {
        let merged = deep_merge(base, overlay.clone());
        let merged_flat = flatten_value(&merged);
        for (key, value) in flatten_value(&overlay) {
            prop_assert!(
                merged_flat.contains(&(key.clone(), value.clone())),
                "missing {} = {}", key, value
            );
        }
    }

    // Left fold is associative for documents that agree on shape
    #[test]
    fn merge_is_associative(
        a in uniform_document_strategy(),
        b in uniform_document_strategy(),
        c in uniform_document_strategy()
    ) {
        let left = deep_merge(deep_merge(a.clone(), b.clone()), c.clone());
        let right = deep_merge(a, deep_merge(b, c));
        prop_assert_eq!(left, right);
    }

    // Empty mapping is the identity on both sides
    #[test]
    fn empty_mapping_is_identity(doc in document_strategy()) {
        let empty = Value::Mapping(Mapping::new());
        prop_assert_eq!(deep_merge(doc.clone(), empty.clone()), doc.clone());
        prop_assert_eq!(deep_merge(empty, doc.clone()), doc);
    }

    // Sorting reaches every nesting level
    #[test]
    fn sorted_output_is_fully_sorted(doc in document_strategy()) {
        prop_assert!(is_sorted(&sort_keys(doc)));
    }

    // Re-merging a merged result as the only input reproduces it byte for byte
    #[test]
    fn merged_output_is_idempotent(a in document_strategy(), b in document_strategy()) {
        let once = sort_keys(deep_merge(a, b));
        let rendered = serde_yaml::to_string(&once).unwrap();

        let reparsed: Value = serde_yaml::from_str(&rendered).unwrap();
        let twice = sort_keys(deep_merge(Value::Mapping(Mapping::new()), reparsed));
        prop_assert_eq!(rendered, serde_yaml::to_string(&twice).unwrap());
    }
}
