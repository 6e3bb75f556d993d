//! Right-biased recursive merge and canonical key ordering.

use serde_yaml::{Mapping, Value};

use crate::flatten::scalar_to_string;

/// Merge `overlay` on top of `base`.
///
/// Two mappings are merged key by key, recursing wherever both sides hold a
/// mapping. In every other case (scalars, sequences, or a mapping meeting a
/// non-mapping) the overlay replaces the base value entirely.
///
/// # Examples
///
/// ```
/// use paramtree::merge::deep_merge;
///
/// let base: serde_yaml::Value = serde_yaml::from_str("a: {x: 1, y: 2}\nl: [1, 2]").unwrap();
/// let overlay: serde_yaml::Value = serde_yaml::from_str("a: {y: 3}\nl: [9]").unwrap();
/// let merged = deep_merge(base, overlay);
/// let expected: serde_yaml::Value = serde_yaml::from_str("a: {x: 1, y: 3}\nl: [9]").unwrap();
/// assert_eq!(merged, expected);
/// ```
#[must_use]
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(mut base_map), Value::Mapping(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(slot) => {
                        let base_value = std::mem::take(slot);
                        *slot = deep_merge(base_value, overlay_value);
                    }
                    None => {
                        base_map.insert(key, overlay_value);
                    }
                }
            }
            Value::Mapping(base_map)
        }
        (_, overlay_value) => overlay_value,
    }
}

/// Rebuild `value` with every mapping's keys in lexicographic order, at every
/// nesting level. Sequence element order is preserved.
///
/// # Examples
///
/// ```
/// use paramtree::merge::sort_keys;
///
/// let value: serde_yaml::Value = serde_yaml::from_str("b: 1\na: {d: 2, c: 3}").unwrap();
/// let sorted = serde_yaml::to_string(&sort_keys(value)).unwrap();
/// assert_eq!(sorted, "a:\n  c: 3\n  d: 2\nb: 1\n");
/// ```
#[must_use]
pub fn sort_keys(value: Value) -> Value {
    match value {
        Value::Mapping(map) => {
            let mut entries: Vec<(Value, Value)> = map.into_iter().collect();
            entries.sort_by_cached_key(|(key, _)| key_order(key));
            let mut sorted = Mapping::with_capacity(entries.len());
            for (key, child) in entries {
                sorted.insert(key, sort_keys(child));
            }
            Value::Mapping(sorted)
        }
        Value::Sequence(items) => Value::Sequence(items.into_iter().map(sort_keys).collect()),
        Value::Tagged(mut tagged) => {
            tagged.value = sort_keys(tagged.value);
            Value::Tagged(tagged)
        }
        scalar => scalar,
    }
}

/// Sort key for a mapping key: its scalar rendering, with complex keys last.
fn key_order(key: &Value) -> (bool, String) {
    match scalar_to_string(key) {
        Some(text) => (false, text),
        None => (true, serde_yaml::to_string(key).unwrap_or_default()),
    }
}

/// Whether every mapping inside `value` has its keys in sorted order.
#[must_use]
pub fn is_sorted(value: &Value) -> bool {
    match value {
        Value::Mapping(map) => {
            let keys: Vec<_> = map.keys().map(key_order).collect();
            keys.windows(2).all(|pair| pair[0] <= pair[1]) && map.values().all(is_sorted)
        }
        Value::Sequence(items) => items.iter().all(is_sorted),
        Value::Tagged(tagged) => is_sorted(&tagged.value),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(text: &str) -> Value {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn test_scalar_override() {
        let merged = deep_merge(yaml("a:\n  b: 1\n"), yaml("a:\n  b: 2\n"));
        assert_eq!(merged, yaml("a:\n  b: 2\n"));
    }

    #[test]
    fn test_nested_mappings_are_unioned() {
        let merged = deep_merge(
            yaml("db:\n  host: a\n  pool:\n    min: 1\n    max: 5\n"),
            yaml("db:\n  pool:\n    max: 10\n  user: svc\n"),
        );
        assert_eq!(
            merged,
            yaml("db:\n  host: a\n  pool:\n    min: 1\n    max: 10\n  user: svc\n")
        );
    }

    #[test]
    fn test_sequences_are_replaced() {
        let merged = deep_merge(yaml("l: [1, 2, 3]\n"), yaml("l: [4]\n"));
        assert_eq!(merged, yaml("l: [4]\n"));
    }

    #[test]
    fn test_mapping_replaced_by_scalar_and_back() {
        let merged = deep_merge(yaml("a:\n  b: 1\n"), yaml("a: flat\n"));
        assert_eq!(merged, yaml("a: flat\n"));

        let merged = deep_merge(yaml("a: flat\n"), yaml("a:\n  b: 1\n"));
        assert_eq!(merged, yaml("a:\n  b: 1\n"));
    }

    #[test]
    fn test_explicit_null_overrides() {
        let merged = deep_merge(yaml("a: 1\nb: 2\n"), yaml("a: ~\n"));
        assert_eq!(merged, yaml("a: ~\nb: 2\n"));
    }

    #[test]
    fn test_sort_keys_recurses_into_sequences() {
        let sorted = sort_keys(yaml("z: [{b: 1, a: 2}]\ny: 0\n"));
        assert!(is_sorted(&sorted));
        assert_eq!(sorted, yaml("y: 0\nz: [{a: 2, b: 1}]\n"));
        let inner = &sorted["z"][0];
        let keys: Vec<_> = inner.as_mapping().unwrap().keys().collect();
        assert_eq!(keys, vec![&yaml("a"), &yaml("b")]);
    }

    #[test]
    fn test_sort_keys_is_lexicographic_not_numeric() {
        let sorted = sort_keys(yaml("10: a\n9: b\n"));
        let keys: Vec<_> = sorted
            .as_mapping()
            .unwrap()
            .keys()
            .map(|k| scalar_to_string(k).unwrap())
            .collect();
        assert_eq!(keys, vec!["10", "9"]);
    }
}
