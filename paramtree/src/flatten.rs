//! Flattening of hierarchical YAML documents into dotted-path parameters.
//!
//! Nested mappings and sequences are walked depth-first and every scalar leaf
//! becomes one [`FlatParameter`] whose key joins the path segments with `.`
//! (sequence elements contribute their index). Empty mappings and empty
//! sequences have no leaves and contribute nothing.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_yaml::Value;

use crate::hierarchy::Document;

/// A single resolved key/value occurrence inside one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatParameter<'a> {
    /// Dotted path, e.g. `a.b.c`.
    pub key: String,
    /// String rendering of the scalar value.
    pub value: String,
    /// Document this parameter was read from.
    pub source: &'a Document,
}

/// Flatten a parsed value into `(key, value)` pairs in document order.
///
/// # Examples
///
/// ```
/// use paramtree::flatten::flatten_value;
///
/// let doc: serde_yaml::Value = serde_yaml::from_str("a:\n  b: 1\n  c: [x, y]\n").unwrap();
/// let flat = flatten_value(&doc);
/// assert_eq!(
///     flat,
///     vec![
///         ("a.b".to_string(), "1".to_string()),
///         ("a.c.0".to_string(), "x".to_string()),
///         ("a.c.1".to_string(), "y".to_string()),
///     ]
/// );
/// ```
#[must_use]
pub fn flatten_value(value: &Value) -> Vec<(String, String)> {
    let mut out = Vec::new();
    flatten_into("", value, &mut out);
    out
}

fn flatten_into(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Mapping(map) => {
            for (key, child) in map {
                let Some(segment) = scalar_to_string(key) else {
                    log::debug!("skipping non-scalar mapping key under '{prefix}'");
                    continue;
                };
                flatten_into(&join(prefix, &segment), child, out);
            }
        }
        Value::Sequence(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(&join(prefix, &index.to_string()), child, out);
            }
        }
        Value::Tagged(tagged) => flatten_into(prefix, &tagged.value, out),
        scalar => {
            // A bare top-level scalar has no path to hang it on.
            if prefix.is_empty() {
                return;
            }
            if let Some(rendered) = scalar_to_string(scalar) {
                out.push((prefix.to_string(), rendered));
            }
        }
    }
}

fn join(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}.{segment}")
    }
}

/// Render a scalar the way it is reported and compared.
///
/// Returns `None` for mappings and sequences.
#[must_use]
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some("null".to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::String(text) => Some(text.clone()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Read and parse a YAML file, returning `None` when it cannot be read or
/// parsed. Unreadable documents are treated as contributing nothing.
#[must_use]
pub fn read_document_lenient(path: &Path) -> Option<Value> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            log::debug!("skipping unreadable {}: {e}", path.display());
            return None;
        }
    };
    match serde_yaml::from_str(&contents) {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("skipping unparseable {}: {e}", path.display());
            None
        }
    }
}

/// Flatten one catalog document into [`FlatParameter`]s, sorted by key.
///
/// Keys are unique within a document. A literal dotted key (`a.b: 1`) and
/// the nested path it collides with (`a: {b: 2}`) yield one parameter; the
/// entry appearing later in the document wins. An empty or unparseable
/// document yields an empty sequence.
#[must_use]
pub fn flatten_document(document: &Document) -> Vec<FlatParameter<'_>> {
    let Some(value) = read_document_lenient(document.path()) else {
        return Vec::new();
    };
    let unique: BTreeMap<String, String> = flatten_value(&value).into_iter().collect();
    unique
        .into_iter()
        .map(|(key, value)| FlatParameter {
            key,
            value,
            source: document,
        })
        .collect()
}
