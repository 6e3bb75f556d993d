//! Cross-hierarchy duplicate parameter analysis.
//!
//! Every document in the catalog is flattened and each occurrence is grouped
//! by key, then by value. A key is reported only when at least one of its
//! values is repeated, i.e. the same value is defined in two or more files.
//! Keys that merely appear several times with distinct values (plain
//! overrides) are not reported, and within a reported key only the repeated
//! values are listed.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::flatten::flatten_document;
use crate::hierarchy::{Document, Level};

/// One place a value was defined.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Occurrence {
    /// `datacenter/filename`, or the bare filename for global documents.
    pub file: String,
    /// Level of the defining document.
    pub level: Level,
}

/// A repeated value for one key and every file that defines it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueGroup {
    /// The repeated value.
    pub value: String,
    /// Defining files, sorted by descriptor.
    pub occurrences: Vec<Occurrence>,
}

/// A key with at least one value defined redundantly across the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateGroup {
    /// Dotted parameter key.
    pub key: String,
    /// Repeated values, sorted by value.
    pub values: Vec<ValueGroup>,
}

/// Finds parameters defined redundantly across the hierarchy.
///
/// # Examples
///
/// ```no_run
/// use paramtree::{DuplicateAnalyzer, HierarchyScanner};
/// use std::path::Path;
///
/// let catalog = HierarchyScanner::new(Path::new("."), vec!["yml".into()])
///     .unwrap()
///     .scan()
///     .unwrap();
/// for group in DuplicateAnalyzer::analyze(&catalog) {
///     println!("{}", group.key);
/// }
/// ```
pub struct DuplicateAnalyzer;

impl DuplicateAnalyzer {
    /// Analyze the full catalog, returning one group per offending key in
    /// key order. Returns an empty vector when nothing is duplicated.
    #[must_use]
    pub fn analyze(catalog: &[Document]) -> Vec<DuplicateGroup> {
        let mut index: BTreeMap<String, BTreeMap<String, Vec<Occurrence>>> = BTreeMap::new();

        for document in catalog {
            let file = document.descriptor();
            for param in flatten_document(document) {
                index
                    .entry(param.key)
                    .or_default()
                    .entry(param.value)
                    .or_default()
                    .push(Occurrence {
                        file: file.clone(),
                        level: document.level(),
                    });
            }
        }

        index
            .into_iter()
            .filter_map(|(key, by_value)| {
                let values: Vec<ValueGroup> = by_value
                    .into_iter()
                    .filter(|(_, occurrences)| occurrences.len() >= 2)
                    .map(|(value, mut occurrences)| {
                        occurrences.sort();
                        ValueGroup { value, occurrences }
                    })
                    .collect();
                (!values.is_empty()).then_some(DuplicateGroup { key, values })
            })
            .collect()
    }
}
