//! Precedence merging of the hierarchy for one target.
//!
//! [`PrecedenceMerger`] picks the documents that apply to a
//! datacenter/foundation/environment combination and left-folds them with
//! [`deep_merge`], so later (more specific) documents override earlier ones.
//! The result is passed through [`sort_keys`] so that identical inputs always
//! render to byte-identical output.
//!
//! ```
//! use paramtree::merge::{deep_merge, sort_keys};
//! use serde_yaml::Value;
//!
//! let global: Value = serde_yaml::from_str("a: {b: 1}\nz: keep").unwrap();
//! let foundation: Value = serde_yaml::from_str("a: {b: 2}").unwrap();
//!
//! let merged = sort_keys(deep_merge(global, foundation));
//! assert_eq!(serde_yaml::to_string(&merged).unwrap(), "a:\n  b: 2\nz: keep\n");
//! ```

pub mod deep;
pub mod precedence;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use deep::{deep_merge, is_sorted, sort_keys};
pub use precedence::{load_layer, MergeTarget, MergedDocument, PrecedenceMerger};
