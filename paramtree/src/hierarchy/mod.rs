//! The global → datacenter → foundation document hierarchy.
//!
//! A parameter repository is laid out as:
//!
//! ```text
//! <repo>/global.yml
//! <repo>/global-{lab,nonprod,prod}.yml
//! <repo>/<datacenter>/datacenter.yml
//! <repo>/<datacenter>/datacenter-{lab,nonprod,prod}.yml
//! <repo>/<datacenter>/<foundation>.yml
//! ```
//!
//! [`HierarchyScanner`] turns that layout into a catalog of [`Document`]s,
//! each tagged with its [`Level`], datacenter, foundation and optional
//! [`Environment`] variant.

pub mod scanner;
pub mod types;

pub use scanner::{validate_repo_root, HierarchyScanner, DATACENTER_BASE, GLOBAL_BASE};
pub use types::{Document, Environment, Level};
