//! CLI command implementations.
//!
//! - `find-duplicates`: report parameters repeated with the same value
//! - `generate-foundation`: merge the hierarchy for one foundation
//! - `list-files`: list classified parameter documents
//! - `show-sources`: list the files contributing to a foundation

pub mod find_duplicates;
pub mod generate_foundation;
pub mod list_files;
pub mod show_sources;

pub use find_duplicates::FindDuplicatesCommand;
pub use generate_foundation::GenerateFoundationCommand;
pub use list_files::ListFilesCommand;
pub use show_sources::ShowSourcesCommand;
