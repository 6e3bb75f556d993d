//! Tool settings for paramtree.
//!
//! Settings are layered from several sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (command-line flags, via
//!    [`ConfigBuilder::with_config`])
//! 2. Environment variables (`PARAMTREE_*`)
//! 3. The repository's `.paramtree.yaml`
//! 4. Built-in defaults
//!
//! ```
//! use paramtree::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().skip_env().build().unwrap();
//! assert_eq!(config.extensions(), vec!["yml".to_string()]);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, DEFAULT_EXTENSIONS, SETTINGS_FILE};
pub use validator::ConfigValidator;
