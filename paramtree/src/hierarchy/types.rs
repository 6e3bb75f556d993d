//! Core types describing where a parameter document sits in the hierarchy.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Position of a document in the global → datacenter → foundation hierarchy.
///
/// Levels are ordered by precedence: a foundation file overrides its
/// datacenter, which overrides the global layer.
///
/// # Examples
///
/// ```
/// use paramtree::Level;
///
/// assert!(Level::Global < Level::Datacenter);
/// assert!(Level::Datacenter < Level::Foundation);
/// assert_eq!(Level::Foundation.to_string(), "Foundation");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Level {
    /// Repository-wide parameters.
    Global = 0,
    /// Parameters shared by every foundation in one datacenter.
    Datacenter = 1,
    /// Parameters for a single foundation.
    Foundation = 2,
}

impl Level {
    /// Human-readable label used in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Global => "Global",
            Self::Datacenter => "Datacenter",
            Self::Foundation => "Foundation",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Environment variant layered on top of a level's base file.
///
/// # Examples
///
/// ```
/// use paramtree::Environment;
///
/// let env: Environment = "nonprod".parse().unwrap();
/// assert_eq!(env, Environment::Nonprod);
/// assert!("staging".parse::<Environment>().is_err());
/// assert_eq!(Environment::default(), Environment::Prod);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Lab environment.
    Lab,
    /// Non-production environment.
    Nonprod,
    /// Production environment.
    #[default]
    Prod,
}

impl Environment {
    /// All variants, in the order their files are discovered.
    pub const ALL: [Self; 3] = [Self::Lab, Self::Nonprod, Self::Prod];

    /// The filename suffix for this variant (`lab`, `nonprod`, `prod`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lab => "lab",
            Self::Nonprod => "nonprod",
            Self::Prod => "prod",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lab" => Ok(Self::Lab),
            "nonprod" => Ok(Self::Nonprod),
            "prod" => Ok(Self::Prod),
            other => Err(Error::InvalidEnvironment {
                value: other.to_string(),
            }),
        }
    }
}

/// A discovered configuration document and its place in the hierarchy.
///
/// Constructed only through the level-specific constructors so that
/// `foundation` is set exactly when the level is [`Level::Foundation`] and
/// `datacenter` is empty exactly at [`Level::Global`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    level: Level,
    datacenter: Option<String>,
    foundation: Option<String>,
    environment: Option<Environment>,
    path: PathBuf,
}

impl Document {
    /// A global-level document (`global.yml` or `global-<env>.yml`).
    #[must_use]
    pub fn global(path: PathBuf, environment: Option<Environment>) -> Self {
        Self {
            level: Level::Global,
            datacenter: None,
            foundation: None,
            environment,
            path,
        }
    }

    /// A datacenter-level document (`<dc>/datacenter.yml` or a variant).
    #[must_use]
    pub fn datacenter(
        path: PathBuf,
        datacenter: impl Into<String>,
        environment: Option<Environment>,
    ) -> Self {
        Self {
            level: Level::Datacenter,
            datacenter: Some(datacenter.into()),
            foundation: None,
            environment,
            path,
        }
    }

    /// A foundation-level document (`<dc>/<foundation>.yml`).
    #[must_use]
    pub fn foundation(
        path: PathBuf,
        datacenter: impl Into<String>,
        foundation: impl Into<String>,
    ) -> Self {
        Self {
            level: Level::Foundation,
            datacenter: Some(datacenter.into()),
            foundation: Some(foundation.into()),
            environment: None,
            path,
        }
    }

    /// Hierarchy level.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Datacenter identifier, `None` at global level.
    #[must_use]
    pub fn datacenter_name(&self) -> Option<&str> {
        self.datacenter.as_deref()
    }

    /// Foundation identifier, `None` unless the level is foundation.
    #[must_use]
    pub fn foundation_name(&self) -> Option<&str> {
        self.foundation.as_deref()
    }

    /// Environment variant, `None` for a base file.
    #[must_use]
    pub const fn environment(&self) -> Option<Environment> {
        self.environment
    }

    /// Filesystem location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Short descriptor used in reports: `datacenter/filename`, or the bare
    /// filename for global documents.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramtree::Document;
    /// use std::path::PathBuf;
    ///
    /// let global = Document::global(PathBuf::from("/repo/global.yml"), None);
    /// assert_eq!(global.descriptor(), "global.yml");
    ///
    /// let fnd = Document::foundation(PathBuf::from("/repo/dc1/f1.yml"), "dc1", "f1");
    /// assert_eq!(fnd.descriptor(), "dc1/f1.yml");
    /// ```
    #[must_use]
    pub fn descriptor(&self) -> String {
        let filename = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        match &self.datacenter {
            Some(dc) => format!("{dc}/{filename}"),
            None => filename,
        }
    }
}
