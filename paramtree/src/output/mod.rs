//! Output formatting for merged documents and duplicate reports.
//!
//! Merged documents render as YAML or JSON and are written either to a file
//! or to standard output behind a descriptive header. Duplicate reports
//! render as human-readable text or JSON on standard output.

mod formatters;

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;
use serde_yaml::Value;

use crate::duplicates::DuplicateGroup;
use crate::error::{Error, Result};
use crate::merge::MergedDocument;
use crate::workdir::WorkDir;

pub use formatters::{HumanReportFormatter, JsonFormatter, JsonReportFormatter, YamlFormatter};

/// Trait for rendering a merged document.
pub trait DocumentFormatter {
    /// Render the document. Key order is preserved as given.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, document: &Value) -> Result<String>;

    /// File extension for staged artifacts.
    fn extension(&self) -> &'static str;
}

/// Trait for rendering a duplicate report.
pub trait ReportFormatter {
    /// Render the report.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, groups: &[DuplicateGroup]) -> Result<String>;
}

/// Output format for merged documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// YAML (default).
    #[default]
    Yaml,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn DocumentFormatter> {
        match self {
            Self::Yaml => Box::new(YamlFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml => write!(f, "yaml"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(Error::Validation {
                field: "output_format".to_string(),
                message: format!("unknown format '{s}' (expected yaml or json)"),
            }),
        }
    }
}

/// Output format for duplicate reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Indented text listing (default).
    #[default]
    Human,
    /// JSON array of groups.
    Json,
}

impl ReportFormat {
    /// Create a formatter for this report format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn ReportFormatter> {
        match self {
            Self::Human => Box::new(HumanReportFormatter),
            Self::Json => Box::new(JsonReportFormatter),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(Error::Validation {
                field: "format".to_string(),
                message: format!("unknown report format '{s}' (expected human or json)"),
            }),
        }
    }
}

/// Where a merged document is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Overwrite the file at this path.
    File(PathBuf),
    /// Standard output, preceded by a header.
    Stdout,
}

/// Header lines describing a merged document.
///
/// Lines start with `#` so that YAML output stays parseable.
#[must_use]
pub fn header(document: &MergedDocument) -> String {
    let target = document.target();
    let sources: Vec<String> = document.sources().iter().map(|d| d.descriptor()).collect();
    format!(
        "# Merged parameters for {}/{} (environment: {})\n# Sources (lowest to highest precedence): {}\n",
        target.datacenter,
        target.foundation,
        target.environment,
        sources.join(", ")
    )
}

/// Render `document` and deliver it to `destination`.
///
/// The rendered text is first staged in `scratch`, so a rendering failure
/// never truncates an existing output file. Stdout output is written to
/// `stdout` with a [`header`] for YAML; JSON output carries no header so it
/// stays machine-readable.
///
/// # Errors
///
/// Returns [`Error::Write`] if the destination cannot be written, or a
/// serialization error if rendering fails.
pub fn write_merged(
    document: &MergedDocument,
    format: OutputFormat,
    destination: &Destination,
    scratch: &WorkDir,
    stdout: &mut dyn Write,
) -> Result<()> {
    let formatter = format.create_formatter();
    let rendered = formatter.format(document.value())?;
    let staged = scratch.stage(&format!("merged.{}", formatter.extension()), &rendered)?;

    match destination {
        Destination::File(path) => {
            fs::copy(&staged, path).map_err(|source| Error::Write {
                path: path.clone(),
                source,
            })?;
            log::debug!("wrote {} bytes to {}", rendered.len(), path.display());
        }
        Destination::Stdout => {
            let to_stdout = |e| Error::Write {
                path: PathBuf::from("<stdout>"),
                source: e,
            };
            if format == OutputFormat::Yaml {
                stdout.write_all(header(document).as_bytes()).map_err(to_stdout)?;
            }
            stdout.write_all(rendered.as_bytes()).map_err(to_stdout)?;
            stdout.flush().map_err(to_stdout)?;
        }
    }

    Ok(())
}
