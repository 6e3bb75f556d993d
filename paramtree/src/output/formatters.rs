//! Formatter implementations for merged documents and duplicate reports.

use std::fmt::Write;

use serde_yaml::Value;

use crate::duplicates::DuplicateGroup;
use crate::flatten::scalar_to_string;
use crate::Result;

use super::{DocumentFormatter, ReportFormatter};

/// Renders merged documents as YAML.
pub struct YamlFormatter;

impl DocumentFormatter for YamlFormatter {
    fn format(&self, document: &Value) -> Result<String> {
        Ok(serde_yaml::to_string(document)?)
    }

    fn extension(&self) -> &'static str {
        "yml"
    }
}

/// Renders merged documents as pretty-printed JSON.
///
/// JSON object keys must be strings, so non-string YAML keys are rendered
/// the way flattened keys are (`null`, `true`, `8080`); complex keys use
/// their flow YAML text.
pub struct JsonFormatter;

impl DocumentFormatter for JsonFormatter {
    fn format(&self, document: &Value) -> Result<String> {
        let mut rendered = serde_json::to_string_pretty(&to_json(document)?)?;
        rendered.push('\n');
        Ok(rendered)
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}

fn to_json(value: &Value) -> Result<serde_json::Value> {
    Ok(match value {
        Value::Mapping(map) => {
            let mut object = serde_json::Map::with_capacity(map.len());
            for (key, child) in map {
                object.insert(json_key(key)?, to_json(child)?);
            }
            serde_json::Value::Object(object)
        }
        Value::Sequence(items) => {
            serde_json::Value::Array(items.iter().map(to_json).collect::<Result<_>>()?)
        }
        Value::Tagged(tagged) => to_json(&tagged.value)?,
        scalar => serde_json::to_value(scalar)?,
    })
}

fn json_key(key: &Value) -> Result<String> {
    match scalar_to_string(key) {
        Some(text) => Ok(text),
        None => Ok(serde_yaml::to_string(key)?.trim_end().to_string()),
    }
}

/// Human-readable duplicate report.
pub struct HumanReportFormatter;

impl ReportFormatter for HumanReportFormatter {
    fn format(&self, groups: &[DuplicateGroup]) -> Result<String> {
        if groups.is_empty() {
            return Ok("No duplicate parameters found.\n".to_string());
        }

        let mut out = String::new();
        // Writing into a String cannot fail.
        for group in groups {
            let _ = writeln!(out, "Duplicate parameter: {}", group.key);
            for value in &group.values {
                let _ = writeln!(
                    out,
                    "  Value: {} ({} files)",
                    value.value,
                    value.occurrences.len()
                );
                for occurrence in &value.occurrences {
                    let _ = writeln!(out, "    - {} [{}]", occurrence.file, occurrence.level);
                }
            }
            out.push('\n');
        }
        let _ = writeln!(out, "Found {} duplicate parameter(s).", groups.len());
        Ok(out)
    }
}

/// JSON duplicate report: an array of groups.
pub struct JsonReportFormatter;

impl ReportFormatter for JsonReportFormatter {
    fn format(&self, groups: &[DuplicateGroup]) -> Result<String> {
        let mut rendered = serde_json::to_string_pretty(groups)?;
        rendered.push('\n');
        Ok(rendered)
    }
}
