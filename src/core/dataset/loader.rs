//! Curriculum and course list loading from JSON or TOML files

use crate::core::error::{CatalogError, Result};
use crate::core::models::{CatalogCourse, Curriculum, Department};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// On-disk dataset encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    /// JSON document
    Json,
    /// TOML document
    Toml,
}

impl DatasetFormat {
    /// Format implied by the file extension, if any
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct CourseList {
    #[serde(default)]
    courses: Vec<CatalogCourse>,
}

/// Load a curriculum dataset from `path`
///
/// `.json` files may hold `{"departments": [...]}` or a bare array of
/// departments; `.toml` files use `[[departments]]` tables. Other extensions are
/// tried as JSON first, then TOML. When neither parses, content that opens like a
/// JSON document reports the JSON error with its line and column.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a curriculum document
pub fn load_curriculum<P: AsRef<Path>>(path: P) -> Result<Curriculum> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    if let Some(format) = DatasetFormat::from_path(path) {
        return parse_curriculum(&content, format);
    }

    match parse_curriculum(&content, DatasetFormat::Json) {
        Ok(curriculum) => Ok(curriculum),
        Err(json_err) => parse_curriculum(&content, DatasetFormat::Toml).map_err(|_| {
            if looks_like_json(&content) {
                json_err
            } else {
                CatalogError::UnsupportedFormat(format!(
                    "{} is neither a JSON nor a TOML curriculum",
                    path.display()
                ))
            }
        }),
    }
}

/// `{...}` or an array opening with an object, string or `]`; TOML headers open
/// with `[name]` or `[[name]]`
fn looks_like_json(content: &str) -> bool {
    let mut chars = content.trim_start().chars();
    match chars.next() {
        Some('{') => true,
        Some('[') => matches!(
            chars.find(|c| !c.is_whitespace()),
            Some('{' | ']' | '"')
        ),
        _ => false,
    }
}

/// Load several curriculum files and concatenate their departments in order
///
/// # Errors
/// Returns the first loading error encountered
pub fn load_curricula<I, P>(paths: I) -> Result<Curriculum>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut combined = Curriculum::default();
    for path in paths {
        combined.departments.extend(load_curriculum(path)?.departments);
    }
    Ok(combined)
}

/// Parse a curriculum document held in memory
///
/// # Errors
/// Returns an error when the document is malformed or has the wrong shape
pub fn parse_curriculum(content: &str, format: DatasetFormat) -> Result<Curriculum> {
    match format {
        DatasetFormat::Json => match serde_json::from_str::<Value>(content)? {
            Value::Array(_) => {
                let departments: Vec<Department> = serde_json::from_str(content)?;
                Ok(Curriculum::new(departments))
            }
            Value::Object(_) => Ok(serde_json::from_str(content)?),
            other => Err(CatalogError::UnsupportedFormat(format!(
                "expected a departments array or object, found {}",
                json_kind(&other)
            ))),
        },
        DatasetFormat::Toml => Ok(toml::from_str(content)?),
    }
}

/// Load a hand-authored course list from `path`
///
/// JSON files may hold a bare array or `{"courses": [...]}`; TOML files use
/// `[[courses]]` tables.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a course list
pub fn load_courses<P: AsRef<Path>>(path: P) -> Result<Vec<CatalogCourse>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    parse_courses(&content, DatasetFormat::from_path(path).unwrap_or(DatasetFormat::Json))
}

/// Parse a course list held in memory
///
/// # Errors
/// Returns an error when the document is malformed or has the wrong shape
pub fn parse_courses(content: &str, format: DatasetFormat) -> Result<Vec<CatalogCourse>> {
    match format {
        DatasetFormat::Json => match serde_json::from_str::<Value>(content)? {
            Value::Array(_) => Ok(serde_json::from_str(content)?),
            Value::Object(_) => Ok(serde_json::from_str::<CourseList>(content)?.courses),
            other => Err(CatalogError::UnsupportedFormat(format!(
                "expected a course array or object, found {}",
                json_kind(&other)
            ))),
        },
        DatasetFormat::Toml => Ok(toml::from_str::<CourseList>(content)?.courses),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
