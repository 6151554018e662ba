//! Export catalogs to CSV or JSON

use crate::core::error::{CatalogError, Result};
use crate::core::models::CatalogCourse;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Trait for writing a catalog in one format
pub trait CatalogExporter {
    /// Render `courses` to a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn render(&self, courses: &[CatalogCourse]) -> Result<String>;

    /// Render `courses` and write them to `output_path`
    ///
    /// # Errors
    /// Returns an error if rendering or file writing fails
    fn export(&self, courses: &[CatalogCourse], output_path: &Path) -> Result<()> {
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(output_path, self.render(courses)?)?;
        Ok(())
    }
}

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values, one row per course
    Csv,
    /// Pretty-printed JSON array
    Json,
}

impl ExportFormat {
    /// File extension for this format
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Exporter for this format
    #[must_use]
    pub fn exporter(self) -> Box<dyn CatalogExporter> {
        match self {
            Self::Csv => Box::new(CsvExporter),
            Self::Json => Box::new(JsonExporter),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(CatalogError::UnsupportedFormat(format!(
                "unknown export format '{other}' (expected csv or json)"
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// CSV columns in output order
pub const CSV_HEADER: [&str; 11] = [
    "id",
    "code",
    "title",
    "specialization",
    "departmentId",
    "programType",
    "levelLabel",
    "semesterLabel",
    "hours",
    "teacher",
    "description",
];

/// CSV exporter
pub struct CsvExporter;

impl CatalogExporter for CsvExporter {
    fn render(&self, courses: &[CatalogCourse]) -> Result<String> {
        let mut out = CSV_HEADER.join(",");
        out.push('\n');

        for course in courses {
            let row = [
                course.id.to_string(),
                course.code.clone(),
                course.title.clone(),
                course.specialization.clone(),
                course.department_id.clone(),
                course.program_type.clone().unwrap_or_default(),
                course.level_label.clone().unwrap_or_default(),
                course.semester_label.clone().unwrap_or_default(),
                course.hours.to_string(),
                course.teacher.clone(),
                course.description.clone(),
            ];
            let fields: Vec<String> = row.iter().map(|f| escape_csv_field(f)).collect();
            out.push_str(&fields.join(","));
            out.push('\n');
        }

        Ok(out)
    }
}

/// Quote a CSV field when it contains a delimiter, quote or line break
#[must_use]
pub fn escape_csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// JSON exporter
pub struct JsonExporter;

impl CatalogExporter for JsonExporter {
    fn render(&self, courses: &[CatalogCourse]) -> Result<String> {
        let mut out = serde_json::to_string_pretty(courses)?;
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Vec<CatalogCourse> {
        let mut course = CatalogCourse::new(10_000, "ITSED101", "Programming, Part \"1\"");
        course.specialization = "Software".to_string();
        course.program_type = Some("diploma".to_string());
        course.description = "Line one\nLine two".to_string();
        vec![course]
    }

    #[test]
    fn test_escape_csv_field() {
        assert_eq!(escape_csv_field("plain"), "plain");
        assert_eq!(escape_csv_field("a,b"), "\"a,b\"");
        assert_eq!(escape_csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_csv_render() {
        let csv = CsvExporter.render(&sample()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER.join(",").as_str()));
        let row = lines.next().unwrap();
        assert!(row.starts_with("10000,ITSED101,\"Programming, Part \"\"1\"\"\",Software,,diploma,,,3,"));
        assert!(csv.contains("\"Line one\nLine two\""));
    }

    #[test]
    fn test_json_render_uses_camel_case() {
        let json = JsonExporter.render(&sample()).unwrap();
        let parsed: Vec<CatalogCourse> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
        assert!(json.contains("\"programType\": \"diploma\""));
        assert!(!json.contains("levelLabel"));
    }

    #[test]
    fn test_export_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("catalog.json");
        ExportFormat::Json.exporter().export(&sample(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_export_format_parse() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!(ExportFormat::Json.to_string(), "json");
        assert!("xml".parse::<ExportFormat>().is_err());
    }
}
