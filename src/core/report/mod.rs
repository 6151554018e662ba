//! Catalog report generation
//!
//! Reports summarize a derived catalog: course count, total credit hours, value
//! counts for every facet, and a course table. Rendering goes through askama
//! templates under `templates/`.

pub mod formats;

use crate::core::catalog::{facet_counts, Facet, FacetCount};
use crate::core::error::Result;
use crate::core::models::CatalogCourse;
use std::fs;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Value counts for one facet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetSection {
    /// Facet heading
    pub title: &'static str,
    /// Values with their course counts
    pub counts: Vec<FacetCount>,
}

/// One course table row, already formatted for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Surrogate id
    pub id: String,
    /// Course code
    pub code: String,
    /// Course title
    pub title: String,
    /// Specialization label
    pub specialization: String,
    /// Program type or empty
    pub program_type: String,
    /// Level label or empty
    pub level: String,
    /// Semester label or empty
    pub semester: String,
    /// Credit hours
    pub hours: u32,
}

impl ReportRow {
    fn from_course(course: &CatalogCourse) -> Self {
        Self {
            id: course.id.to_string(),
            code: course.code.clone(),
            title: course.title.clone(),
            specialization: course.specialization.clone(),
            program_type: course.program_type.clone().unwrap_or_default(),
            level: course.level_label.clone().unwrap_or_default(),
            semester: course.semester_label.clone().unwrap_or_default(),
            hours: course.hours,
        }
    }

    /// Apply `f` to every text cell
    #[must_use]
    pub fn map_text(self, f: impl Fn(&str) -> String) -> Self {
        Self {
            id: f(&self.id),
            code: f(&self.code),
            title: f(&self.title),
            specialization: f(&self.specialization),
            program_type: f(&self.program_type),
            level: f(&self.level),
            semester: f(&self.semester),
            hours: self.hours,
        }
    }
}

/// Data context for report generation
#[derive(Debug, Clone)]
pub struct CatalogReportContext<'a> {
    /// Report heading
    pub title: String,
    /// Courses in catalog order
    pub courses: &'a [CatalogCourse],
}

impl<'a> CatalogReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub fn new(title: impl Into<String>, courses: &'a [CatalogCourse]) -> Self {
        Self {
            title: title.into(),
            courses,
        }
    }

    /// Number of courses
    #[must_use]
    pub const fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Sum of credit hours
    #[must_use]
    pub fn total_hours(&self) -> u64 {
        self.courses.iter().map(|c| u64::from(c.hours)).sum()
    }

    /// Value counts for every facet that has at least one value
    #[must_use]
    pub fn facet_sections(&self) -> Vec<FacetSection> {
        Facet::ALL
            .iter()
            .map(|facet| FacetSection {
                title: facet.title(),
                counts: facet_counts(self.courses, *facet),
            })
            .filter(|section| !section.counts.is_empty())
            .collect()
    }

    /// Course table rows
    #[must_use]
    pub fn rows(&self) -> Vec<ReportRow> {
        self.courses.iter().map(ReportRow::from_course).collect()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &CatalogReportContext, output_path: &Path) -> Result<()> {
        let report_content = self.render(ctx)?;
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(output_path, report_content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &CatalogReportContext) -> Result<String>;
}
