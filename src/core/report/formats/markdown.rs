//! Markdown report generator
//!
//! Renders catalog reports as Markdown tables. These reports render well in
//! GitHub, GitLab, and VS Code.

use crate::core::error::Result;
use crate::core::get_version;
use crate::core::report::{CatalogReportContext, FacetSection, ReportGenerator, ReportRow};
use askama::Template;

#[derive(Template)]
#[template(path = "catalog.md", escape = "none")]
struct MarkdownTemplate<'a> {
    title: &'a str,
    course_count: usize,
    total_hours: u64,
    sections: Vec<FacetSection>,
    rows: Vec<ReportRow>,
    version: &'a str,
}

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape characters that would break a Markdown table cell
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\n', '\r'], " ")
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &CatalogReportContext) -> Result<String> {
        let sections = ctx
            .facet_sections()
            .into_iter()
            .map(|mut section| {
                for count in &mut section.counts {
                    count.value = escape_cell(&count.value);
                }
                section
            })
            .collect();

        let template = MarkdownTemplate {
            title: &ctx.title,
            course_count: ctx.course_count(),
            total_hours: ctx.total_hours(),
            sections,
            rows: ctx
                .rows()
                .into_iter()
                .map(|row| row.map_text(escape_cell))
                .collect(),
            version: get_version(),
        };
        Ok(template.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::CatalogCourse;

    #[test]
    fn test_render_contains_summary_and_rows() {
        let mut course = CatalogCourse::new(10_000, "ITSED101", "Pipes | and more");
        course.specialization = "Software".to_string();
        let courses = vec![course];
        let ctx = CatalogReportContext::new("Software catalog", &courses);

        let output = MarkdownReporter::new().render(&ctx).unwrap();

        assert!(output.starts_with("# Software catalog"));
        assert!(output.contains("**Courses:** 1"));
        assert!(output.contains("**Total hours:** 3"));
        assert!(output.contains("| 10000 | ITSED101 | Pipes \\| and more |"));
        assert!(output.contains("### Specialization"));
    }
}
