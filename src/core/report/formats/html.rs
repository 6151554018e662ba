//! HTML report generator
//!
//! Renders catalog reports as a self-contained HTML page with embedded CSS.
//! Text is HTML-escaped by the template engine.

use crate::core::error::Result;
use crate::core::get_version;
use crate::core::report::{CatalogReportContext, FacetSection, ReportGenerator, ReportRow};
use askama::Template;

#[derive(Template)]
#[template(path = "catalog.html")]
struct HtmlTemplate<'a> {
    title: &'a str,
    course_count: usize,
    total_hours: u64,
    sections: Vec<FacetSection>,
    rows: Vec<ReportRow>,
    version: &'a str,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &CatalogReportContext) -> Result<String> {
        let template = HtmlTemplate {
            title: &ctx.title,
            course_count: ctx.course_count(),
            total_hours: ctx.total_hours(),
            sections: ctx.facet_sections(),
            rows: ctx.rows(),
            version: get_version(),
        };
        Ok(template.render()?)
    }
}
