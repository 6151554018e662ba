//! Report command handler
//!
//! Generates catalog reports in Markdown or HTML.

use super::build_catalog;
use super::catalog::file_stem;
use crate::args::{FilterArgs, ReportFormatArg, SourceArgs};
use edu_catalog::config::Config;
use edu_catalog::core::report::{CatalogReportContext, ReportFormat};
use edu_catalog::{error, info};
use std::path::{Path, PathBuf};

/// Run the report command.
///
/// # Arguments
/// * `source` - Curriculum inputs and specialization scope
/// * `filter` - Search and facet filters
/// * `format` - Report format
/// * `output` - Optional output path
/// * `config` - Configuration containing the default reports directory
pub fn run(
    source: &SourceArgs,
    filter: &FilterArgs,
    format: ReportFormatArg,
    output: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let courses = filter.to_filter().apply(build_catalog(source, config)?);

    let format = match format {
        ReportFormatArg::Md => ReportFormat::Markdown,
        ReportFormatArg::Html => ReportFormat::Html,
    };

    let title = source
        .specialization
        .as_deref()
        .map_or_else(|| "Course catalog".to_string(), |name| format!("Course catalog: {name}"));
    let ctx = CatalogReportContext::new(title, &courses);

    let output_path = output.map_or_else(|| default_report_path(config, source, format), Path::to_path_buf);

    format.reporter().generate(&ctx, &output_path).map_err(|e| {
        error!("Report generation failed for {}: {e}", output_path.display());
        format!("✗ Failed to generate report {}: {e}", output_path.display())
    })?;

    info!("Report rendered with {} courses", ctx.course_count());
    println!("✓ Report generated: {}", output_path.display());
    Ok(())
}

fn default_report_path(config: &Config, source: &SourceArgs, format: ReportFormat) -> PathBuf {
    let stem = source
        .specialization
        .as_deref()
        .map_or_else(|| "catalog".to_string(), file_stem);
    PathBuf::from(&config.paths.reports_dir).join(format!("{stem}.{}", format.extension()))
}
