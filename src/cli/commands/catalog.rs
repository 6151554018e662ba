//! Catalog command handler
//!
//! Derives the catalog, applies search and facet filters, then prints a table or
//! exports CSV/JSON.

use super::build_catalog;
use crate::args::{CatalogFormatArg, FilterArgs, SourceArgs};
use edu_catalog::config::Config;
use edu_catalog::core::catalog_export::ExportFormat;
use edu_catalog::core::models::CatalogCourse;
use edu_catalog::{error, info, verbose};
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Run the catalog command.
///
/// # Arguments
/// * `source` - Curriculum inputs and specialization scope
/// * `filter` - Search and facet filters
/// * `format` - Requested output format, if any
/// * `output` - Output path (`-` for stdout)
/// * `config` - Configuration containing the default exports directory
pub fn run(
    source: &SourceArgs,
    filter: &FilterArgs,
    format: Option<CatalogFormatArg>,
    output: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let courses = filter.to_filter().apply(build_catalog(source, config)?);
    info!("{} courses after filtering", courses.len());

    let format = format.unwrap_or_else(|| output.map_or(CatalogFormatArg::Table, infer_format));

    let export_format = match format {
        CatalogFormatArg::Table => {
            let table = render_table(&courses);
            return match output.filter(|p| !is_stdout(p)) {
                Some(path) => write_output(path, &table),
                None => {
                    print!("{table}");
                    Ok(())
                }
            };
        }
        CatalogFormatArg::Csv => ExportFormat::Csv,
        CatalogFormatArg::Json => ExportFormat::Json,
    };

    let rendered = export_format.exporter().render(&courses).map_err(|e| {
        error!("Catalog export failed: {e}");
        format!("✗ Failed to render catalog: {e}")
    })?;

    match output {
        Some(path) if is_stdout(path) => {
            print!("{rendered}");
            Ok(())
        }
        Some(path) => write_output(path, &rendered),
        None => {
            let path = default_export_path(config, source, export_format);
            write_output(&path, &rendered)
        }
    }
}

fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Format implied by an output path; unknown extensions print a table
fn infer_format(path: &Path) -> CatalogFormatArg {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => CatalogFormatArg::Csv,
        Some(ext) if ext.eq_ignore_ascii_case("json") => CatalogFormatArg::Json,
        _ => CatalogFormatArg::Table,
    }
}

fn default_export_path(config: &Config, source: &SourceArgs, format: ExportFormat) -> PathBuf {
    let stem = source
        .specialization
        .as_deref()
        .map_or_else(|| "catalog".to_string(), file_stem);
    PathBuf::from(&config.paths.exports_dir).join(format!("{stem}.{}", format.extension()))
}

/// File-name-safe form of a specialization name
pub fn file_stem(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    if stem.is_empty() {
        "catalog".to_string()
    } else {
        stem
    }
}

fn write_output(path: &Path, content: &str) -> Result<(), String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            error!("Failed to create directory {}: {e}", parent.display());
            format!("✗ Failed to create directory {}: {e}", parent.display())
        })?;
    }
    std::fs::write(path, content).map_err(|e| {
        error!("Failed to write {}: {e}", path.display());
        format!("✗ Failed to write {}: {e}", path.display())
    })?;
    println!("✓ Catalog written to: {}", path.display());
    verbose!("  {} bytes", content.len());
    Ok(())
}

/// Render courses as an aligned text table
pub fn render_table(courses: &[CatalogCourse]) -> String {
    let headers = ["ID", "CODE", "TITLE", "SPECIALIZATION", "LEVEL", "SEMESTER", "HOURS"];
    let rows: Vec<[String; 7]> = courses
        .iter()
        .map(|c| {
            [
                c.id.to_string(),
                c.code.clone(),
                c.title.clone(),
                c.specialization.clone(),
                c.level_label.clone().unwrap_or_default(),
                c.semester_label.clone().unwrap_or_default(),
                c.hours.to_string(),
            ]
        })
        .collect();

    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut push_row = |cells: &[&str]| {
        let line: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| {
                let pad = width.saturating_sub(cell.chars().count());
                format!("{cell}{}", " ".repeat(pad))
            })
            .collect();
        let _ = writeln!(out, "{}", line.join("  ").trim_end());
    };

    push_row(&headers);
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        push_row(&cells);
    }
    let _ = writeln!(out, "\n{} courses", courses.len());
    out
}
