//! CLI command handlers for `edu-catalog`.
//!
//! Each command is implemented in its own submodule. The helpers here resolve
//! the curriculum inputs shared by `catalog`, `facets` and `report`.

pub mod catalog;
pub mod config;
pub mod facets;
pub mod report;

use crate::args::SourceArgs;
use edu_catalog::config::Config;
use edu_catalog::core::catalog::{
    derive_courses_for_specialization, derive_full_catalog, duplicate_codes, merge_catalogs,
};
use edu_catalog::core::dataset::{load_courses, load_curricula};
use edu_catalog::core::models::CatalogCourse;
use edu_catalog::{debug, error, info, verbose, warn};
use std::path::PathBuf;

/// Curriculum files named on the command line, or the configured default
fn curriculum_files(source: &SourceArgs, config: &Config) -> Result<Vec<PathBuf>, String> {
    if !source.files.is_empty() {
        return Ok(source.files.clone());
    }
    if config.paths.curriculum_file.trim().is_empty() {
        return Err(
            "✗ No curriculum file given and config `curriculum_file` is empty.".to_string(),
        );
    }
    Ok(vec![PathBuf::from(&config.paths.curriculum_file)])
}

/// Base course list named on the command line, or the configured default
fn base_courses_file(source: &SourceArgs, config: &Config) -> Option<PathBuf> {
    if source.no_base {
        return None;
    }
    source.base.clone().or_else(|| {
        let configured = config.paths.base_courses_file.trim();
        (!configured.is_empty()).then(|| PathBuf::from(configured))
    })
}

/// Load the curriculum, derive the requested courses and merge the base list
pub fn build_catalog(source: &SourceArgs, config: &Config) -> Result<Vec<CatalogCourse>, String> {
    let files = curriculum_files(source, config)?;
    let curriculum = load_curricula(&files).map_err(|e| {
        error!("Failed to load curriculum: {e}");
        format!("✗ Failed to load curriculum: {e}")
    })?;
    info!(
        "Curriculum loaded: {} departments, {} materials",
        curriculum.departments.len(),
        curriculum.material_count()
    );

    if let Err(issues) = curriculum.validate() {
        for issue in issues {
            warn!("Curriculum issue: {issue}");
        }
    }

    let mut options = config.derive_options();
    if source.placeholder_content {
        options = options.with_placeholder_content(true);
    }

    let derived: Vec<CatalogCourse> = match source.specialization.as_deref() {
        Some(name) => {
            let courses: Vec<_> =
                derive_courses_for_specialization(&curriculum, name, &options).collect();
            if courses.is_empty() {
                warn!(
                    "No specialization named '{name}' in language '{}'",
                    options.match_language
                );
            }
            courses
        }
        None => derive_full_catalog(&curriculum, &options).collect(),
    };
    debug!("Derived {} courses", derived.len());

    let Some(base_path) = base_courses_file(source, config) else {
        return Ok(derived);
    };

    let base = load_courses(&base_path).map_err(|e| {
        error!("Failed to load base courses {}: {e}", base_path.display());
        format!("✗ Failed to load {}: {e}", base_path.display())
    })?;
    verbose!(
        "Merging {} base courses from {}",
        base.len(),
        base_path.display()
    );

    let collisions = duplicate_codes(base.iter().chain(&derived));
    if !collisions.is_empty() {
        info!(
            "{} codes collapse in merge: {}",
            collisions.len(),
            collisions.join(", ")
        );
    }

    Ok(merge_catalogs(base, derived))
}
