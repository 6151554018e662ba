//! Facets command handler

use super::build_catalog;
use crate::args::SourceArgs;
use edu_catalog::config::Config;
use edu_catalog::core::catalog::{facet_counts, Facet};
use edu_catalog::core::models::CatalogCourse;
use std::fmt::Write;

/// Run the facets command.
pub fn run(source: &SourceArgs, config: &Config) -> Result<(), String> {
    let courses = build_catalog(source, config)?;
    print!("{}", render_facets(&courses));
    Ok(())
}

/// One block per facet listing each value with its course count
pub fn render_facets(courses: &[CatalogCourse]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Facets ({} courses) ===", courses.len());
    for facet in Facet::ALL {
        let counts = facet_counts(courses, facet);
        let _ = writeln!(out, "\n{facet}:");
        if counts.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for entry in counts {
            let _ = writeln!(out, "  {} ({})", entry.value, entry.count);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_facets() {
        let mut a = CatalogCourse::new(1, "A", "a");
        a.specialization = "Civil".to_string();
        a.level_label = Some("Diploma".to_string());
        let mut b = a.clone();
        b.id = 2;

        let text = render_facets(&[a, b]);
        assert!(text.starts_with("=== Facets (2 courses) ==="));
        assert!(text.contains("Specialization:\n  Civil (2)"));
        assert!(text.contains("Program type:\n  (none)"));
        assert!(text.contains("Level:\n  Diploma (2)"));
    }
}
