//! Search and facet filtering over a catalog

use super::facets::Facet;
use crate::core::models::CatalogCourse;

/// Value that disables a facet constraint, as used by browsing dropdowns
pub const ANY: &str = "all";

/// Combined search + facet filter
///
/// Every constraint that is set must hold. A facet set to `None` or `"all"` is
/// ignored. The search term is trimmed and matched case-insensitively against
/// the course title and code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Free-text search over title and code
    pub search: Option<String>,
    /// Required specialization label
    pub specialization: Option<String>,
    /// Required program type
    pub program_type: Option<String>,
    /// Required level label
    pub level: Option<String>,
    /// Required semester label
    pub semester: Option<String>,
}

impl CatalogFilter {
    /// A filter that accepts everything
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Constrain one facet
    #[must_use]
    pub fn with_facet(mut self, facet: Facet, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match facet {
            Facet::Specialization => self.specialization = value,
            Facet::ProgramType => self.program_type = value,
            Facet::Level => self.level = value,
            Facet::Semester => self.semester = value,
        }
        self
    }

    fn constraint(&self, facet: Facet) -> Option<&str> {
        let value = match facet {
            Facet::Specialization => self.specialization.as_deref(),
            Facet::ProgramType => self.program_type.as_deref(),
            Facet::Level => self.level.as_deref(),
            Facet::Semester => self.semester.as_deref(),
        };
        value.filter(|v| !v.is_empty() && *v != ANY)
    }

    fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
    }

    /// Returns true when no constraint is active
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search_term().is_none() && Facet::ALL.iter().all(|f| self.constraint(*f).is_none())
    }

    /// Whether `course` satisfies every active constraint
    #[must_use]
    pub fn matches(&self, course: &CatalogCourse) -> bool {
        let search_ok = self.search_term().is_none_or(|term| {
            course.title.to_lowercase().contains(&term) || course.code.to_lowercase().contains(&term)
        });

        search_ok
            && Facet::ALL.iter().all(|facet| {
                self.constraint(*facet)
                    .is_none_or(|wanted| facet.value(course) == Some(wanted))
            })
    }

    /// Keep only the matching courses, preserving order
    #[must_use]
    pub fn apply(&self, courses: Vec<CatalogCourse>) -> Vec<CatalogCourse> {
        if self.is_empty() {
            return courses;
        }
        courses.into_iter().filter(|c| self.matches(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<CatalogCourse> {
        let mut a = CatalogCourse::new(1, "ITSED101", "Intro to Programming");
        a.specialization = "Software".to_string();
        a.program_type = Some("diploma".to_string());
        a.level_label = Some("Diploma".to_string());
        a.semester_label = Some("Semester 1".to_string());

        let mut b = CatalogCourse::new(2, "ITSEB201", "Software Design");
        b.specialization = "Software".to_string();
        b.program_type = Some("bachelor".to_string());
        b.level_label = Some("Bachelor".to_string());
        b.semester_label = Some("Semester 2".to_string());

        let mut c = CatalogCourse::new(3, "CIVD101", "Intro to Civil Eng.");
        c.specialization = "Civil".to_string();
        c.program_type = Some("diploma".to_string());
        c.level_label = Some("Diploma".to_string());
        c.semester_label = Some("Semester 1".to_string());

        vec![a, b, c]
    }

    fn ids(courses: &[CatalogCourse]) -> Vec<u64> {
        courses.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = CatalogFilter::new().with_facet(Facet::Level, ANY);
        assert!(filter.is_empty());
        assert_eq!(ids(&filter.apply(catalog())), vec![1, 2, 3]);
    }

    #[test]
    fn test_search_matches_title_or_code_case_insensitive() {
        let by_title = CatalogFilter::new().with_search("  INTRO ");
        assert_eq!(ids(&by_title.apply(catalog())), vec![1, 3]);

        let by_code = CatalogFilter::new().with_search("itseb");
        assert_eq!(ids(&by_code.apply(catalog())), vec![2]);
    }

    #[test]
    fn test_facets_combine() {
        let filter = CatalogFilter::new()
            .with_facet(Facet::ProgramType, "diploma")
            .with_facet(Facet::Specialization, "Civil");
        assert_eq!(ids(&filter.apply(catalog())), vec![3]);
    }

    #[test]
    fn test_facet_requires_present_value() {
        let mut course = CatalogCourse::new(9, "X", "No facets");
        course.level_label = None;
        let filter = CatalogFilter::new().with_facet(Facet::Level, "Diploma");
        assert!(!filter.matches(&course));
    }

    #[test]
    fn test_search_and_facet() {
        let filter = CatalogFilter::new()
            .with_search("intro")
            .with_facet(Facet::Semester, "Semester 1")
            .with_facet(Facet::Specialization, "Software");
        assert_eq!(ids(&filter.apply(catalog())), vec![1]);
    }
}
