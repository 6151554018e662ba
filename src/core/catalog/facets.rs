//! Facet extraction for catalog filtering

use crate::core::models::CatalogCourse;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// A filterable course attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    /// Specialization label
    Specialization,
    /// Program type
    ProgramType,
    /// Level label
    Level,
    /// Semester label
    Semester,
}

impl Facet {
    /// All facets in display order
    pub const ALL: [Self; 4] = [
        Self::Specialization,
        Self::ProgramType,
        Self::Level,
        Self::Semester,
    ];

    /// The course's value for this facet; blank values count as absent
    #[must_use]
    pub fn value(self, course: &CatalogCourse) -> Option<&str> {
        let raw = match self {
            Self::Specialization => Some(course.specialization.as_str()),
            Self::ProgramType => course.program_type.as_deref(),
            Self::Level => course.level_label.as_deref(),
            Self::Semester => course.semester_label.as_deref(),
        };
        raw.filter(|v| !v.trim().is_empty())
    }

    /// Human-readable heading
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Specialization => "Specialization",
            Self::ProgramType => "Program type",
            Self::Level => "Level",
            Self::Semester => "Semester",
        }
    }
}

impl FromStr for Facet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "specialization" | "spec" => Ok(Self::Specialization),
            "program_type" | "program" => Ok(Self::ProgramType),
            "level" => Ok(Self::Level),
            "semester" => Ok(Self::Semester),
            _ => Err(format!("Unknown facet: {s}")),
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Distinct facet values in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFacets {
    /// Specialization labels
    pub specializations: Vec<String>,
    /// Program types
    pub program_types: Vec<String>,
    /// Level labels
    pub level_labels: Vec<String>,
    /// Semester labels
    pub semester_labels: Vec<String>,
}

impl CatalogFacets {
    /// Project every facet out of `courses`
    #[must_use]
    pub fn from_courses(courses: &[CatalogCourse]) -> Self {
        Self {
            specializations: distinct_values(courses, Facet::Specialization),
            program_types: distinct_values(courses, Facet::ProgramType),
            level_labels: distinct_values(courses, Facet::Level),
            semester_labels: distinct_values(courses, Facet::Semester),
        }
    }

    /// Values of one facet
    #[must_use]
    pub fn values(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Specialization => &self.specializations,
            Facet::ProgramType => &self.program_types,
            Facet::Level => &self.level_labels,
            Facet::Semester => &self.semester_labels,
        }
    }

    /// Returns true when no facet has any value
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Facet::ALL.iter().all(|f| self.values(*f).is_empty())
    }
}

fn distinct_values(courses: &[CatalogCourse], facet: Facet) -> Vec<String> {
    let mut seen = HashSet::new();
    courses
        .iter()
        .filter_map(|c| facet.value(c))
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

/// A facet value and how many courses carry it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetCount {
    /// Facet value
    pub value: String,
    /// Number of courses with this value
    pub count: usize,
}

/// Count courses per facet value, values in order of first appearance
#[must_use]
pub fn facet_counts(courses: &[CatalogCourse], facet: Facet) -> Vec<FacetCount> {
    let mut counts: Vec<FacetCount> = Vec::new();
    for value in courses.iter().filter_map(|c| facet.value(c)) {
        match counts.iter_mut().find(|fc| fc.value == value) {
            Some(existing) => existing.count += 1,
            None => counts.push(FacetCount {
                value: value.to_string(),
                count: 1,
            }),
        }
    }
    counts
}
