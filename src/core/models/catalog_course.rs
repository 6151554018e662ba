//! Flattened catalog course model

use serde::{Deserialize, Serialize};

/// Default credit hours when a material does not state them
pub const DEFAULT_HOURS: u32 = 3;

/// Emoji shown on every course card derived from the curriculum
pub const DEFAULT_EMOJI: &str = "📘";

/// A browsable course record, either hand-authored or derived from a material
///
/// Facet fields (`specialization`, `program_type`, `level_label`,
/// `semester_label`) are stored ready-to-use so consumers can project them
/// without re-parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogCourse {
    /// Surrogate id assigned at derivation time
    pub id: u64,

    /// Course code; the merge key
    #[serde(default)]
    pub code: String,

    /// Course title
    #[serde(default)]
    pub title: String,

    /// Course description
    #[serde(default)]
    pub description: String,

    /// Teacher or faculty label
    #[serde(default)]
    pub teacher: String,

    /// Specialization label inherited from the tree
    #[serde(default)]
    pub specialization: String,

    /// Owning department id
    #[serde(default)]
    pub department_id: String,

    /// Card emoji
    #[serde(default = "default_emoji")]
    pub emoji: String,

    /// Credit hours
    #[serde(default = "default_hours")]
    pub hours: u32,

    /// Program type facet (e.g., "diploma", "bachelor")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_type: Option<String>,

    /// Level facet (e.g., "المستوى الأول")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_label: Option<String>,

    /// Semester facet (e.g., "الفصل الأول")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester_label: Option<String>,

    /// Placeholder lesson structure for catalog display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<CourseContent>,
}

fn default_emoji() -> String {
    DEFAULT_EMOJI.to_string()
}

const fn default_hours() -> u32 {
    DEFAULT_HOURS
}

/// Course content outline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseContent {
    /// Chapters in order
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

/// One chapter of a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    /// Chapter number, starting at 1
    pub id: u32,
    /// Chapter title
    pub title: String,
    /// Short description
    #[serde(default)]
    pub description: String,
    /// Lessons in order
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

/// Kind of lesson material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    /// Recorded lecture
    Video,
    /// Downloadable summary
    Pdf,
    /// Short quiz
    Quiz,
}

/// One lesson entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    /// Lesson number within the chapter, starting at 1
    pub id: u32,
    /// Lesson title
    pub title: String,
    /// Lesson kind
    #[serde(rename = "type")]
    pub kind: LessonKind,
    /// Display duration (e.g., "10m")
    #[serde(default)]
    pub duration: String,
    /// Whether the lesson requires a paid subscription
    #[serde(default)]
    pub is_paid: bool,
}

impl CatalogCourse {
    /// Create a course with the given id, code and title; every other field is defaulted
    #[must_use]
    pub fn new(id: u64, code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
            title: title.into(),
            description: String::new(),
            teacher: String::new(),
            specialization: String::new(),
            department_id: String::new(),
            emoji: default_emoji(),
            hours: DEFAULT_HOURS,
            program_type: None,
            level_label: None,
            semester_label: None,
            content: None,
        }
    }

    /// Key used when merging catalogs: the code, or `C{id}` when the code is blank
    #[must_use]
    pub fn merge_key(&self) -> String {
        if self.code.trim().is_empty() {
            format!("C{}", self.id)
        } else {
            self.code.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_key_uses_code() {
        let course = CatalogCourse::new(1, "CS101", "Intro");
        assert_eq!(course.merge_key(), "CS101");
    }

    #[test]
    fn test_merge_key_falls_back_to_id() {
        let course = CatalogCourse::new(42, " ", "Untitled");
        assert_eq!(course.merge_key(), "C42");
    }

    #[test]
    fn test_deserialize_hand_authored_course_with_defaults() {
        let course: CatalogCourse =
            serde_json::from_str(r#"{"id":1,"code":"CS101","title":"Web Development"}"#).unwrap();
        assert_eq!(course.hours, DEFAULT_HOURS);
        assert_eq!(course.emoji, DEFAULT_EMOJI);
        assert!(course.program_type.is_none());
        assert!(course.content.is_none());
    }

    #[test]
    fn test_serializes_camel_case_and_skips_absent_facets() {
        let mut course = CatalogCourse::new(10_000, "X101", "Sample");
        course.department_id = "D1".to_string();
        let json = serde_json::to_string(&course).unwrap();
        assert!(json.contains("\"departmentId\":\"D1\""));
        assert!(!json.contains("levelLabel"));
    }
}
