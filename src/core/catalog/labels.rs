//! Placeholder labels used when the curriculum leaves a field blank

use crate::core::models::{Chapter, CourseContent, Language, Lesson, LessonKind};

/// Localized placeholder strings for one catalog language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholders {
    language: Language,
    /// Title for a material with no name, title or code
    pub untitled_material: &'static str,
    /// Level label of last resort
    pub level: &'static str,
    /// Semester label of last resort
    pub semester: &'static str,
    /// Specialization label of last resort
    pub specialization: &'static str,
    /// Teacher label for specialization-scoped courses without a default teacher
    pub specialization_teacher: &'static str,
    /// Teacher label for full-catalog courses without a default teacher
    pub catalog_teacher: &'static str,
    /// Title of the single placeholder chapter
    pub chapter_title: &'static str,
    /// Description of the single placeholder chapter
    pub chapter_description: &'static str,
    /// Title of the placeholder intro video
    pub intro_lesson: &'static str,
    /// Title of the placeholder PDF summary
    pub summary_lesson: &'static str,
}

/// Arabic placeholders (the dataset's authoring language)
pub const ARABIC: Placeholders = Placeholders {
    language: Language::Ar,
    untitled_material: "مادة بدون اسم",
    level: "مستوى",
    semester: "فصل دراسي",
    specialization: "تخصص",
    specialization_teacher: "هيئة التدريس في القسم / التخصص",
    catalog_teacher: "هيئة التدريس",
    chapter_title: "الوحدة الأولى",
    chapter_description: "مقدمة عن المقرر وأهدافه.",
    intro_lesson: "مقدمة عن المقرر",
    summary_lesson: "ملخص PDF",
};

/// English placeholders
pub const ENGLISH: Placeholders = Placeholders {
    language: Language::En,
    untitled_material: "Untitled material",
    level: "Level",
    semester: "Semester",
    specialization: "Specialization",
    specialization_teacher: "Department faculty",
    catalog_teacher: "Faculty",
    chapter_title: "Unit 1",
    chapter_description: "Course introduction and objectives.",
    intro_lesson: "Course introduction",
    summary_lesson: "PDF summary",
};

impl Placeholders {
    /// Placeholders for `lang`
    #[must_use]
    pub const fn for_language(lang: Language) -> Self {
        match lang {
            Language::Ar => ARABIC,
            Language::En => ENGLISH,
        }
    }

    /// Synthesized description for a material with none of its own
    #[must_use]
    pub fn describe(&self, title: &str, specialization: &str) -> String {
        match self.language {
            Language::Ar => format!("مقرر {title} ضمن تخصص {specialization}"),
            Language::En => format!("{title} course in the {specialization} specialization"),
        }
    }

    /// One chapter holding an intro video and a PDF summary, both free
    #[must_use]
    pub fn placeholder_content(&self) -> CourseContent {
        CourseContent {
            chapters: vec![Chapter {
                id: 1,
                title: self.chapter_title.to_string(),
                description: self.chapter_description.to_string(),
                lessons: vec![
                    Lesson {
                        id: 1,
                        title: self.intro_lesson.to_string(),
                        kind: LessonKind::Video,
                        duration: "10m".to_string(),
                        is_paid: false,
                    },
                    Lesson {
                        id: 2,
                        title: self.summary_lesson.to_string(),
                        kind: LessonKind::Pdf,
                        duration: "5m".to_string(),
                        is_paid: false,
                    },
                ],
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_per_language() {
        assert_eq!(
            ARABIC.describe("برمجة", "هندسة برمجيات"),
            "مقرر برمجة ضمن تخصص هندسة برمجيات"
        );
        assert_eq!(
            ENGLISH.describe("Programming", "Software"),
            "Programming course in the Software specialization"
        );
    }

    #[test]
    fn test_placeholder_content_shape() {
        let content = Placeholders::for_language(Language::En).placeholder_content();
        assert_eq!(content.chapters.len(), 1);
        let lessons = &content.chapters[0].lessons;
        assert_eq!(lessons.len(), 2);
        assert_eq!(lessons[0].kind, LessonKind::Video);
        assert_eq!(lessons[1].kind, LessonKind::Pdf);
        assert!(lessons.iter().all(|l| !l.is_paid));
    }
}
