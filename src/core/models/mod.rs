//! Data models for `edu-catalog`

pub mod catalog_course;
pub mod curriculum;
pub mod localized;

pub use catalog_course::{CatalogCourse, Chapter, CourseContent, Lesson, LessonKind};
pub use curriculum::{Curriculum, Department, Level, Material, Semester, Specialization};
pub use localized::{first_non_blank, Language, LocalizedText};
