//! Curriculum datasets: file loading and standard layout builders

pub mod layout;
pub mod loader;

pub use layout::{certificate_levels, one_semester, three_levels, two_semesters};
pub use loader::{
    load_courses, load_curricula, load_curriculum, parse_courses, parse_curriculum, DatasetFormat,
};
