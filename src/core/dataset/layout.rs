//! Builders for the standard level and semester shapes
//!
//! Curriculum authors rarely write every semester by hand. These helpers expand
//! a prefix plus a list of material names into the recurring layouts, numbering
//! codes as `{prefix}{semester}0{n}` with `n` starting at 1.

use crate::core::models::{Level, LocalizedText, Material, Semester};

/// Materials per semester in the two-semester layout
pub const MATERIALS_PER_SEMESTER: usize = 5;

fn semester_name(number: usize) -> LocalizedText {
    match number {
        1 => LocalizedText::new("الفصل الأول", "Semester 1"),
        2 => LocalizedText::new("الفصل الثاني", "Semester 2"),
        n => LocalizedText::new(format!("الفصل {n}"), format!("Semester {n}")),
    }
}

fn semester(prefix: &str, number: usize, names: &[LocalizedText]) -> Semester {
    let materials = names
        .iter()
        .enumerate()
        .map(|(idx, name)| Material::new(format!("{prefix}{number}0{}", idx + 1), name.clone()))
        .collect();
    Semester::new(number.to_string(), semester_name(number), materials)
}

/// A single semester `"1"` holding every name
#[must_use]
pub fn one_semester(prefix: &str, names: &[LocalizedText]) -> Vec<Semester> {
    vec![semester(prefix, 1, names)]
}

/// Semester `"1"` with the first five names and semester `"2"` with the next five
///
/// Names beyond the tenth are ignored. A short list leaves the second semester
/// (or both) empty.
#[must_use]
pub fn two_semesters(prefix: &str, names: &[LocalizedText]) -> Vec<Semester> {
    let split = names.len().min(MATERIALS_PER_SEMESTER);
    let end = names.len().min(2 * MATERIALS_PER_SEMESTER);
    vec![
        semester(prefix, 1, &names[..split]),
        semester(prefix, 2, &names[split..end]),
    ]
}

/// Diploma, higher diploma and bachelor levels, each with [`two_semesters`]
///
/// Level prefixes are `{prefix}D`, `{prefix}H` and `{prefix}B`.
#[must_use]
pub fn three_levels(prefix: &str, names: &[LocalizedText]) -> Vec<Level> {
    [
        ("diploma", "دبلوم", "Diploma", 'D'),
        ("higher-diploma", "دبلوم عالي", "Higher Diploma", 'H'),
        ("bachelor", "بكالوريوس", "Bachelor", 'B'),
    ]
    .into_iter()
    .map(|(id, ar, en, suffix)| {
        Level::new(
            id,
            LocalizedText::new(ar, en),
            two_semesters(&format!("{prefix}{suffix}"), names),
        )
    })
    .collect()
}

/// Two certificate levels, each with [`one_semester`]
///
/// Level prefixes are `{prefix}C1` and `{prefix}C2`.
#[must_use]
pub fn certificate_levels(prefix: &str, names: &[LocalizedText]) -> Vec<Level> {
    (1..=2)
        .map(|n| {
            Level::new(
                format!("cert{n}"),
                LocalizedText::new(format!("سرتفكيت {n}"), format!("Certificate {n}")),
                one_semester(&format!("{prefix}C{n}"), names),
            )
        })
        .collect()
}
