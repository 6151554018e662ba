//! Keyed merge of two catalogs

use crate::core::models::CatalogCourse;
use std::collections::{HashMap, HashSet};

/// Merge `primary` and `secondary` into one catalog keyed by course code
///
/// Entries are visited primary first, then secondary, each in order. The first
/// entry seen for a code is kept and later ones are dropped, so the result
/// preserves insertion order. Courses with a blank code are keyed as `C{id}`.
///
/// Codes are treated as global keys: two distinct materials that share a code in
/// different specializations collapse into one entry.
#[must_use]
pub fn merge_catalogs<P, S>(primary: P, secondary: S) -> Vec<CatalogCourse>
where
    P: IntoIterator<Item = CatalogCourse>,
    S: IntoIterator<Item = CatalogCourse>,
{
    let mut seen = HashSet::new();
    primary
        .into_iter()
        .chain(secondary)
        .filter(|course| seen.insert(course.merge_key()))
        .collect()
}

/// Merge keys appearing more than once in `courses`, in order of their second appearance
///
/// Used to report which entries a merge would collapse.
#[must_use]
pub fn duplicate_codes<'a, I>(courses: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a CatalogCourse>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut duplicates = Vec::new();
    for course in courses {
        let key = course.merge_key();
        let count = counts.entry(key.clone()).or_insert(0);
        *count += 1;
        if *count == 2 {
            duplicates.push(key);
        }
    }
    duplicates
}
