//! Catalog derivation
//!
//! Flattens the curriculum tree into [`CatalogCourse`] records. Traversal order is
//! Departments → Specializations → Levels → Semesters → Materials, each in dataset
//! order; that order fixes both the output order and the surrogate ids.
//!
//! The id counter lives inside each returned iterator and starts at
//! [`DeriveOptions::id_base`], so repeated or concurrent derivations over the same
//! tree always produce identical output. Ids never wrap: derivation stops once
//! `u64::MAX` has been handed out.

pub mod facets;
pub mod filter;
pub mod labels;
pub mod merge;

pub use facets::{facet_counts, CatalogFacets, Facet, FacetCount};
pub use filter::CatalogFilter;
pub use labels::Placeholders;
pub use merge::{duplicate_codes, merge_catalogs};

use crate::core::models::catalog_course::{DEFAULT_EMOJI, DEFAULT_HOURS};
use crate::core::models::{
    first_non_blank, CatalogCourse, Curriculum, Department, Language, Level, Material, Semester,
    Specialization,
};

/// First surrogate id handed out; kept high so derived ids do not collide with
/// hand-authored course ids in a merged view.
pub const DEFAULT_ID_BASE: u64 = 10_000;

/// Program type assumed when a specialization does not declare one
pub const DEFAULT_PROGRAM_TYPE: &str = "bachelor";

/// Knobs for one derivation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeriveOptions {
    /// Id assigned to the first emitted course
    pub id_base: u64,
    /// Language used for titles and facet labels
    pub language: Language,
    /// Language whose specialization name is compared against the requested name.
    /// Matching is exact and never falls back to the other language.
    pub match_language: Language,
    /// Program type used when the specialization has none
    pub default_program_type: String,
    /// Attach a placeholder chapter with two lessons to every course
    pub with_placeholder_content: bool,
}

impl Default for DeriveOptions {
    fn default() -> Self {
        Self {
            id_base: DEFAULT_ID_BASE,
            language: Language::Ar,
            match_language: Language::Ar,
            default_program_type: DEFAULT_PROGRAM_TYPE.to_string(),
            with_placeholder_content: false,
        }
    }
}

impl DeriveOptions {
    /// Set the starting id
    #[must_use]
    pub fn with_id_base(mut self, id_base: u64) -> Self {
        self.id_base = id_base;
        self
    }

    /// Set the label language
    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Set the specialization matching language
    #[must_use]
    pub fn with_match_language(mut self, language: Language) -> Self {
        self.match_language = language;
        self
    }

    /// Enable or disable placeholder content
    #[must_use]
    pub fn with_placeholder_content(mut self, enabled: bool) -> Self {
        self.with_placeholder_content = enabled;
        self
    }
}

/// Ancestors of one material on its path from the root
#[derive(Debug, Clone, Copy)]
struct MaterialPath<'a> {
    department: &'a Department,
    specialization: &'a Specialization,
    level: &'a Level,
    semester: &'a Semester,
    material: &'a Material,
}

/// A curriculum paired with derivation options
#[derive(Debug, Clone)]
pub struct CatalogDeriver<'a> {
    curriculum: &'a Curriculum,
    options: DeriveOptions,
}

impl<'a> CatalogDeriver<'a> {
    /// Create a deriver with default options
    #[must_use]
    pub fn new(curriculum: &'a Curriculum) -> Self {
        Self::with_options(curriculum, DeriveOptions::default())
    }

    /// Create a deriver with explicit options
    #[must_use]
    pub const fn with_options(curriculum: &'a Curriculum, options: DeriveOptions) -> Self {
        Self {
            curriculum,
            options,
        }
    }

    /// Options in effect
    #[must_use]
    pub const fn options(&self) -> &DeriveOptions {
        &self.options
    }

    /// Courses under every specialization whose name in the match language equals `name`
    pub fn for_specialization<'s>(
        &'s self,
        name: &'s str,
    ) -> impl Iterator<Item = CatalogCourse> + 's {
        derive_courses_for_specialization(self.curriculum, name, &self.options)
    }

    /// Courses under every specialization in the curriculum
    pub fn full_catalog(&self) -> impl Iterator<Item = CatalogCourse> + '_ {
        derive_full_catalog(self.curriculum, &self.options)
    }
}

/// Derive the courses of every specialization named `name` in `options.match_language`
///
/// Specializations whose name differs are skipped with their whole subtree. A
/// name that matches nothing, including a blank name, yields an empty iterator.
pub fn derive_courses_for_specialization<'a>(
    curriculum: &'a Curriculum,
    name: &'a str,
    options: &'a DeriveOptions,
) -> impl Iterator<Item = CatalogCourse> + 'a {
    let lang = options.match_language;
    let wanted = (!name.trim().is_empty()).then_some(name);
    derive_where(curriculum, options, Scope::Specialization, move |spec| {
        wanted.is_some_and(|wanted| spec.name.exact(lang) == wanted)
    })
}

/// Derive the courses of the whole curriculum
pub fn derive_full_catalog<'a>(
    curriculum: &'a Curriculum,
    options: &'a DeriveOptions,
) -> impl Iterator<Item = CatalogCourse> + 'a {
    derive_where(curriculum, options, Scope::Catalog, |_| true)
}

/// Which derivation a course comes from; picks the teacher placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Specialization,
    Catalog,
}

fn derive_where<'a, F>(
    curriculum: &'a Curriculum,
    options: &'a DeriveOptions,
    scope: Scope,
    include: F,
) -> impl Iterator<Item = CatalogCourse> + 'a
where
    F: Fn(&Specialization) -> bool + 'a,
{
    let placeholders = Placeholders::for_language(options.language);

    curriculum
        .specializations()
        .filter(move |&(_, spec)| include(spec))
        .flat_map(|(department, specialization)| {
            specialization.levels.iter().flat_map(move |level| {
                level.semesters.iter().flat_map(move |semester| {
                    semester.materials.iter().map(move |material| MaterialPath {
                        department,
                        specialization,
                        level,
                        semester,
                        material,
                    })
                })
            })
        })
        .zip(options.id_base..=u64::MAX)
        .map(move |(path, id)| build_course(&path, id, options, &placeholders, scope))
}

/// Specialization label: own name, then the department's name, then a placeholder
fn specialization_label(path: &MaterialPath<'_>, lang: Language, placeholders: &Placeholders) -> String {
    first_non_blank([
        path.specialization.name.resolve(lang),
        path.department.name.resolve(lang),
    ])
    .unwrap_or(placeholders.specialization)
    .to_string()
}

/// Level label: `name → label → title → placeholder`
#[must_use]
pub fn level_label(level: &Level, lang: Language) -> String {
    first_non_blank([
        level.name.resolve(lang),
        level.label.as_deref(),
        level.title.as_deref(),
    ])
    .unwrap_or(Placeholders::for_language(lang).level)
    .to_string()
}

/// Semester label: `name → label → title → placeholder`
#[must_use]
pub fn semester_label(semester: &Semester, lang: Language) -> String {
    first_non_blank([
        semester.name.resolve(lang),
        semester.label.as_deref(),
        semester.title.as_deref(),
    ])
    .unwrap_or(Placeholders::for_language(lang).semester)
    .to_string()
}

/// Material title: `name → title → code → placeholder`
///
/// Used by both scoped and full-catalog derivation, so an unnamed material is
/// titled by its code in either view.
#[must_use]
pub fn material_title(material: &Material, lang: Language) -> String {
    first_non_blank([
        material.name.resolve(lang),
        material.title.as_deref(),
        Some(material.code.as_str()),
    ])
    .unwrap_or(Placeholders::for_language(lang).untitled_material)
    .to_string()
}

fn build_course(
    path: &MaterialPath<'_>,
    id: u64,
    options: &DeriveOptions,
    placeholders: &Placeholders,
    scope: Scope,
) -> CatalogCourse {
    let lang = options.language;
    let material = path.material;

    let specialization = specialization_label(path, lang, placeholders);
    let title = material_title(material, lang);
    let code = if material.code.trim().is_empty() {
        format!("MAT{id}")
    } else {
        material.code.clone()
    };
    let description = first_non_blank([material.description.as_deref()])
        .map_or_else(|| placeholders.describe(&title, &specialization), str::to_string);
    let teacher = first_non_blank([material.default_teacher.as_deref()])
        .unwrap_or(match scope {
            Scope::Specialization => placeholders.specialization_teacher,
            Scope::Catalog => placeholders.catalog_teacher,
        })
        .to_string();
    let program_type = first_non_blank([path.specialization.program_type.as_deref()])
        .unwrap_or(options.default_program_type.as_str())
        .to_string();

    CatalogCourse {
        id,
        code,
        title,
        description,
        teacher,
        specialization,
        department_id: path.department.id.clone(),
        emoji: DEFAULT_EMOJI.to_string(),
        hours: material.hours.unwrap_or(DEFAULT_HOURS),
        program_type: Some(program_type),
        level_label: Some(level_label(path.level, lang)),
        semester_label: Some(semester_label(path.semester, lang)),
        content: options
            .with_placeholder_content
            .then(|| placeholders.placeholder_content()),
    }
}
