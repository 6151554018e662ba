//! Curriculum tree model
//!
//! Department → Specialization → Level → Semester → Material. The tree is read-only
//! input to the catalog deriver; every child list defaults to empty so that
//! partially populated datasets still load.

use super::localized::{Language, LocalizedText};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The full curriculum dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Curriculum {
    /// Departments in dataset order
    #[serde(default)]
    pub departments: Vec<Department>,
}

/// An academic department
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Department {
    /// Department identifier (e.g., "it", "engineering")
    #[serde(default)]
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: LocalizedText,

    /// Specializations offered by the department
    #[serde(default)]
    pub specializations: Vec<Specialization>,
}

/// A specialization (major/track) within a department
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specialization {
    /// Identifier, unique within its department
    #[serde(default)]
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: LocalizedText,

    /// Qualification track (e.g., "diploma", "bachelor")
    #[serde(default, alias = "degree", skip_serializing_if = "Option::is_none")]
    pub program_type: Option<String>,

    /// Levels in study order
    #[serde(default)]
    pub levels: Vec<Level>,
}

/// A level (year or certificate stage) within a specialization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Level identifier (e.g., "diploma", "cert1")
    #[serde(default)]
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: LocalizedText,

    /// Plain-text label used when `name` is blank
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Secondary fallback after `label`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Semesters in order
    #[serde(default)]
    pub semesters: Vec<Semester>,
}

/// A semester within a level
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    /// Semester identifier (e.g., "1", "2")
    #[serde(default)]
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: LocalizedText,

    /// Plain-text label used when `name` is blank
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Secondary fallback after `label`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Materials taught in this semester
    #[serde(default)]
    pub materials: Vec<Material>,
}

/// A single gradeable subject, the leaf of the tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    /// Course code, unique within its semester only (e.g., "ITSED101")
    #[serde(default)]
    pub code: String,

    /// Display name
    #[serde(default)]
    pub name: LocalizedText,

    /// Plain-text title used when `name` is blank
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// External resource link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Credit hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<u32>,

    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Teacher shown for the course when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_teacher: Option<String>,
}

impl Curriculum {
    /// Create a curriculum from its departments
    #[must_use]
    pub const fn new(departments: Vec<Department>) -> Self {
        Self { departments }
    }

    /// Add a department
    pub fn add_department(&mut self, department: Department) {
        self.departments.push(department);
    }

    /// Get a department by its id
    #[must_use]
    pub fn department(&self, id: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.id == id)
    }

    /// Get a specialization by department id and specialization id
    #[must_use]
    pub fn specialization(&self, department_id: &str, id: &str) -> Option<&Specialization> {
        self.department(department_id)
            .and_then(|d| d.specializations.iter().find(|s| s.id == id))
    }

    /// Iterate all specializations with their department, in dataset order
    pub fn specializations(&self) -> impl Iterator<Item = (&Department, &Specialization)> {
        self.departments
            .iter()
            .flat_map(|d| d.specializations.iter().map(move |s| (d, s)))
    }

    /// Distinct specialization names in `lang`, first appearance first
    ///
    /// Blank names are skipped. No fallback to the other language is applied,
    /// so the result lists exactly the strings specialization matching compares against.
    #[must_use]
    pub fn specialization_names(&self, lang: Language) -> Vec<String> {
        let mut seen = HashSet::new();
        self.specializations()
            .filter_map(|(_, s)| s.name.get(lang))
            .filter(|name| seen.insert(*name))
            .map(str::to_string)
            .collect()
    }

    /// Total number of materials across the whole tree
    #[must_use]
    pub fn material_count(&self) -> usize {
        self.specializations()
            .map(|(_, s)| s.material_count())
            .sum()
    }

    /// Validate identifier uniqueness
    ///
    /// Checks department ids, specialization ids within each department, and
    /// material codes within each semester. Codes repeating across semesters or
    /// specializations are allowed.
    ///
    /// # Errors
    /// Returns `Err` with one message per duplicate found
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();
        let mut department_ids = HashSet::new();

        for department in &self.departments {
            if !department_ids.insert(department.id.as_str()) {
                problems.push(format!("Duplicate department id '{}'", department.id));
            }

            let mut specialization_ids = HashSet::new();
            for spec in &department.specializations {
                if !specialization_ids.insert(spec.id.as_str()) {
                    problems.push(format!(
                        "Department '{}': duplicate specialization id '{}'",
                        department.id, spec.id
                    ));
                }

                for level in &spec.levels {
                    for semester in &level.semesters {
                        let mut codes = HashSet::new();
                        for material in &semester.materials {
                            if !material.code.is_empty() && !codes.insert(material.code.as_str())
                            {
                                problems.push(format!(
                                    "{}/{}/{}/{}: duplicate material code '{}'",
                                    department.id, spec.id, level.id, semester.id, material.code
                                ));
                            }
                        }
                    }
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}

impl Department {
    /// Create an empty department
    #[must_use]
    pub fn new(id: impl Into<String>, name: LocalizedText) -> Self {
        Self {
            id: id.into(),
            name,
            specializations: Vec::new(),
        }
    }

    /// Add a specialization
    pub fn add_specialization(&mut self, specialization: Specialization) {
        self.specializations.push(specialization);
    }
}

impl Specialization {
    /// Create an empty specialization with no explicit program type
    #[must_use]
    pub fn new(id: impl Into<String>, name: LocalizedText) -> Self {
        Self {
            id: id.into(),
            name,
            program_type: None,
            levels: Vec::new(),
        }
    }

    /// Set the program type
    #[must_use]
    pub fn with_program_type(mut self, program_type: impl Into<String>) -> Self {
        self.program_type = Some(program_type.into());
        self
    }

    /// Add a level
    pub fn add_level(&mut self, level: Level) {
        self.levels.push(level);
    }

    /// Number of materials under this specialization
    #[must_use]
    pub fn material_count(&self) -> usize {
        self.levels
            .iter()
            .flat_map(|l| &l.semesters)
            .map(|s| s.materials.len())
            .sum()
    }
}

impl Level {
    /// Create a level from its semesters
    #[must_use]
    pub fn new(id: impl Into<String>, name: LocalizedText, semesters: Vec<Semester>) -> Self {
        Self {
            id: id.into(),
            name,
            label: None,
            title: None,
            semesters,
        }
    }
}

impl Semester {
    /// Create a semester from its materials
    #[must_use]
    pub fn new(id: impl Into<String>, name: LocalizedText, materials: Vec<Material>) -> Self {
        Self {
            id: id.into(),
            name,
            label: None,
            title: None,
            materials,
        }
    }
}

impl Material {
    /// Create a material with only a code and a name
    #[must_use]
    pub fn new(code: impl Into<String>, name: LocalizedText) -> Self {
        Self {
            code: code.into(),
            name,
            ..Self::default()
        }
    }
}
