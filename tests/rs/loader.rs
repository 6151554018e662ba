//! Integration tests for dataset loading against the bundled samples

use edu_catalog::core::catalog::{
    derive_courses_for_specialization, derive_full_catalog, duplicate_codes, merge_catalogs,
    DeriveOptions,
};
use edu_catalog::core::dataset::{load_courses, load_curricula, load_curriculum};
use edu_catalog::core::error::CatalogError;
use std::fs;
use tempfile::TempDir;

const SAMPLE_CURRICULUM: &str = "samples/curriculum/departments.json";
const SAMPLE_BASE_COURSES: &str = "samples/curriculum/base_courses.json";

#[test]
fn test_load_sample_curriculum() {
    let curriculum = load_curriculum(SAMPLE_CURRICULUM).expect("sample curriculum should load");

    let ids: Vec<&str> = curriculum.departments.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, ["foundation", "it", "engineering", "business"]);
    assert_eq!(curriculum.material_count(), 270);
    assert!(curriculum.validate().is_ok());
}

#[test]
fn test_sample_full_catalog_matches_material_count() {
    let curriculum = load_curriculum(SAMPLE_CURRICULUM).expect("sample curriculum should load");
    let courses: Vec<_> = derive_full_catalog(&curriculum, &DeriveOptions::default()).collect();

    assert_eq!(courses.len(), curriculum.material_count());
    assert_eq!(courses[0].code, "EN1101");
    assert_eq!(courses[0].department_id, "foundation");
    assert!(duplicate_codes(&courses).is_empty());
}

#[test]
fn test_first_year_spans_three_departments() {
    let curriculum = load_curriculum(SAMPLE_CURRICULUM).expect("sample curriculum should load");
    let courses: Vec<_> =
        derive_courses_for_specialization(&curriculum, "السنة الأولى", &DeriveOptions::default())
            .collect();

    assert_eq!(courses.len(), 30);
    let mut departments: Vec<&str> = courses.iter().map(|c| c.department_id.as_str()).collect();
    departments.dedup();
    assert_eq!(departments, ["it", "engineering", "business"]);
}

#[test]
fn test_sample_base_courses_take_precedence() {
    let curriculum = load_curriculum(SAMPLE_CURRICULUM).expect("sample curriculum should load");
    let base = load_courses(SAMPLE_BASE_COURSES).expect("sample base courses should load");
    let derived: Vec<_> = derive_full_catalog(&curriculum, &DeriveOptions::default()).collect();

    let collisions = duplicate_codes(base.iter().chain(&derived));
    assert_eq!(collisions, ["ITSEB101"]);

    let merged = merge_catalogs(base.clone(), derived.clone());
    assert_eq!(merged.len(), base.len() + derived.len() - 1);
    let python = merged
        .iter()
        .find(|c| c.code == "ITSEB101")
        .expect("colliding code should survive the merge");
    assert_eq!(python.id, 1);
    assert_eq!(python.hours, 4);
}

#[test]
fn test_base_course_defaults_apply() {
    let base = load_courses(SAMPLE_BASE_COURSES).expect("sample base courses should load");
    let writing = base
        .iter()
        .find(|c| c.code == "GEN110")
        .expect("GEN110 should be present");

    assert_eq!(writing.hours, 3);
    assert_eq!(writing.emoji, "📘");
    assert!(writing.program_type.is_none());
}

#[test]
fn test_load_toml_curriculum_and_concatenate() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let toml_path = dir.path().join("extra.toml");
    fs::write(
        &toml_path,
        r#"
[[departments]]
id = "health"
name = { ar = "الصحة", en = "Health" }

[[departments.specializations]]
id = "nursing"
name = { ar = "تمريض", en = "Nursing" }
programType = "diploma"

[[departments.specializations.levels]]
id = "diploma"
name = { ar = "دبلوم", en = "Diploma" }

[[departments.specializations.levels.semesters]]
id = "1"
name = { ar = "الفصل الأول", en = "Semester 1" }
materials = [
    { code = "NUR101", name = { ar = "أساسيات التمريض", en = "Nursing Basics" }, hours = 4 },
]
"#,
    )
    .expect("Failed to write TOML fixture");

    let combined = load_curricula([SAMPLE_CURRICULUM.into(), toml_path])
        .expect("JSON and TOML curricula should combine");

    assert_eq!(combined.departments.len(), 5);
    assert_eq!(combined.material_count(), 271);

    let nursing: Vec<_> =
        derive_courses_for_specialization(&combined, "تمريض", &DeriveOptions::default()).collect();
    assert_eq!(nursing.len(), 1);
    assert_eq!(nursing[0].program_type.as_deref(), Some("diploma"));
    assert_eq!(nursing[0].hours, 4);
}

#[test]
fn test_bare_array_with_unknown_extension() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("departments.data");
    fs::write(
        &path,
        r#"[{"id": "d", "name": {"ar": "قسم", "en": ""}, "specializations": []}]"#,
    )
    .expect("Failed to write fixture");

    let curriculum = load_curriculum(&path).expect("bare array should load");
    assert_eq!(curriculum.departments.len(), 1);
    assert_eq!(curriculum.material_count(), 0);
}

#[test]
fn test_unrecognized_content_is_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("notes.txt");
    fs::write(&path, "this is not a curriculum = [").expect("Failed to write fixture");

    let err = load_curriculum(&path).expect_err("garbage should not load");
    assert!(matches!(err, CatalogError::UnsupportedFormat(_)));
}

#[test]
fn test_malformed_json_with_unknown_extension_keeps_position() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("departments.data");
    fs::write(&path, "{\n  \"departments\": [\n    {\"id\": \"it\",}\n  ]\n}\n")
        .expect("Failed to write fixture");

    let err = load_curriculum(&path).expect_err("trailing comma should not load");
    match err {
        CatalogError::Json(json_err) => assert_eq!(json_err.line(), 3),
        other => panic!("expected a JSON error, got {other:?}"),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_curriculum("samples/curriculum/does-not-exist.json")
        .expect_err("missing file should fail");
    assert!(matches!(err, CatalogError::Io(_)));
}
