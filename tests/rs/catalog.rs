//! Integration tests for catalog derivation, merging and facets

use edu_catalog::core::catalog::{
    derive_courses_for_specialization, derive_full_catalog, facet_counts, merge_catalogs,
    CatalogDeriver, CatalogFacets, CatalogFilter, DeriveOptions, Facet, DEFAULT_ID_BASE,
};
use edu_catalog::core::dataset::{certificate_levels, three_levels, two_semesters};
use edu_catalog::core::models::{
    CatalogCourse, Curriculum, Department, Language, Level, LocalizedText, Material, Semester,
    Specialization,
};

fn names(prefix: &str, count: usize) -> Vec<LocalizedText> {
    (1..=count)
        .map(|n| LocalizedText::new(format!("{prefix} {n}"), format!("{prefix} EN {n}")))
        .collect()
}

/// Two departments, each with one specialization of one level holding two
/// five-material semesters
fn two_department_tree() -> Curriculum {
    let mut curriculum = Curriculum::default();
    for (dept_id, spec_ar, spec_en, prefix) in [
        ("eng", "هندسة مدنية", "Civil", "CIV"),
        ("biz", "محاسبة", "Accounting", "ACC"),
    ] {
        let mut spec = Specialization::new(
            format!("{dept_id}-spec"),
            LocalizedText::new(spec_ar, spec_en),
        );
        spec.add_level(Level::new(
            "level1",
            LocalizedText::new("المستوى الأول", "Level 1"),
            two_semesters(prefix, &names(spec_en, 10)),
        ));
        let mut dept = Department::new(dept_id, LocalizedText::new(dept_id, dept_id));
        dept.add_specialization(spec);
        curriculum.add_department(dept);
    }
    curriculum
}

fn codes(courses: &[CatalogCourse]) -> Vec<&str> {
    courses.iter().map(|c| c.code.as_str()).collect()
}

#[test]
fn end_to_end_counts() {
    let tree = two_department_tree();
    let options = DeriveOptions::default();

    assert_eq!(derive_full_catalog(&tree, &options).count(), 20);
    assert_eq!(
        derive_courses_for_specialization(&tree, "هندسة مدنية", &options).count(),
        10
    );
}

#[test]
fn full_catalog_follows_tree_order_with_sequential_ids() {
    let tree = two_department_tree();
    let courses: Vec<_> = derive_full_catalog(&tree, &DeriveOptions::default()).collect();

    assert_eq!(courses[0].code, "CIV101");
    assert_eq!(courses[4].code, "CIV105");
    assert_eq!(courses[5].code, "CIV201");
    assert_eq!(courses[10].code, "ACC101");
    let ids: Vec<u64> = courses.iter().map(|c| c.id).collect();
    let expected: Vec<u64> = (DEFAULT_ID_BASE..DEFAULT_ID_BASE + 20).collect();
    assert_eq!(ids, expected);
}

#[test]
fn derivation_is_deterministic() {
    let tree = two_department_tree();
    let options = DeriveOptions::default();

    let first: Vec<_> = derive_courses_for_specialization(&tree, "محاسبة", &options).collect();
    let second: Vec<_> = derive_courses_for_specialization(&tree, "محاسبة", &options).collect();
    assert_eq!(first, second);

    let shifted: Vec<_> =
        derive_courses_for_specialization(&tree, "محاسبة", &options.clone().with_id_base(1))
            .collect();
    assert_eq!(shifted[0].id, 1);
    for (a, b) in first.iter().zip(&shifted) {
        assert_eq!(
            CatalogCourse { id: 0, ..a.clone() },
            CatalogCourse { id: 0, ..b.clone() }
        );
    }
}

#[test]
fn concurrent_derivations_agree() {
    let tree = two_department_tree();
    let options = DeriveOptions::default();
    let expected: Vec<_> = derive_full_catalog(&tree, &options).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| derive_full_catalog(&tree, &options).collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("derivation thread panicked"), expected);
        }
    });
}

#[test]
fn completeness_sums_every_matching_specialization() {
    let mut curriculum = Curriculum::default();
    let first_year = LocalizedText::new("السنة الأولى", "First Year");
    for (dept_id, prefix) in [("it", "IT"), ("eng", "ENG"), ("biz", "BUS")] {
        let mut spec = Specialization::new(format!("{dept_id}-first-year"), first_year.clone());
        for level in certificate_levels(prefix, &names(prefix, 10)) {
            spec.add_level(level);
        }
        let mut dept = Department::new(dept_id, LocalizedText::new(dept_id, dept_id));
        dept.add_specialization(spec);
        curriculum.add_department(dept);
    }

    let courses: Vec<_> =
        derive_courses_for_specialization(&curriculum, "السنة الأولى", &DeriveOptions::default())
            .collect();

    assert_eq!(courses.len(), 60);
    assert_eq!(courses[0].department_id, "it");
    assert_eq!(courses[59].department_id, "biz");
    assert_eq!(courses[0].code, "ITC1101");
}

#[test]
fn unknown_or_english_name_matches_nothing_by_default() {
    let tree = two_department_tree();
    let options = DeriveOptions::default();

    assert_eq!(
        derive_courses_for_specialization(&tree, "Nursing", &options).count(),
        0
    );
    assert_eq!(
        derive_courses_for_specialization(&tree, "Civil", &options).count(),
        0
    );
    assert_eq!(derive_courses_for_specialization(&tree, "", &options).count(), 0);

    let english = options.with_match_language(Language::En);
    assert_eq!(
        derive_courses_for_specialization(&tree, "Civil", &english).count(),
        10
    );
}

#[test]
fn empty_nodes_contribute_nothing() {
    let mut spec = Specialization::new("empty", LocalizedText::new("فارغ", "Empty"));
    spec.add_level(Level::new("no-semesters", LocalizedText::default(), Vec::new()));
    spec.add_level(Level::new(
        "no-materials",
        LocalizedText::default(),
        vec![Semester::new("1", LocalizedText::default(), Vec::new())],
    ));
    let mut dept = Department::new("d", LocalizedText::default());
    dept.add_specialization(spec);
    let tree = Curriculum::new(vec![dept]);

    assert_eq!(
        derive_full_catalog(&tree, &DeriveOptions::default()).count(),
        0
    );
}

#[test]
fn inheritance_propagation() {
    let mut spec = Specialization::new("S1", LocalizedText::new("تخصص تجريبي", "Trial"))
        .with_program_type("diploma");
    spec.add_level(Level::new(
        "L1",
        LocalizedText::new("المستوى الأول", ""),
        vec![Semester::new(
            "SEM1",
            LocalizedText::new("الفصل الأول", ""),
            vec![Material::new(
                "X101",
                LocalizedText::new("مادة تجريبية", ""),
            )],
        )],
    ));
    let mut dept = Department::new("D1", LocalizedText::new("قسم", "Dept"));
    dept.add_specialization(spec);
    let tree = Curriculum::new(vec![dept]);

    let courses: Vec<_> =
        derive_courses_for_specialization(&tree, "تخصص تجريبي", &DeriveOptions::default())
            .collect();

    assert_eq!(courses.len(), 1);
    let course = &courses[0];
    assert_eq!(course.program_type.as_deref(), Some("diploma"));
    assert_eq!(course.level_label.as_deref(), Some("المستوى الأول"));
    assert_eq!(course.semester_label.as_deref(), Some("الفصل الأول"));
    assert_eq!(course.department_id, "D1");
}

#[test]
fn program_type_defaults_to_bachelor() {
    let tree = two_department_tree();
    let courses: Vec<_> = derive_full_catalog(&tree, &DeriveOptions::default()).collect();
    assert!(courses
        .iter()
        .all(|c| c.program_type.as_deref() == Some("bachelor")));
}

#[test]
fn merge_idempotence() {
    let tree = two_department_tree();
    let catalog: Vec<_> = derive_full_catalog(&tree, &DeriveOptions::default()).collect();

    let merged = merge_catalogs(catalog.clone(), catalog.clone());

    assert_eq!(merged, catalog);
}

#[test]
fn merge_precedence() {
    let primary = vec![CatalogCourse::new(1, "A", "X")];
    let secondary = vec![CatalogCourse::new(2, "A", "Y"), CatalogCourse::new(3, "B", "Z")];

    let merged = merge_catalogs(primary, secondary);

    assert_eq!(codes(&merged), ["A", "B"]);
    assert_eq!(merged[0].title, "X");
    assert_eq!(merged[1].title, "Z");
}

#[test]
fn deriver_wraps_free_functions() {
    let tree = two_department_tree();
    let options = DeriveOptions::default()
        .with_language(Language::En)
        .with_placeholder_content(true);
    let deriver = CatalogDeriver::with_options(&tree, options.clone());

    let scoped: Vec<_> = deriver.for_specialization("محاسبة").collect();
    let direct: Vec<_> = derive_courses_for_specialization(&tree, "محاسبة", &options).collect();
    assert_eq!(scoped, direct);
    assert_eq!(scoped[0].title, "Accounting EN 1");
    assert_eq!(scoped[0].specialization, "Accounting");
    assert!(scoped[0].content.is_some());

    assert_eq!(deriver.full_catalog().count(), 20);
}

#[test]
fn three_level_layout_derives_thirty_courses() {
    let mut spec = Specialization::new("se", LocalizedText::new("هندسة برمجيات", "Software"));
    for level in three_levels("ITSE", &names("Course", 10)) {
        spec.add_level(level);
    }
    let mut dept = Department::new("it", LocalizedText::new("تقنية", "IT"));
    dept.add_specialization(spec);
    let tree = Curriculum::new(vec![dept]);

    let courses: Vec<_> = derive_full_catalog(&tree, &DeriveOptions::default()).collect();

    assert_eq!(courses.len(), 30);
    assert_eq!(courses[0].code, "ITSED101");
    assert_eq!(courses[29].code, "ITSEB205");
    assert_eq!(courses[29].level_label.as_deref(), Some("بكالوريوس"));
    assert_eq!(courses[29].semester_label.as_deref(), Some("الفصل الثاني"));
}

#[test]
fn facets_follow_first_appearance() {
    let tree = two_department_tree();
    let courses: Vec<_> = derive_full_catalog(&tree, &DeriveOptions::default()).collect();

    let facets = CatalogFacets::from_courses(&courses);
    assert_eq!(facets.values(Facet::Specialization), ["هندسة مدنية", "محاسبة"]);
    assert_eq!(facets.values(Facet::ProgramType), ["bachelor"]);
    assert_eq!(facets.values(Facet::Semester), ["الفصل الأول", "الفصل الثاني"]);

    let counts = facet_counts(&courses, Facet::Specialization);
    assert_eq!(counts[0].value, "هندسة مدنية");
    assert_eq!(counts[0].count, 10);
}

#[test]
fn filter_narrows_derived_catalog() {
    let tree = two_department_tree();
    let courses: Vec<_> = derive_full_catalog(&tree, &DeriveOptions::default()).collect();

    let filtered = CatalogFilter::new()
        .with_facet(Facet::Specialization, "محاسبة")
        .with_facet(Facet::Semester, "الفصل الثاني")
        .apply(courses.clone());
    assert_eq!(codes(&filtered), ["ACC201", "ACC202", "ACC203", "ACC204", "ACC205"]);

    let searched = CatalogFilter::new().with_search("civ10").apply(courses);
    assert_eq!(searched.len(), 5);
}
