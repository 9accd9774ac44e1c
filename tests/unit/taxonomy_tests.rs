use jobfit::taxonomy::{SkillCategory, SkillTaxonomy};
use jobfit::test_utils::fixtures::UnitTestFixture;
use jobfit::test_utils::{TestCase, run_table_tests};

#[test]
fn builtin_taxonomy_loads_and_resolves() {
    let taxonomy = SkillTaxonomy::builtin().unwrap();
    assert!(taxonomy.len() >= 50);
    assert_eq!(taxonomy.canonical("Python3"), Some("python"));
    assert_eq!(taxonomy.canonical("K8s"), Some("kubernetes"));
    assert_eq!(taxonomy.category_of("aws"), Some(SkillCategory::CloudDevops));
    assert_eq!(taxonomy.canonical("not-a-skill"), None);
}

#[test]
fn scan_respects_word_boundaries_table() -> Result<(), String> {
    let cases = vec![
        TestCase {
            name: "go_matches_standalone",
            input: "We use Go and Rust in services",
            expected: true,
            should_panic: false,
        },
        TestCase {
            name: "go_not_inside_django",
            input: "Senior Django developer",
            expected: false,
            should_panic: false,
        },
        TestCase {
            name: "go_not_inside_algorithms",
            input: "strong algorithms background",
            expected: false,
            should_panic: false,
        },
    ];

    run_table_tests(cases, |text| {
        let taxonomy = SkillTaxonomy::builtin().unwrap();
        taxonomy.scan(text).contains("go")
    })?;
    Ok(())
}

#[test]
fn load_skips_malformed_entries() {
    let fixture = UnitTestFixture::new();
    let path = fixture.create_file(
        "mixed.json",
        r#"[
            {"name": "python", "category": "hard"},
            {"name": "rust"},
            {"category": "soft"},
            {"name": "docker", "category": "cloud_devops", "aliases": ["containers"]}
        ]"#,
    );

    let taxonomy = SkillTaxonomy::load(&path).unwrap();
    assert_eq!(taxonomy.len(), 2);
    assert_eq!(taxonomy.canonical("containers"), Some("docker"));
}

#[test]
fn load_rejects_unusable_files() {
    let fixture = UnitTestFixture::new();

    let not_array = fixture.create_file("object.json", r#"{"name": "python"}"#);
    assert!(SkillTaxonomy::load(&not_array).is_err());

    let all_bad = fixture.create_file("bad.json", r#"[{"category": "hard"}]"#);
    assert!(SkillTaxonomy::load(&all_bad).is_err());

    assert!(SkillTaxonomy::load(fixture.data_path.join("absent.json").as_path()).is_err());
}

#[test]
fn scan_category_filters() {
    let taxonomy = SkillTaxonomy::builtin().unwrap();
    let cloud = taxonomy.scan_category(
        "Python services deployed with Docker to AWS",
        SkillCategory::CloudDevops,
    );
    assert!(cloud.contains("docker"));
    assert!(cloud.contains("aws"));
    assert!(!cloud.contains("python"));
}
