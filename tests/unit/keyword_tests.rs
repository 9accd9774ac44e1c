use jobfit::job::JobDescription;
use jobfit::job::keywords::rank_keywords;
use jobfit::resume::Resume;
use jobfit::scoring::{keyword_coverage, resume_terms};
use jobfit::taxonomy::SkillTaxonomy;
use jobfit::test_utils::fixtures::{SAMPLE_JOB, SAMPLE_RESUME};
use jobfit::test_utils::{TestCase, run_table_tests};

#[test]
fn rank_keywords_table() -> Result<(), String> {
    let cases = vec![
        TestCase {
            name: "stopwords_never_rank",
            input: "Looking for a strong candidate with excellent skills",
            expected: Vec::<String>::new(),
            should_panic: false,
        },
        TestCase {
            name: "phrases_survive_punctuation",
            input: "Kafka, Kafka streams. Kafka streams tuning",
            expected: vec![
                "kafka streams tuning".to_string(),
                "kafka streams".to_string(),
                "kafka".to_string(),
            ],
            should_panic: false,
        },
        TestCase {
            name: "ties_break_lexicographically",
            input: "zeta keyword. alpha keyword",
            expected: vec!["alpha keyword".to_string(), "zeta keyword".to_string()],
            should_panic: false,
        },
    ];

    run_table_tests(cases, |text| rank_keywords(text, 20, 3))?;
    Ok(())
}

#[test]
fn rank_keywords_honors_top_k() {
    let text = "rust tooling. zig compilers. nim macros. lua scripting. ocaml parsers";
    assert_eq!(rank_keywords(text, 2, 3).len(), 2);
    assert!(rank_keywords(text, 0, 3).is_empty());
}

#[test]
fn coverage_of_identical_documents_is_total() {
    let taxonomy = SkillTaxonomy::builtin().unwrap();
    let resume = Resume::parse(SAMPLE_RESUME, &taxonomy);
    let job = JobDescription::parse(SAMPLE_RESUME, &taxonomy, 20, 3);

    let terms = resume_terms(&resume, 3);
    let score = keyword_coverage(&terms, &job);
    assert!((score - 1.0).abs() < 1e-6, "self coverage was {score}");
}

#[test]
fn coverage_of_disjoint_documents_is_zero() {
    let taxonomy = SkillTaxonomy::builtin().unwrap();
    let resume = Resume::parse(
        "Watercolor portraiture, oil painting, gallery curation and framing.",
        &taxonomy,
    );
    let job = JobDescription::parse(SAMPLE_JOB, &taxonomy, 20, 3);

    let terms = resume_terms(&resume, 3);
    assert_eq!(keyword_coverage(&terms, &job), 0.0);
}

#[test]
fn coverage_counts_skill_aliases_through_canonical_names() {
    let taxonomy = SkillTaxonomy::builtin().unwrap();
    // resume says k8s, job wants kubernetes: both canonicalize
    let resume = Resume::parse(
        "SKILLS\nk8s cluster operations and deployment automation tooling",
        &taxonomy,
    );
    let job = JobDescription::parse(
        "Requirements:\n- Kubernetes in production",
        &taxonomy,
        20,
        3,
    );

    assert!(resume.skill_set.contains("kubernetes"));
    assert!(job.tech_stack.contains("kubernetes"));
    let terms = resume_terms(&resume, 3);
    assert!(keyword_coverage(&terms, &job) > 0.0);
}
