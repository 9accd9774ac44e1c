use std::sync::Arc;

use anyhow::Result;

use jobfit::pipeline::{Matcher, MatcherOptions};
use jobfit::scoring::HashEmbedder;
use jobfit::taxonomy::SkillTaxonomy;
use jobfit::test_utils::fixtures::{SAMPLE_JOB, SAMPLE_RESUME};

fn matcher() -> Matcher {
    Matcher::new(
        Arc::new(SkillTaxonomy::builtin().unwrap()),
        Arc::new(HashEmbedder::default()),
        MatcherOptions::default(),
    )
}

#[test]
fn report_serializes_flat() -> Result<()> {
    let report = matcher().analyze(SAMPLE_RESUME, SAMPLE_JOB)?;
    let json = serde_json::to_value(&report)?;

    // scores and gaps flatten into the top-level object
    assert!(json["semantic_score"].is_number());
    assert!(json["keyword_score"].is_number());
    assert!(json["final_score"].is_number());
    assert!(json["missing_hard"].is_array());
    assert!(json["missing_soft"].is_array());
    assert!(json["missing_cloud"].is_array());
    assert!(json["matched_skills"].is_array());
    assert!(json["tips"].is_array());
    assert!(json["top_matches"].is_array());
    assert!(json.get("scores").is_none());
    assert!(json.get("gaps").is_none());
    Ok(())
}

#[test]
fn missing_sets_serialize_sorted() -> Result<()> {
    let report = matcher().analyze(SAMPLE_RESUME, SAMPLE_JOB)?;
    let json = serde_json::to_value(&report)?;

    for key in ["missing_hard", "missing_soft", "missing_cloud", "matched_skills"] {
        let values: Vec<&str> = json[key]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(values, sorted, "{key} not sorted");
    }
    Ok(())
}

#[test]
fn tips_cover_each_nonempty_gap_category() -> Result<()> {
    let report = matcher().analyze(SAMPLE_RESUME, SAMPLE_JOB)?;
    let mut expected = 0;
    if !report.gaps.missing_hard.is_empty() {
        expected += 1;
    }
    if !report.gaps.missing_soft.is_empty() {
        expected += 1;
    }
    if !report.gaps.missing_cloud.is_empty() {
        expected += 1;
    }
    assert_eq!(report.gaps.tips.len(), expected);

    for skill in report.gaps.missing_hard.iter().take(1) {
        assert!(report.gaps.tips.iter().any(|tip| tip.contains(skill)));
    }
    Ok(())
}

#[test]
fn top_match_snippets_are_bounded() -> Result<()> {
    let long_line = format!("EXPERIENCE\n{}", "database migration tooling ".repeat(20));
    let report = matcher().analyze(&long_line, SAMPLE_JOB)?;
    for top in &report.top_matches {
        assert!(top.resume_snippet.chars().count() <= 100);
        assert!(top.job_snippet.chars().count() <= 100);
    }
    let json = serde_json::to_value(&report)?;
    let first = &json["top_matches"][0];
    assert!(first["resume_snippet"].is_string());
    assert!(first["job_snippet"].is_string());
    assert!(first["score"].is_number());
    Ok(())
}
