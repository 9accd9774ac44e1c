use std::collections::BTreeSet;
use std::sync::Arc;

use anyhow::Result;

use jobfit::JobfitError;
use jobfit::pipeline::{Matcher, MatcherOptions};
use jobfit::scoring::HashEmbedder;
use jobfit::taxonomy::{SkillCategory, SkillTaxonomy, TaxonomyEntry};
use jobfit::test_utils::fixtures::{SAMPLE_JOB, SAMPLE_RESUME};

fn matcher() -> Matcher {
    Matcher::new(
        Arc::new(SkillTaxonomy::builtin().unwrap()),
        Arc::new(HashEmbedder::default()),
        MatcherOptions::default(),
    )
}

fn entry(name: &str, category: SkillCategory) -> TaxonomyEntry {
    TaxonomyEntry {
        name: name.to_string(),
        category,
        aliases: vec![],
    }
}

fn set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(ToString::to_string).collect()
}

#[test]
fn self_match_scores_near_perfect() -> Result<()> {
    let scores = matcher().score(SAMPLE_RESUME, SAMPLE_RESUME)?;
    assert!(
        scores.semantic_score > 0.95,
        "semantic was {}",
        scores.semantic_score
    );
    assert!(
        (scores.keyword_score - 1.0).abs() < 1e-6,
        "keyword was {}",
        scores.keyword_score
    );
    assert!(scores.final_score >= 0.98);
    Ok(())
}

#[test]
fn disjoint_documents_score_low() -> Result<()> {
    let resume = "Watercolor portraiture and oil painting.\nGallery curation, archival framing, pigment mixing.";
    let job = "Requirements:\n- Solder surface-mount components\n- Debug embedded firmware drivers";

    let scores = matcher().score(resume, job)?;
    assert_eq!(scores.keyword_score, 0.0);
    assert!(
        scores.semantic_score < 0.5,
        "semantic was {}",
        scores.semantic_score
    );
    assert!(scores.final_score < 0.5);
    Ok(())
}

#[test]
fn scores_stay_in_unit_interval() -> Result<()> {
    let scores = matcher().score(SAMPLE_RESUME, SAMPLE_JOB)?;
    assert!((0.0..=1.0).contains(&scores.semantic_score));
    assert!((0.0..=1.0).contains(&scores.keyword_score));
    assert!((0.0..=1.0).contains(&scores.final_score));
    Ok(())
}

#[test]
fn final_score_is_rounded_weighted_sum() -> Result<()> {
    let scores = matcher().score(SAMPLE_RESUME, SAMPLE_JOB)?;
    let raw = 0.6 * scores.semantic_score + 0.4 * scores.keyword_score;
    let expected = (raw * 100.0).round() / 100.0;
    assert!((scores.final_score - expected).abs() < 1e-6);
    Ok(())
}

#[test]
fn analyze_is_deterministic() -> Result<()> {
    let m = matcher();
    let first = m.analyze(SAMPLE_RESUME, SAMPLE_JOB)?;
    let second = m.analyze(SAMPLE_RESUME, SAMPLE_JOB)?;

    assert!((first.scores.semantic_score - second.scores.semantic_score).abs() < 1e-6);
    assert!((first.scores.keyword_score - second.scores.keyword_score).abs() < 1e-6);
    assert!((first.scores.final_score - second.scores.final_score).abs() < 1e-6);
    assert_eq!(first.gaps.missing_hard, second.gaps.missing_hard);
    assert_eq!(first.gaps.missing_soft, second.gaps.missing_soft);
    assert_eq!(first.gaps.missing_cloud, second.gaps.missing_cloud);
    assert_eq!(first.gaps.matched_skills, second.gaps.matched_skills);
    assert_eq!(first.gaps.tips, second.gaps.tips);
    assert_eq!(first.top_matches.len(), second.top_matches.len());
    Ok(())
}

#[test]
fn missing_hard_is_required_minus_possessed() -> Result<()> {
    // taxonomy where every skill in play is a hard skill
    let taxonomy = SkillTaxonomy::from_entries(vec![
        entry("python", SkillCategory::Hard),
        entry("sql", SkillCategory::Hard),
        entry("aws", SkillCategory::Hard),
        entry("docker", SkillCategory::Hard),
    ])?;
    let m = Matcher::new(
        Arc::new(taxonomy),
        Arc::new(HashEmbedder::default()),
        MatcherOptions::default(),
    );

    let resume = "SKILLS\nPython and SQL for analytics work";
    let job = "Requirements:\n- Python experience\n- AWS deployments\n- Docker containers";
    let report = m.analyze(resume, job)?;

    assert_eq!(report.gaps.missing_hard, set(&["aws", "docker"]));
    assert_eq!(report.gaps.matched_skills, set(&["python"]));
    assert!(report.gaps.missing_soft.is_empty());
    assert!(report.gaps.missing_cloud.is_empty());
    Ok(())
}

#[test]
fn gap_sets_never_overlap_resume_skills() -> Result<()> {
    let report = matcher().analyze(SAMPLE_RESUME, SAMPLE_JOB)?;
    let taxonomy = SkillTaxonomy::builtin()?;
    let resume = jobfit::resume::Resume::parse(SAMPLE_RESUME, &taxonomy);

    assert!(report.gaps.missing_hard.is_disjoint(&resume.skill_set));
    assert!(report.gaps.missing_soft.is_disjoint(&resume.skill_set));
    assert!(report.gaps.missing_cloud.is_disjoint(&resume.skill_set));
    assert!(report.gaps.matched_skills.is_subset(&resume.skill_set));
    Ok(())
}

#[test]
fn top_matches_are_sorted_and_capped() -> Result<()> {
    let report = matcher().analyze(SAMPLE_RESUME, SAMPLE_JOB)?;
    assert!(!report.top_matches.is_empty());
    assert!(report.top_matches.len() <= 6);
    for pair in report.top_matches.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for top in &report.top_matches {
        assert!(!top.resume_snippet.is_empty());
        assert!(!top.job_snippet.is_empty());
    }
    Ok(())
}

#[test]
fn short_inputs_are_rejected_before_scoring() {
    let m = matcher();
    for (resume, job) in [("", SAMPLE_JOB), (SAMPLE_RESUME, ""), ("tiny", "also tiny")] {
        let err = m.analyze(resume, job).unwrap_err();
        assert!(matches!(err, JobfitError::InvalidInput(_)), "{resume:?}/{job:?}");
    }
}

#[test]
fn min_chars_option_is_honored() {
    let options = MatcherOptions {
        min_input_chars: 5,
        ..MatcherOptions::default()
    };
    let m = Matcher::new(
        Arc::new(SkillTaxonomy::builtin().unwrap()),
        Arc::new(HashEmbedder::default()),
        options,
    );
    assert!(m.score("short resume text", "short job text").is_ok());
}
