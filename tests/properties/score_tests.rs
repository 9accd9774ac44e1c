use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;

use jobfit::job::JobDescription;
use jobfit::scoring::{ScoreWeights, combine_scores, keyword_coverage};

fn job_with_keywords(keywords: Vec<String>) -> JobDescription {
    JobDescription {
        raw_text: String::new(),
        requirements: Vec::new(),
        responsibilities: Vec::new(),
        keywords,
        tech_stack: BTreeSet::new(),
    }
}

proptest! {
    #[test]
    fn test_combined_score_stays_in_unit_interval(
        semantic in 0.0f32..=1.0,
        keyword in 0.0f32..=1.0,
    ) {
        let score = combine_scores(semantic, keyword, ScoreWeights::default());
        prop_assert!((0.0..=1.0).contains(&score));
        // two-decimal quantization
        let cents = score * 100.0;
        prop_assert!((cents - cents.round()).abs() < 1e-3);
    }

    #[test]
    fn test_combined_score_matches_weighted_sum(
        semantic in 0.0f32..=1.0,
        keyword in 0.0f32..=1.0,
    ) {
        let score = combine_scores(semantic, keyword, ScoreWeights::default());
        let raw = 0.6 * semantic + 0.4 * keyword;
        let expected = (raw * 100.0).round() / 100.0;
        prop_assert!((score - expected).abs() < 1e-6);
    }

    #[test]
    fn test_keyword_coverage_monotonic(
        words in prop::collection::hash_set("[a-z]{3,8}", 2..8),
        mask in prop::collection::vec(any::<bool>(), 8),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut keywords: Vec<String> = words.into_iter().collect();
        keywords.sort_unstable();
        let job = job_with_keywords(keywords.clone());

        let base: HashSet<String> = keywords
            .iter()
            .zip(mask.iter())
            .filter(|(_, keep)| **keep)
            .map(|(word, _)| word.clone())
            .collect();
        let mut grown = base.clone();
        grown.insert(pick.get(&keywords).clone());

        prop_assert!(keyword_coverage(&grown, &job) >= keyword_coverage(&base, &job));
    }

    #[test]
    fn test_keyword_coverage_bounded(
        words in prop::collection::hash_set("[a-z]{3,8}", 0..8),
        mask in prop::collection::vec(any::<bool>(), 8),
    ) {
        let keywords: Vec<String> = words.into_iter().collect();
        let job = job_with_keywords(keywords.clone());
        let resume: HashSet<String> = keywords
            .iter()
            .zip(mask.iter())
            .filter(|(_, keep)| **keep)
            .map(|(word, _)| word.clone())
            .collect();

        let score = keyword_coverage(&resume, &job);
        prop_assert!((0.0..=1.0).contains(&score));
        if keywords.is_empty() {
            prop_assert_eq!(score, 0.0);
        }
    }
}
