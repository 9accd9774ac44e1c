//! Keyword coverage scoring.

use std::collections::HashSet;

use crate::job::JobDescription;
use crate::resume::Resume;
use crate::utils::text::{ngrams_up_to, tokenize};

/// Terms a resume can claim: its canonical skill set plus every
/// section n-gram up to `max_ngram` words, normalized the same way
/// job keywords are.
#[must_use]
pub fn resume_terms(resume: &Resume, max_ngram: usize) -> HashSet<String> {
    let mut terms: HashSet<String> = resume.skill_set.iter().cloned().collect();
    for text in resume.sections.values() {
        let tokens = tokenize(text);
        terms.extend(ngrams_up_to(&tokens, max_ngram));
    }
    terms
}

/// Coverage of the job's keyword set by resume terms:
/// `|intersection| / |job terms|`, clamped to [0,1]. An empty job
/// term set scores 0 by definition, never a division error.
#[must_use]
pub fn keyword_coverage(resume_terms: &HashSet<String>, job: &JobDescription) -> f32 {
    let job_terms: HashSet<&str> = job
        .keywords
        .iter()
        .map(String::as_str)
        .chain(job.tech_stack.iter().map(String::as_str))
        .collect();
    if job_terms.is_empty() {
        return 0.0;
    }
    let matched = job_terms
        .iter()
        .filter(|term| resume_terms.contains(**term))
        .count();
    (matched as f32 / job_terms.len() as f32).clamp(0.0, 1.0)
}
