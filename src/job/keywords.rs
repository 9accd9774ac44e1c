//! Statistical keyword ranking over job description text.
//!
//! RAKE-style scoring: candidate phrases are maximal token runs
//! between stopwords, numbers, and punctuation. Each word gets
//! score = degree(w) / freq(w) computed over all runs, and a phrase
//! scores the sum of its word scores, which favors multi-word phrases
//! that recur in-document over generic filler.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::utils::text::tokenize;

/// Phrase boundaries inside a line. A dot only delimits when followed
/// by whitespace so "node.js" stays whole.
static PHRASE_DELIM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[,;:()\[\]{}!?"&|]+|\.\s+"#).unwrap());

/// Standard English stopwords plus resume/job boilerplate vocabulary.
/// Section-header words (skills, experience, education) are stopwords
/// so document scaffolding never ranks as a keyword.
static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "about", "above", "after", "again", "all", "also", "am", "an", "and", "any",
        "are", "as", "at", "be", "because", "been", "before", "being", "below", "between",
        "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during",
        "each", "etc", "few", "for", "from", "further", "had", "has", "have", "having", "he",
        "her", "here", "hers", "him", "his", "how", "i", "if", "in", "into", "is", "it",
        "its", "just", "like", "ll", "me", "more", "most", "my", "no", "nor", "not", "of",
        "off", "on", "once", "only", "or", "other", "our", "ours", "out", "over", "own",
        "per", "re", "same", "she", "so", "some", "such", "than", "that", "the", "their",
        "theirs", "them", "then", "there", "these", "they", "this", "those", "through", "to",
        "too", "under", "until", "up", "ve", "very", "was", "we", "were", "what", "when",
        "where", "which", "while", "who", "whom", "why", "will", "with", "would", "you",
        "your", "yours",
        // job/resume boilerplate
        "ability", "applicant", "applicants", "apply", "bonus", "candidate", "candidates",
        "company", "education", "excellent", "experience", "experienced", "familiarity",
        "good", "great", "ideal", "including", "job", "knowledge", "looking", "minimum",
        "must", "new", "objective", "opportunity", "plus", "portfolio", "position",
        "preferred", "proficiency", "proficient", "profile", "projects", "qualification",
        "qualifications", "required", "requirement", "requirements", "responsibilities",
        "role", "should", "skill", "skills", "strong", "summary", "team", "technologies",
        "understanding", "work", "working", "year", "years",
    ]
    .into_iter()
    .collect()
});

/// Rank the top-K keywords of a document, best first. Ties break
/// lexicographically so output is reproducible.
#[must_use]
pub fn rank_keywords(text: &str, top_k: usize, max_phrase_words: usize) -> Vec<String> {
    if top_k == 0 || max_phrase_words == 0 {
        return Vec::new();
    }
    let runs = phrase_runs(text);

    let mut freq: HashMap<&str, u32> = HashMap::new();
    let mut degree: HashMap<&str, u32> = HashMap::new();
    for run in &runs {
        let len = run.len() as u32;
        for word in run {
            *freq.entry(word).or_insert(0) += 1;
            *degree.entry(word).or_insert(0) += len;
        }
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut scored: Vec<(String, f32)> = Vec::new();
    for run in &runs {
        if run.len() > max_phrase_words {
            continue;
        }
        let phrase = run.join(" ");
        if !seen.insert(phrase.clone()) {
            continue;
        }
        let score: f32 = run
            .iter()
            .map(|w| {
                let f = freq[w.as_str()] as f32;
                let d = degree[w.as_str()] as f32;
                d / f
            })
            .sum();
        scored.push((phrase, score));
    }

    scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    scored.into_iter().take(top_k).map(|(phrase, _)| phrase).collect()
}

/// Maximal content-token runs. Stopwords, pure numbers, and
/// single-character tokens act as delimiters alongside punctuation.
fn phrase_runs(text: &str) -> Vec<Vec<String>> {
    let mut runs = Vec::new();
    for line in text.lines() {
        for span in PHRASE_DELIM_RE.split(line) {
            let mut current: Vec<String> = Vec::new();
            for token in tokenize(span) {
                if is_delimiter_token(&token) {
                    if !current.is_empty() {
                        runs.push(std::mem::take(&mut current));
                    }
                } else {
                    current.push(token);
                }
            }
            if !current.is_empty() {
                runs.push(current);
            }
        }
    }
    runs
}

fn is_delimiter_token(token: &str) -> bool {
    if token.chars().count() <= 1 {
        return true;
    }
    if STOPWORDS.contains(token) {
        return true;
    }
    // numeric-ish tokens ("5+", "3.5", "2019") delimit phrases
    token.chars().any(|c| c.is_ascii_digit())
        && token.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '/'))
}
