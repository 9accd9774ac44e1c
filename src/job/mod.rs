//! Job description parsing: requirement/responsibility bucketing,
//! ranked keyword extraction, and tech-stack detection.

pub mod keywords;

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::taxonomy::{SkillCategory, SkillTaxonomy};
use crate::utils::text::tokenize;

// ===== RULE TABLES =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Requirements,
    Responsibilities,
    Other,
}

/// Heading substrings, first match wins. Checked only against short
/// unbulleted lines so body text never registers as a heading. The
/// bare "you will" sits after the requirement patterns so "Skills you
/// will need" buckets as a requirement.
static HEADING_RULES: LazyLock<Vec<(&'static str, Bucket)>> = LazyLock::new(|| {
    vec![
        ("responsibil", Bucket::Responsibilities),
        ("what you'll do", Bucket::Responsibilities),
        ("what you will do", Bucket::Responsibilities),
        ("your role", Bucket::Responsibilities),
        ("day to day", Bucket::Responsibilities),
        ("requirement", Bucket::Requirements),
        ("qualification", Bucket::Requirements),
        ("must have", Bucket::Requirements),
        ("nice to have", Bucket::Requirements),
        ("what we're looking for", Bucket::Requirements),
        ("what we are looking for", Bucket::Requirements),
        ("who you are", Bucket::Requirements),
        ("skill", Bucket::Requirements),
        ("you will", Bucket::Responsibilities),
        ("about", Bucket::Other),
        ("benefit", Bucket::Other),
        ("perk", Bucket::Other),
        ("compensation", Bucket::Other),
        ("salary", Bucket::Other),
        ("location", Bucket::Other),
        ("who we are", Bucket::Other),
        ("our team", Bucket::Other),
    ]
});

/// Obligation markers over the sentence token stream. Any hit makes
/// the sentence a requirement.
static OBLIGATION_MARKERS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    vec![
        "must",
        "required",
        "require",
        "requirement",
        "should",
        "qualification",
        "minimum",
        "at least",
        "years of experience",
        "proficiency",
        "proficient",
        "experience with",
        "experience in",
        "familiarity with",
        "degree in",
    ]
});

/// Verbs that open a responsibility sentence.
static ACTION_VERBS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    vec![
        "design", "build", "develop", "implement", "lead", "own", "drive", "collaborate",
        "maintain", "ship", "deploy", "create", "write", "mentor", "manage", "operate",
        "support", "improve", "monitor", "review", "architect", "deliver", "partner", "work",
    ]
});

static BULLET_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[-*\u{2022}\u{00b7}>]+|\d+[.)])\s*").unwrap());

/// Sentence boundaries: terminal punctuation followed by whitespace,
/// or a line break. A bare dot stays inside tokens like "node.js".
static SENTENCE_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?;]\s+|[.!?;]$|\n+").unwrap());

const MAX_HEADING_WORDS: usize = 6;

// ===== MODEL =====

/// A parsed job description. Immutable once built.
#[derive(Debug, Clone)]
pub struct JobDescription {
    pub raw_text: String,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    /// Ranked keywords, best first, already normalized.
    pub keywords: Vec<String>,
    /// Canonical cloud/devops skills found in the text.
    pub tech_stack: BTreeSet<String>,
}

impl JobDescription {
    /// Parse job text: bucket lines under recognized headings, fall
    /// back to sentence classification when no headings exist, rank
    /// keywords, and scan for the tech stack.
    #[must_use]
    pub fn parse(
        text: &str,
        taxonomy: &SkillTaxonomy,
        keyword_top_k: usize,
        keyword_max_words: usize,
    ) -> Self {
        let (requirements, responsibilities) = bucket_lines(text);
        let keywords = keywords::rank_keywords(text, keyword_top_k, keyword_max_words);
        let tech_stack = taxonomy.scan_category(text, SkillCategory::CloudDevops);
        Self {
            raw_text: text.to_string(),
            requirements,
            responsibilities,
            keywords,
            tech_stack,
        }
    }

    /// Requirements joined for whole-bucket scanning.
    #[must_use]
    pub fn requirements_text(&self) -> String {
        self.requirements.join("\n")
    }
}

// ===== CLASSIFICATION =====

fn bucket_lines(text: &str) -> (Vec<String>, Vec<String>) {
    let mut requirements = Vec::new();
    let mut responsibilities = Vec::new();
    let mut bucket: Option<Bucket> = None;

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        if !BULLET_PREFIX_RE.is_match(line) {
            if let Some(kind) = heading_bucket(line) {
                bucket = Some(kind);
                continue;
            }
        }
        let entry = BULLET_PREFIX_RE.replace(line, "").trim().to_string();
        if entry.is_empty() {
            continue;
        }
        match bucket {
            Some(Bucket::Requirements) => requirements.push(entry),
            Some(Bucket::Responsibilities) => responsibilities.push(entry),
            Some(Bucket::Other) | None => {}
        }
    }

    if requirements.is_empty() && responsibilities.is_empty() {
        classify_sentences(text, &mut requirements, &mut responsibilities);
    }

    (requirements, responsibilities)
}

/// Match a short line against the heading rule table.
fn heading_bucket(line: &str) -> Option<Bucket> {
    let stripped = line.trim().trim_end_matches([':', '-', ' ']);
    if stripped.split_whitespace().count() > MAX_HEADING_WORDS {
        return None;
    }
    let lowered = stripped.to_lowercase();
    HEADING_RULES
        .iter()
        .find(|(pattern, _)| lowered.contains(pattern))
        .map(|&(_, bucket)| bucket)
}

/// Unstructured fallback: obligation markers win over action verbs,
/// unclassified sentences are dropped.
fn classify_sentences(text: &str, requirements: &mut Vec<String>, responsibilities: &mut Vec<String>) {
    for sentence in SENTENCE_SPLIT_RE.split(text) {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            continue;
        }
        let tokens = tokenize(sentence);
        if tokens.is_empty() {
            continue;
        }
        let stream = format!(" {} ", tokens.join(" "));
        if OBLIGATION_MARKERS
            .iter()
            .any(|marker| stream.contains(&format!(" {marker} ")))
        {
            requirements.push(sentence.to_string());
        } else if ACTION_VERBS.iter().any(|verb| tokens[0] == *verb)
            || stream.contains(" you will ")
            || stream.contains(" responsible for ")
        {
            responsibilities.push(sentence.to_string());
        }
    }
}
