//! Text segmentation: boilerplate stripping, contact capture, and
//! header-based section splitting.
//!
//! Section detection is an explicit rule table with first-match-wins
//! semantics so the behavior stays enumerable and testable.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::resume::{ContactInfo, SectionKind};
use crate::utils::text::normalize_term;

// ===== PATTERNS =====

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_.+-]+@[A-Za-z0-9-]+\.[A-Za-z0-9.-]+").unwrap());

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[\s-])?(?:\(?\d{2,4}\)?[\s-]?)?\d{3,4}[\s-]?\d{3,4}").unwrap()
});

static PAGE_FOOTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*page\s+\d+(?:\s*(?:of|/)\s*\d+)?\s*$").unwrap());

static HTML_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Section header synonyms. A line is a header only when it equals a
/// pattern after trimming decoration, never on bare prefix match, so
/// "Experience with Python" stays body text.
static HEADER_RULES: LazyLock<Vec<(&'static str, SectionKind)>> = LazyLock::new(|| {
    vec![
        ("professional summary", SectionKind::Summary),
        ("summary", SectionKind::Summary),
        ("objective", SectionKind::Summary),
        ("profile", SectionKind::Summary),
        ("about me", SectionKind::Summary),
        ("about", SectionKind::Summary),
        ("technical skills", SectionKind::Skills),
        ("core skills", SectionKind::Skills),
        ("key skills", SectionKind::Skills),
        ("skills & tools", SectionKind::Skills),
        ("skills and tools", SectionKind::Skills),
        ("skills", SectionKind::Skills),
        ("technologies", SectionKind::Skills),
        ("tech stack", SectionKind::Skills),
        ("work experience", SectionKind::Experience),
        ("professional experience", SectionKind::Experience),
        ("employment history", SectionKind::Experience),
        ("work history", SectionKind::Experience),
        ("experience", SectionKind::Experience),
        ("education", SectionKind::Education),
        ("academic background", SectionKind::Education),
        ("qualifications", SectionKind::Education),
        ("personal projects", SectionKind::Projects),
        ("selected projects", SectionKind::Projects),
        ("projects", SectionKind::Projects),
        ("portfolio", SectionKind::Projects),
    ]
});

/// Minimum digits for a phone candidate; filters out year ranges and
/// other short numeric runs the loose pattern also matches.
const MIN_PHONE_DIGITS: usize = 9;

/// Repeated lines this short count as page boilerplate.
const MAX_BOILERPLATE_WORDS: usize = 6;

// ===== SEGMENTATION =====

/// Output of [`segment`]: contact fields plus named sections.
#[derive(Debug, Default)]
pub struct Segmented {
    pub contact: ContactInfo,
    pub sections: BTreeMap<SectionKind, String>,
}

/// Segment resume text. Contact capture runs on the cleaned full text
/// before boilerplate stripping so a header-line email is never lost.
#[must_use]
pub fn segment(text: &str) -> Segmented {
    let cleaned = clean_formatting(text);
    let contact = extract_contact(&cleaned);
    let lines = strip_boilerplate(&cleaned);
    let sections = split_sections(&lines);
    Segmented { contact, sections }
}

/// Drop HTML tags and emoji, keeping line structure intact.
#[must_use]
pub fn clean_formatting(text: &str) -> String {
    let without_tags = HTML_TAG_RE.replace_all(text, " ");
    without_tags.chars().filter(|&c| !is_emoji(c)).collect()
}

fn is_emoji(c: char) -> bool {
    matches!(
        c as u32,
        0x1F300..=0x1F5FF | 0x1F600..=0x1F64F | 0x1F680..=0x1F6FF | 0x1F1E0..=0x1F1FF
    )
}

/// First email and first plausible phone number in the text.
#[must_use]
pub fn extract_contact(text: &str) -> ContactInfo {
    let email = EMAIL_RE.find(text).map(|m| m.as_str().to_string());
    let phone = PHONE_RE
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .find(|candidate| candidate.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS);
    ContactInfo { email, phone }
}

/// Non-empty trimmed lines with page furniture removed: explicit
/// "Page N of M" markers plus short lines repeated across form-feed
/// separated pages.
#[must_use]
pub fn strip_boilerplate(text: &str) -> Vec<String> {
    let pages: Vec<&str> = text.split('\u{0C}').collect();

    let mut repeated: HashSet<String> = HashSet::new();
    if pages.len() > 1 {
        let mut page_counts: HashMap<&str, usize> = HashMap::new();
        for page in &pages {
            let unique: HashSet<&str> = page
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .collect();
            for line in unique {
                *page_counts.entry(line).or_insert(0) += 1;
            }
        }
        repeated = page_counts
            .into_iter()
            .filter(|(line, pages_seen)| {
                *pages_seen > 1 && line.split_whitespace().count() <= MAX_BOILERPLATE_WORDS
            })
            .map(|(line, _)| line.to_string())
            .collect();
    }

    pages
        .iter()
        .flat_map(|page| page.lines())
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .filter(|l| !PAGE_FOOTER_RE.is_match(l))
        .filter(|l| !repeated.contains(*l))
        .map(ToString::to_string)
        .collect()
}

/// Assign lines to sections. Text before the first recognized header
/// lands in an implicit summary section; with no headers at all the
/// whole resume is the summary.
#[must_use]
pub fn split_sections(lines: &[String]) -> BTreeMap<SectionKind, String> {
    let mut buckets: BTreeMap<SectionKind, Vec<&str>> = BTreeMap::new();
    let mut current = SectionKind::Summary;

    for line in lines {
        if let Some(kind) = header_kind(line) {
            current = kind;
            buckets.entry(kind).or_default();
        } else {
            buckets.entry(current).or_default().push(line);
        }
    }

    buckets
        .into_iter()
        .filter_map(|(kind, body)| {
            let text = body.join("\n").trim().to_string();
            if text.is_empty() { None } else { Some((kind, text)) }
        })
        .collect()
}

/// Match a line against the header rule table.
#[must_use]
pub fn header_kind(line: &str) -> Option<SectionKind> {
    let stripped = line
        .trim()
        .trim_start_matches(['-', '*', '#', '\u{2022}', ' '])
        .trim_end_matches([':', '-', ' ']);
    let normalized = normalize_term(stripped);
    if normalized.is_empty() {
        return None;
    }
    HEADER_RULES
        .iter()
        .find(|(pattern, _)| normalized == *pattern)
        .map(|&(_, kind)| kind)
}
