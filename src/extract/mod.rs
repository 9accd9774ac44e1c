//! Resume skill extraction.
//!
//! Candidates come from delimiter-split spans (the usual shape of a
//! skills section) plus a full-text taxonomy scan. Only taxonomy-known
//! skills survive; the extractor never invents labels.

use std::collections::{BTreeMap, BTreeSet};

use crate::resume::SectionKind;
use crate::taxonomy::SkillTaxonomy;

/// Derive the canonical skill set from segmented resume sections.
///
/// Identical input always yields the identical set.
#[must_use]
pub fn skills_from_sections(
    sections: &BTreeMap<SectionKind, String>,
    taxonomy: &SkillTaxonomy,
) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    for text in sections.values() {
        for candidate in candidate_phrases(text) {
            if let Some(name) = taxonomy.canonical(&candidate) {
                found.insert(name.to_string());
            }
        }
        found.extend(taxonomy.scan(text));
    }
    found
}

/// Comma/bullet-delimited spans of plausible skill length.
#[must_use]
pub fn candidate_phrases(text: &str) -> Vec<String> {
    let mut phrases = Vec::new();
    for line in text.lines() {
        let line = line.trim().trim_start_matches(['-', '*', '\u{2022}', ' ']);
        for span in line.split([',', ';', '|', '/', '\u{00b7}']) {
            let span = span.trim();
            if (2..=60).contains(&span.len()) {
                phrases.push(span.to_string());
            }
        }
    }
    phrases
}
