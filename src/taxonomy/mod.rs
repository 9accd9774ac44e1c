//! Skill taxonomy: canonical names, categories, and alias lookup.
//!
//! The taxonomy is loaded once at startup and treated as read-only for
//! the process lifetime. Matching is exact over normalized terms plus
//! an Aho-Corasick scan for in-text occurrences, never fuzzy string
//! similarity.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{JobfitError, Result};
use crate::utils::text::normalize_term;

/// Embedded fallback used when no taxonomy file is configured.
const DEFAULT_TAXONOMY_JSON: &str = include_str!("default.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Hard,
    Soft,
    CloudDevops,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [Self::Hard, Self::Soft, Self::CloudDevops];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hard => "hard",
            Self::Soft => "soft",
            Self::CloudDevops => "cloud_devops",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SkillCategory {
    type Err = JobfitError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_term(s).as_str() {
            "hard" => Ok(Self::Hard),
            "soft" => Ok(Self::Soft),
            "cloud_devops" | "cloud-devops" | "cloud" => Ok(Self::CloudDevops),
            other => Err(JobfitError::InvalidInput(format!(
                "unknown skill category: {other} (expected hard, soft, or cloud_devops)"
            ))),
        }
    }
}

/// One taxonomy row as it appears in the taxonomy file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    pub name: String,
    pub category: SkillCategory,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Immutable skill table with normalized alias lookup and an
/// Aho-Corasick automaton for scanning free text.
#[derive(Debug)]
pub struct SkillTaxonomy {
    entries: Vec<TaxonomyEntry>,
    /// normalized name or alias -> index into `entries`
    lookup: HashMap<String, usize>,
    automaton: AhoCorasick,
    /// automaton pattern id -> index into `entries`
    pattern_entries: Vec<usize>,
}

impl SkillTaxonomy {
    /// Build the lookup table and scan automaton from raw entries.
    ///
    /// Duplicate normalized terms keep the first entry that claimed
    /// them; entries whose name normalizes to nothing are skipped.
    pub fn from_entries(raw: Vec<TaxonomyEntry>) -> Result<Self> {
        let mut entries = Vec::with_capacity(raw.len());
        let mut lookup = HashMap::new();
        let mut patterns: Vec<String> = Vec::new();
        let mut pattern_entries = Vec::new();

        for entry in raw {
            let canonical = normalize_term(&entry.name);
            if canonical.is_empty() {
                warn!("skipping taxonomy entry with empty name");
                continue;
            }
            let idx = entries.len();
            let mut terms = vec![canonical.clone()];
            terms.extend(entry.aliases.iter().map(|a| normalize_term(a)));

            for term in terms {
                if term.is_empty() {
                    continue;
                }
                if lookup.contains_key(&term) {
                    debug!(term, "duplicate taxonomy term, keeping first entry");
                    continue;
                }
                lookup.insert(term.clone(), idx);
                patterns.push(term);
                pattern_entries.push(idx);
            }

            entries.push(TaxonomyEntry {
                name: canonical,
                category: entry.category,
                aliases: entry
                    .aliases
                    .iter()
                    .map(|a| normalize_term(a))
                    .filter(|a| !a.is_empty())
                    .collect(),
            });
        }

        if entries.is_empty() {
            return Err(JobfitError::Taxonomy(
                "taxonomy contains no valid entries".to_string(),
            ));
        }

        let automaton = AhoCorasick::builder()
            .match_kind(aho_corasick::MatchKind::LeftmostLongest)
            .build(&patterns)
            .map_err(|e| JobfitError::Taxonomy(format!("build skill automaton: {e}")))?;

        Ok(Self { entries, lookup, automaton, pattern_entries })
    }

    /// Load a taxonomy file: a JSON array of entries. Malformed entries
    /// are skipped with a warning; an empty result is fatal.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| JobfitError::Taxonomy(format!("read taxonomy {}: {e}", path.display())))?;
        let value: serde_json::Value = serde_json::from_str(&raw)
            .map_err(|e| JobfitError::Taxonomy(format!("parse taxonomy {}: {e}", path.display())))?;
        let serde_json::Value::Array(items) = value else {
            return Err(JobfitError::Taxonomy(format!(
                "taxonomy {} must be a JSON array of entries",
                path.display()
            )));
        };

        let total = items.len();
        let mut entries = Vec::with_capacity(total);
        for (idx, item) in items.into_iter().enumerate() {
            match serde_json::from_value::<TaxonomyEntry>(item) {
                Ok(entry) => entries.push(entry),
                Err(e) => warn!(index = idx, "skipping malformed taxonomy entry: {e}"),
            }
        }
        if entries.len() < total {
            warn!(
                kept = entries.len(),
                total, "taxonomy loaded with malformed entries skipped"
            );
        }

        Self::from_entries(entries)
    }

    /// Built-in taxonomy compiled into the binary.
    pub fn builtin() -> Result<Self> {
        let entries: Vec<TaxonomyEntry> = serde_json::from_str(DEFAULT_TAXONOMY_JSON)
            .map_err(|e| JobfitError::Taxonomy(format!("parse built-in taxonomy: {e}")))?;
        Self::from_entries(entries)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[TaxonomyEntry] {
        &self.entries
    }

    /// Resolve a candidate term to its canonical skill name.
    #[must_use]
    pub fn canonical(&self, term: &str) -> Option<&str> {
        self.lookup
            .get(&normalize_term(term))
            .map(|&idx| self.entries[idx].name.as_str())
    }

    /// Category of a skill, by canonical name or alias.
    #[must_use]
    pub fn category_of(&self, term: &str) -> Option<SkillCategory> {
        self.lookup
            .get(&normalize_term(term))
            .map(|&idx| self.entries[idx].category)
    }

    /// Scan free text for taxonomy terms, returning canonical names.
    ///
    /// Matches must sit on word boundaries: "go" matches in "Go and
    /// Rust" but not inside "Django" or "algorithms".
    #[must_use]
    pub fn scan(&self, text: &str) -> BTreeSet<String> {
        let haystack = normalize_term(text);
        let mut found = BTreeSet::new();
        for mat in self.automaton.find_iter(&haystack) {
            if !Self::on_word_boundary(&haystack, mat.start(), mat.end()) {
                continue;
            }
            let idx = self.pattern_entries[mat.pattern().as_usize()];
            found.insert(self.entries[idx].name.clone());
        }
        found
    }

    /// Like [`scan`](Self::scan), restricted to one category.
    #[must_use]
    pub fn scan_category(&self, text: &str, category: SkillCategory) -> BTreeSet<String> {
        self.scan(text)
            .into_iter()
            .filter(|name| self.category_of(name) == Some(category))
            .collect()
    }

    fn on_word_boundary(haystack: &str, start: usize, end: usize) -> bool {
        let before = haystack[..start].chars().next_back();
        let after = haystack[end..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    }
}
