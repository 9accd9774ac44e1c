//! Text normalization and tokenization shared across the pipeline.
//!
//! Every component that compares terms (taxonomy lookup, keyword
//! ranking, coverage scoring, hash embeddings) must agree on token
//! boundaries, so the tokenizer lives here rather than per-module.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Word-ish runs, keeping symbols that are load-bearing in tech terms
/// ("c++", "c#", "node.js", "ci/cd").
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z0-9#+./-]+").unwrap());

/// Canonical form for term comparison: NFKC fold, lowercase, collapsed
/// inner whitespace.
pub fn normalize_term(s: &str) -> String {
    let folded: String = s.nfkc().collect();
    folded
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercased word tokens. Leading and trailing `.`, `/`, `-` are
/// trimmed so sentence punctuation never sticks to a token, while `+`
/// and `#` survive in place ("c++", "f#").
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = normalize_term(text);
    TOKEN_RE
        .find_iter(&lowered)
        .filter_map(|m| {
            let token = m.as_str().trim_matches(['.', '/', '-']);
            if token.is_empty() {
                None
            } else {
                Some(token.to_string())
            }
        })
        .collect()
}

/// All contiguous n-grams of the token slice for n in `1..=max_n`,
/// joined with single spaces.
pub fn ngrams_up_to(tokens: &[String], max_n: usize) -> Vec<String> {
    let mut grams = Vec::new();
    for n in 1..=max_n {
        if n > tokens.len() {
            break;
        }
        for window in tokens.windows(n) {
            grams.push(window.join(" "));
        }
    }
    grams
}
