//! The matching pipeline: input validation, per-axis scoring, and
//! report assembly.
//!
//! A [`Matcher`] is a stateless function of its two input texts plus
//! the process-wide read-only taxonomy and embedder, so concurrent
//! calls need no coordination.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::error::{JobfitError, Result};
use crate::gaps::{self, GapReport};
use crate::job::JobDescription;
use crate::resume::Resume;
use crate::scoring::{self, Embedder, ScoreWeights};
use crate::taxonomy::SkillTaxonomy;
use crate::utils::format::truncate_string;

/// How many best-aligned line pairs to report.
const TOP_MATCH_LIMIT: usize = 6;

/// Longest snippet shown per matched line.
const SNIPPET_CHARS: usize = 100;

/// Tunables threaded down from configuration.
#[derive(Debug, Clone, Copy)]
pub struct MatcherOptions {
    pub weights: ScoreWeights,
    pub keyword_top_k: usize,
    pub keyword_max_words: usize,
    pub min_input_chars: usize,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            keyword_top_k: 20,
            keyword_max_words: 3,
            min_input_chars: 20,
        }
    }
}

/// The score triple. Semantic and keyword scores are reported raw;
/// only the fused score is rounded, at the output boundary.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MatchScores {
    pub semantic_score: f32,
    pub keyword_score: f32,
    pub final_score: f32,
}

/// One well-aligned resume/job line pair, for explainability.
#[derive(Debug, Clone, Serialize)]
pub struct TopMatch {
    pub resume_snippet: String,
    pub job_snippet: String,
    pub score: f32,
}

/// Full analysis output.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    #[serde(flatten)]
    pub scores: MatchScores,
    #[serde(flatten)]
    pub gaps: GapReport,
    pub top_matches: Vec<TopMatch>,
}

struct Scored {
    resume: Resume,
    job: JobDescription,
    scores: MatchScores,
    resume_chunks: Vec<String>,
    job_chunks: Vec<String>,
    resume_rows: Vec<Vec<f32>>,
    job_rows: Vec<Vec<f32>>,
}

/// Stateless matcher over the shared taxonomy and embedder.
pub struct Matcher {
    taxonomy: Arc<SkillTaxonomy>,
    embedder: Arc<dyn Embedder>,
    options: MatcherOptions,
}

impl Matcher {
    #[must_use]
    pub fn new(
        taxonomy: Arc<SkillTaxonomy>,
        embedder: Arc<dyn Embedder>,
        options: MatcherOptions,
    ) -> Self {
        Self { taxonomy, embedder, options }
    }

    /// Full analysis: scores, per-category skill gaps, tips, and the
    /// best-aligned line pairs.
    pub fn analyze(&self, resume_text: &str, job_text: &str) -> Result<MatchReport> {
        let scored = self.run(resume_text, job_text)?;
        let gaps = gaps::analyze_gaps(&scored.resume, &scored.job, &self.taxonomy);
        let top_matches = Self::top_matches(&scored);
        Ok(MatchReport { scores: scored.scores, gaps, top_matches })
    }

    /// Scores only, skipping gap analysis.
    pub fn score(&self, resume_text: &str, job_text: &str) -> Result<MatchScores> {
        Ok(self.run(resume_text, job_text)?.scores)
    }

    fn run(&self, resume_text: &str, job_text: &str) -> Result<Scored> {
        validate_input("resume", resume_text, self.options.min_input_chars)?;
        validate_input("job description", job_text, self.options.min_input_chars)?;

        let resume = Resume::parse(resume_text, &self.taxonomy);
        let job = JobDescription::parse(
            job_text,
            &self.taxonomy,
            self.options.keyword_top_k,
            self.options.keyword_max_words,
        );

        let resume_chunks = scoring::line_chunks(&resume.raw_text);
        let job_chunks = scoring::line_chunks(&job.raw_text);
        let resume_rows = scoring::embed_chunks(self.embedder.as_ref(), &resume_chunks);
        let job_rows = scoring::embed_chunks(self.embedder.as_ref(), &job_chunks);

        let dims = self.embedder.dims();
        let resume_vec = scoring::mean_pool(&resume_rows, dims);
        let job_vec = scoring::mean_pool(&job_rows, dims);
        let semantic_score = scoring::semantic_similarity(&resume_vec, &job_vec);

        let terms = scoring::resume_terms(&resume, self.options.keyword_max_words);
        let keyword_score = scoring::keyword_coverage(&terms, &job);

        let final_score = scoring::combine_scores(semantic_score, keyword_score, self.options.weights);
        debug!(semantic_score, keyword_score, final_score, "scored match");

        Ok(Scored {
            resume,
            job,
            scores: MatchScores { semantic_score, keyword_score, final_score },
            resume_chunks,
            job_chunks,
            resume_rows,
            job_rows,
        })
    }

    /// Pairwise line similarities, best first. Ties break on line
    /// indices so output is reproducible.
    fn top_matches(scored: &Scored) -> Vec<TopMatch> {
        let mut pairs = Vec::new();
        for (i, resume_row) in scored.resume_rows.iter().enumerate() {
            for (j, job_row) in scored.job_rows.iter().enumerate() {
                pairs.push((i, j, scoring::semantic_similarity(resume_row, job_row)));
            }
        }
        pairs.sort_by(|a, b| {
            b.2.total_cmp(&a.2)
                .then_with(|| a.0.cmp(&b.0))
                .then_with(|| a.1.cmp(&b.1))
        });
        pairs
            .into_iter()
            .take(TOP_MATCH_LIMIT)
            .map(|(i, j, score)| TopMatch {
                resume_snippet: truncate_string(&scored.resume_chunks[i], SNIPPET_CHARS),
                job_snippet: truncate_string(&scored.job_chunks[j], SNIPPET_CHARS),
                score,
            })
            .collect()
    }
}

fn validate_input(name: &str, text: &str, min_chars: usize) -> Result<()> {
    let len = text.trim().chars().count();
    if len == 0 {
        return Err(JobfitError::InvalidInput(format!("{name} text is empty")));
    }
    if len < min_chars {
        return Err(JobfitError::InvalidInput(format!(
            "{name} text is too short ({len} chars, minimum {min_chars})"
        )));
    }
    Ok(())
}
