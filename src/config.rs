//! Layered TOML configuration.
//!
//! Precedence, lowest to highest: built-in defaults, the global config
//! file (`<config dir>/jobfit/config.toml`), an explicit file given on
//! the command line or via `JOBFIT_CONFIG`, then `JOBFIT_*` environment
//! overrides. Files are partial: only the keys present are merged.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{JobfitError, Result};
use crate::pipeline::MatcherOptions;
use crate::scoring::ScoreWeights;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub keywords: KeywordsConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub taxonomy: TaxonomyConfig,
}

impl Config {
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("JOBFIT_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(JobfitError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else if let Some(global) = Self::load_global()? {
            config.merge_patch(global);
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Global config file, if the platform has a config dir and the
    /// file exists. A machine without either just runs on defaults.
    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("jobfit/config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| JobfitError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| JobfitError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.input {
            self.input.merge(patch);
        }
        if let Some(patch) = patch.keywords {
            self.keywords.merge(patch);
        }
        if let Some(patch) = patch.scoring {
            self.scoring.merge(patch);
        }
        if let Some(patch) = patch.taxonomy {
            self.taxonomy.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_usize("JOBFIT_INPUT_MIN_CHARS")? {
            self.input.min_chars = value;
        }

        if let Some(value) = env_usize("JOBFIT_KEYWORDS_TOP_K")? {
            self.keywords.top_k = value;
        }
        if let Some(value) = env_usize("JOBFIT_KEYWORDS_MAX_PHRASE_WORDS")? {
            self.keywords.max_phrase_words = value;
        }

        if let Some(value) = env_f32("JOBFIT_SCORING_SEMANTIC_WEIGHT")? {
            self.scoring.semantic_weight = value;
        }
        if let Some(value) = env_f32("JOBFIT_SCORING_KEYWORD_WEIGHT")? {
            self.scoring.keyword_weight = value;
        }
        if let Some(value) = env_string("JOBFIT_SCORING_EMBEDDING_BACKEND") {
            self.scoring.embedding_backend = value;
        }
        if let Some(value) = env_usize("JOBFIT_SCORING_EMBEDDING_DIMS")? {
            self.scoring.embedding_dims = value;
        }

        if let Some(value) = env_string("JOBFIT_TAXONOMY_PATH") {
            self.taxonomy.path = Some(PathBuf::from(value));
        }

        Ok(())
    }

    /// Pipeline tunables derived from this config.
    #[must_use]
    pub fn matcher_options(&self) -> MatcherOptions {
        MatcherOptions {
            weights: ScoreWeights {
                semantic: self.scoring.semantic_weight,
                keyword: self.scoring.keyword_weight,
            },
            keyword_top_k: self.keywords.top_k,
            keyword_max_words: self.keywords.max_phrase_words,
            min_input_chars: self.input.min_chars,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Texts shorter than this (in chars, after trimming) are rejected.
    #[serde(default)]
    pub min_chars: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { min_chars: 20 }
    }
}

impl InputConfig {
    fn merge(&mut self, patch: InputPatch) {
        if let Some(value) = patch.min_chars {
            self.min_chars = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordsConfig {
    /// How many ranked keywords to keep from a job description.
    #[serde(default)]
    pub top_k: usize,
    /// Longest candidate phrase, in words.
    #[serde(default)]
    pub max_phrase_words: usize,
}

impl Default for KeywordsConfig {
    fn default() -> Self {
        Self {
            top_k: 20,
            max_phrase_words: 3,
        }
    }
}

impl KeywordsConfig {
    fn merge(&mut self, patch: KeywordsPatch) {
        if let Some(value) = patch.top_k {
            self.top_k = value;
        }
        if let Some(value) = patch.max_phrase_words {
            self.max_phrase_words = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub semantic_weight: f32,
    #[serde(default)]
    pub keyword_weight: f32,
    #[serde(default)]
    pub embedding_backend: String,
    #[serde(default)]
    pub embedding_dims: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            semantic_weight: 0.6,
            keyword_weight: 0.4,
            embedding_backend: "hash".to_string(),
            embedding_dims: 384,
        }
    }
}

impl ScoringConfig {
    fn merge(&mut self, patch: ScoringPatch) {
        if let Some(value) = patch.semantic_weight {
            self.semantic_weight = value;
        }
        if let Some(value) = patch.keyword_weight {
            self.keyword_weight = value;
        }
        if let Some(value) = patch.embedding_backend {
            self.embedding_backend = value;
        }
        if let Some(value) = patch.embedding_dims {
            self.embedding_dims = value;
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxonomyConfig {
    /// Taxonomy JSON file. The built-in taxonomy is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl TaxonomyConfig {
    fn merge(&mut self, patch: TaxonomyPatch) {
        if let Some(value) = patch.path {
            self.path = Some(value);
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub input: Option<InputPatch>,
    pub keywords: Option<KeywordsPatch>,
    pub scoring: Option<ScoringPatch>,
    pub taxonomy: Option<TaxonomyPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct InputPatch {
    pub min_chars: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct KeywordsPatch {
    pub top_k: Option<usize>,
    pub max_phrase_words: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ScoringPatch {
    pub semantic_weight: Option<f32>,
    pub keyword_weight: Option<f32>,
    pub embedding_backend: Option<String>,
    pub embedding_dims: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct TaxonomyPatch {
    pub path: Option<PathBuf>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_usize(key: &str) -> Result<Option<usize>> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<usize>()
            .map(Some)
            .map_err(|err| JobfitError::Config(format!("invalid {key} value {value}: {err}"))),
        Err(_) => Ok(None),
    }
}

fn env_f32(key: &str) -> Result<Option<f32>> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<f32>()
            .map(Some)
            .map_err(|err| JobfitError::Config(format!("invalid {key} value {value}: {err}"))),
        Err(_) => Ok(None),
    }
}
