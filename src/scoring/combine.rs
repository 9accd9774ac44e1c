//! Weighted score fusion.

use serde::{Deserialize, Serialize};

/// Fusion weights for the two scoring axes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub semantic: f32,
    pub keyword: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self { semantic: 0.6, keyword: 0.4 }
    }
}

/// `final = semantic_weight * semantic + keyword_weight * keyword`,
/// rounded to two decimals at this boundary only, never internally.
#[must_use]
pub fn combine_scores(semantic: f32, keyword: f32, weights: ScoreWeights) -> f32 {
    round2(weights.semantic * semantic + weights.keyword * keyword).clamp(0.0, 1.0)
}

/// Round to two decimal places.
#[must_use]
pub fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
