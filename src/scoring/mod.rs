//! Scoring: semantic similarity, keyword coverage, and score fusion.

pub mod combine;
pub mod embedding;
pub mod keyword;

pub use combine::{ScoreWeights, combine_scores, round2};
pub use embedding::{
    DEFAULT_DIMS, Embedder, HashEmbedder, build_embedder, cosine_similarity, embed_chunks,
    embed_document, line_chunks, mean_pool, semantic_similarity,
};
pub use keyword::{keyword_coverage, resume_terms};
