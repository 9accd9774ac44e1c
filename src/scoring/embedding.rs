//! Hash embeddings and cosine similarity.
//!
//! FNV-1a feature hashing over token unigrams and bigrams. No ML
//! model dependencies, fully deterministic across runs and platforms,
//! which keeps scoring reproducible within the required tolerance.

use std::sync::Arc;

use rayon::prelude::*;

use crate::error::{JobfitError, Result};
use crate::utils::text::tokenize;

const FNV_PRIME: u64 = 0x100000001b3;
const FNV_OFFSET: u64 = 0xcbf29ce484222325;

/// Default embedding dimension.
pub const DEFAULT_DIMS: usize = 384;

/// Text-to-vector backend. Implementations must be deterministic for
/// identical input text.
pub trait Embedder: Send + Sync {
    fn dims(&self) -> usize;
    fn embed(&self, text: &str) -> Vec<f32>;
}

/// Hash embedder using FNV-1a
pub struct HashEmbedder {
    dims: usize,
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self { dims: DEFAULT_DIMS }
    }
}

impl HashEmbedder {
    /// Create embedder with specified dimension
    #[must_use]
    pub fn new(dims: usize) -> Self {
        Self { dims }
    }

    fn bump(&self, vector: &mut [f32], feature: &str) {
        let hash = fnv1a_hash(feature);
        let bucket = (hash % self.dims as u64) as usize;
        let sign = if hash >> 63 == 0 { 1.0 } else { -1.0 };
        vector[bucket] += sign;
    }
}

impl Embedder for HashEmbedder {
    fn dims(&self) -> usize {
        self.dims
    }

    /// Embed text into an L2-normalized vector. Empty or tokenless
    /// text embeds to the zero vector.
    fn embed(&self, text: &str) -> Vec<f32> {
        let tokens = tokenize(text);
        let mut vector = vec![0.0f32; self.dims];
        if tokens.is_empty() {
            return vector;
        }

        for token in &tokens {
            self.bump(&mut vector, token);
        }
        for pair in tokens.windows(2) {
            self.bump(&mut vector, &format!("{} {}", pair[0], pair[1]));
        }

        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }
        vector
    }
}

/// FNV-1a hash for individual features
fn fnv1a_hash(s: &str) -> u64 {
    let mut hash = FNV_OFFSET;
    for byte in s.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Construct the configured embedding backend. Unknown backends are a
/// startup failure, not a silent fallback.
pub fn build_embedder(backend: &str, dims: usize) -> Result<Arc<dyn Embedder>> {
    match backend {
        "hash" => {
            if dims == 0 {
                return Err(JobfitError::Model(
                    "embedding dims must be non-zero".to_string(),
                ));
            }
            Ok(Arc::new(HashEmbedder::new(dims)))
        }
        other => Err(JobfitError::Model(format!(
            "unknown embedding backend: {other}"
        ))),
    }
}

/// Non-empty trimmed lines, or the whole text when it has none.
#[must_use]
pub fn line_chunks(text: &str) -> Vec<String> {
    let lines: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(ToString::to_string)
        .collect();
    if lines.is_empty() { vec![text.to_string()] } else { lines }
}

/// Embed chunks in parallel. Output order matches input order.
#[must_use]
pub fn embed_chunks(embedder: &dyn Embedder, chunks: &[String]) -> Vec<Vec<f32>> {
    chunks.par_iter().map(|chunk| embedder.embed(chunk)).collect()
}

/// Average row vectors into one document vector, sequentially in row
/// order so summation is reproducible. Zero vector when empty.
#[must_use]
pub fn mean_pool(rows: &[Vec<f32>], dims: usize) -> Vec<f32> {
    let mut pooled = vec![0.0f32; dims];
    if rows.is_empty() {
        return pooled;
    }
    for row in rows {
        for (slot, value) in pooled.iter_mut().zip(row.iter()) {
            *slot += *value;
        }
    }
    let count = rows.len() as f32;
    for slot in &mut pooled {
        *slot /= count;
    }
    pooled
}

/// Embed a document: line chunks, parallel embed, mean pool.
#[must_use]
pub fn embed_document(embedder: &dyn Embedder, text: &str) -> Vec<f32> {
    let chunks = line_chunks(text);
    let rows = embed_chunks(embedder, &chunks);
    mean_pool(&rows, embedder.dims())
}

/// Compute cosine similarity between two embeddings
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Cosine clipped to [0,1]: negative similarity means no match.
#[must_use]
pub fn semantic_similarity(a: &[f32], b: &[f32]) -> f32 {
    cosine_similarity(a, b).clamp(0.0, 1.0)
}
