//! Crate-wide error type and result alias.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, JobfitError>;

#[derive(Debug, Error)]
pub enum JobfitError {
    /// Configuration file could not be read, parsed, or merged.
    #[error("config error: {0}")]
    Config(String),

    /// Taxonomy file unreadable, unparseable, or empty after filtering.
    /// Fatal at startup: matching without a taxonomy is meaningless.
    #[error("taxonomy error: {0}")]
    Taxonomy(String),

    /// Embedding backend could not be constructed. Fatal at startup:
    /// no scoring may run without a working model.
    #[error("embedding model error: {0}")]
    Model(String),

    /// User-facing validation failure (empty or too-short input text,
    /// unreadable input file). No partial computation is attempted.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
