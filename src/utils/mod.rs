//! Utility functions and helpers.

pub mod format;
pub mod text;

// Re-exports for convenience
pub use format::*;
pub use text::*;
