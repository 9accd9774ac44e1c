//! jobfit - resume / job-description match scoring.
//!
//! The library is a pure scoring pipeline: segment a resume, parse a
//! job description, score the pair on a semantic axis and a keyword
//! axis, fuse the scores, and report taxonomy-categorized skill gaps.
//! The CLI in `main.rs` is a thin shell over [`pipeline::Matcher`].

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod gaps;
pub mod job;
pub mod pipeline;
pub mod resume;
pub mod scoring;
pub mod taxonomy;
pub mod test_utils;
pub mod utils;

pub use error::{JobfitError, Result};
