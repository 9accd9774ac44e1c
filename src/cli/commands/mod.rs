//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use std::io::Read;
use std::path::Path;

use clap::Subcommand;

pub mod analyze;
pub mod match_cmd;
pub mod taxonomy;

use crate::app::AppContext;
use crate::error::{JobfitError, Result};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Full analysis: score, skill gaps, tips, best-aligned lines
    Analyze(analyze::AnalyzeArgs),

    /// Score only (semantic, keyword, final)
    Match(match_cmd::MatchArgs),

    /// Inspect the skill taxonomy
    Taxonomy(taxonomy::TaxonomyArgs),
}

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Analyze(args) => analyze::run(ctx, args),
        Commands::Match(args) => match_cmd::run(ctx, args),
        Commands::Taxonomy(args) => taxonomy::run(ctx, args),
    }
}

/// Read a document from a file, or from stdin when the path is `-`.
pub fn read_document(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|err| JobfitError::InvalidInput(format!("read stdin: {err}")))?;
        return Ok(text);
    }
    std::fs::read_to_string(path)
        .map_err(|err| JobfitError::InvalidInput(format!("read {}: {err}", path.display())))
}
