use std::sync::Arc;

use crate::cli::OutputMode;
use crate::config::Config;
use crate::error::Result;
use crate::pipeline::Matcher;
use crate::scoring::{Embedder, build_embedder};
use crate::taxonomy::SkillTaxonomy;

/// Shared state handed to every command: resolved config, the loaded
/// taxonomy, and the embedding backend.
pub struct AppContext {
    pub config: Config,
    pub taxonomy: Arc<SkillTaxonomy>,
    pub embedder: Arc<dyn Embedder>,
    pub output_mode: OutputMode,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;

        // CLI flag wins over config file; built-in taxonomy is the fallback.
        let taxonomy_path = cli
            .taxonomy
            .as_deref()
            .or(config.taxonomy.path.as_deref());
        let taxonomy = match taxonomy_path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading taxonomy");
                SkillTaxonomy::load(path)?
            }
            None => SkillTaxonomy::builtin()?,
        };

        let embedder = build_embedder(
            &config.scoring.embedding_backend,
            config.scoring.embedding_dims,
        )?;

        Ok(Self {
            config,
            taxonomy: Arc::new(taxonomy),
            embedder,
            output_mode: cli.output_mode(),
            verbosity: cli.verbose,
        })
    }

    /// A matcher wired up with this context's taxonomy, embedder, and
    /// config-derived options.
    #[must_use]
    pub fn matcher(&self) -> Matcher {
        Matcher::new(
            Arc::clone(&self.taxonomy),
            Arc::clone(&self.embedder),
            self.config.matcher_options(),
        )
    }
}
