use std::sync::Arc;

use crate::analysis::Analyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Scoring pipeline. Built once at startup; tables and tokenizer are read-only.
    pub analyzer: Arc<Analyzer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let analyzer = Arc::new(
            Analyzer::new(config.top_n_roles).with_scratch_dir(config.scratch_dir.clone()),
        );
        Self { config, analyzer }
    }
}
