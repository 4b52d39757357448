use std::sync::Arc;
use std::time::Instant;

use titulky_core::{Config, DebridClient, Ranker, SanitizedConfig, TitleLookup};

/// Shared application state
pub struct AppState {
    config: Config,
    ranker: Ranker,
    title_lookup: Option<Arc<dyn TitleLookup>>,
    debrid: Option<Arc<dyn DebridClient>>,
    started_at: Instant,
}

impl AppState {
    pub fn new(
        config: Config,
        title_lookup: Option<Arc<dyn TitleLookup>>,
        debrid: Option<Arc<dyn DebridClient>>,
    ) -> Self {
        let ranker = Ranker::with_config(config.ranking.clone());
        Self {
            config,
            ranker,
            title_lookup,
            debrid,
            started_at: Instant::now(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn ranker(&self) -> &Ranker {
        &self.ranker
    }

    pub fn title_lookup(&self) -> Option<&Arc<dyn TitleLookup>> {
        self.title_lookup.as_ref()
    }

    pub fn debrid(&self) -> Option<&Arc<dyn DebridClient>> {
        self.debrid.as_ref()
    }

    /// Seconds since the state was created.
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
