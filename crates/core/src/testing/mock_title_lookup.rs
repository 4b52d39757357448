//! Mock title lookup for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::lookup::{normalize_imdb_id, LookupError, MovieTitle, TitleLookup};

/// Mock implementation of the TitleLookup trait.
///
/// Titles are keyed by IMDb id without the `tt` prefix, so lookups with and
/// without the prefix hit the same entry.
#[derive(Debug)]
pub struct MockTitleLookup {
    titles: Arc<RwLock<HashMap<String, MovieTitle>>>,
    /// Recorded lookups (ids as passed in).
    lookups: Arc<RwLock<Vec<String>>>,
    /// If set, the next lookup will fail with this error.
    next_error: Arc<RwLock<Option<LookupError>>>,
}

impl Default for MockTitleLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTitleLookup {
    pub fn new() -> Self {
        Self {
            titles: Arc::new(RwLock::new(HashMap::new())),
            lookups: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Register a title for an IMDb id.
    pub async fn add_title(&self, imdb_id: &str, title: MovieTitle) {
        self.titles
            .write()
            .await
            .insert(normalize_imdb_id(imdb_id).to_string(), title);
    }

    /// Get all recorded lookups.
    pub async fn recorded_lookups(&self) -> Vec<String> {
        self.lookups.read().await.clone()
    }

    pub async fn lookup_count(&self) -> usize {
        self.lookups.read().await.len()
    }

    /// Configure the next lookup to fail with the given error.
    pub async fn set_next_error(&self, error: LookupError) {
        *self.next_error.write().await = Some(error);
    }
}

#[async_trait]
impl TitleLookup for MockTitleLookup {
    async fn lookup(&self, imdb_id: &str) -> Result<Option<MovieTitle>, LookupError> {
        self.lookups.write().await.push(imdb_id.to_string());

        if let Some(err) = self.next_error.write().await.take() {
            return Err(err);
        }

        Ok(self
            .titles
            .read()
            .await
            .get(normalize_imdb_id(imdb_id))
            .cloned())
    }
}
