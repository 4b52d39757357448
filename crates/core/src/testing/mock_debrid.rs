//! Mock debrid client for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::lookup::{ActiveStream, DebridClient, LookupError};

/// Mock implementation of the DebridClient trait.
#[derive(Debug)]
pub struct MockDebridClient {
    stream: Arc<RwLock<Option<ActiveStream>>>,
    calls: Arc<AtomicUsize>,
    /// If set, the next call will fail with this error.
    next_error: Arc<RwLock<Option<LookupError>>>,
}

impl Default for MockDebridClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDebridClient {
    /// Create a mock with no active stream.
    pub fn new() -> Self {
        Self {
            stream: Arc::new(RwLock::new(None)),
            calls: Arc::new(AtomicUsize::new(0)),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Set (or clear) the active stream.
    pub async fn set_stream(&self, stream: Option<ActiveStream>) {
        *self.stream.write().await = stream;
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Configure the next call to fail with the given error.
    pub async fn set_next_error(&self, error: LookupError) {
        *self.next_error.write().await = Some(error);
    }
}

#[async_trait]
impl DebridClient for MockDebridClient {
    async fn active_stream(&self) -> Result<Option<ActiveStream>, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(err) = self.next_error.write().await.take() {
            return Err(err);
        }

        Ok(self.stream.read().await.clone())
    }
}
