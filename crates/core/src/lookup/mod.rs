//! External collaborators that feed the ranking engine.
//!
//! - [`TitleLookup`] turns an IMDb id into a movie title (OMDb)
//! - [`DebridClient`] reports the file the user is currently streaming (Real-Debrid)
//!
//! Both are optional at runtime. Callers treat a failure as missing data and
//! fall back to lower-provenance inputs.

mod omdb;
mod real_debrid;

pub use omdb::OmdbClient;
pub use real_debrid::RealDebridClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::signature::TargetContext;

/// Errors that can occur when talking to an external service.
#[derive(Debug, Error)]
pub enum LookupError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Resource not found (404).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Client not configured (missing or rejected API key).
    #[error("Client not configured: {0}")]
    NotConfigured(String),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded, please wait before retrying")]
    RateLimitExceeded,
}

/// Movie or series title resolved from an IMDb id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieTitle {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    /// "movie", "series", "episode".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// The file currently being streamed through the debrid service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveStream {
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
}

impl ActiveStream {
    /// Target context carrying the real filename and size.
    pub fn to_target_context(&self) -> TargetContext {
        TargetContext {
            file_size_bytes: self.size_bytes,
            ..TargetContext::from_filename(self.filename.clone())
        }
    }
}

/// Resolves titles for IMDb ids.
#[async_trait]
pub trait TitleLookup: Send + Sync {
    /// Look up a title. `Ok(None)` when the id is unknown to the service.
    ///
    /// The id is accepted with or without the `tt` prefix.
    async fn lookup(&self, imdb_id: &str) -> Result<Option<MovieTitle>, LookupError>;
}

/// Reports what the user is streaming right now.
#[async_trait]
pub trait DebridClient: Send + Sync {
    /// The first active stream, if any.
    async fn active_stream(&self) -> Result<Option<ActiveStream>, LookupError>;
}

/// Strip an optional `tt` prefix and surrounding whitespace.
pub fn normalize_imdb_id(imdb_id: &str) -> &str {
    let id = imdb_id.trim();
    id.strip_prefix("tt").unwrap_or(id)
}
