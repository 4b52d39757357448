//! OMDb (Open Movie Database) API client.
//!
//! OMDb answers every lookup with HTTP 200; unknown ids come back as
//! `{"Response": "False", "Error": "..."}`.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{normalize_imdb_id, LookupError, MovieTitle, TitleLookup};
use crate::config::OmdbConfig;
use crate::metrics::record_external_request;

const SERVICE: &str = "omdb";

/// OMDb API client.
pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    /// Create a new OMDb client.
    pub fn new(config: &OmdbConfig) -> Result<Self, LookupError> {
        if config.api_key.is_empty() {
            return Err(LookupError::NotConfigured(
                "OMDb API key is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    async fn fetch(&self, imdb_id: &str) -> Result<Option<MovieTitle>, LookupError> {
        let id = format!("tt{}", normalize_imdb_id(imdb_id));
        let url = format!("{}/", self.base_url);

        debug!("OMDb lookup: id={}", id);

        let response = self
            .client
            .get(&url)
            .query(&[("i", id.as_str()), ("apikey", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if status == 401 {
            return Err(LookupError::NotConfigured(
                "Invalid OMDb API key".to_string(),
            ));
        }
        if status == 429 {
            return Err(LookupError::RateLimitExceeded);
        }
        if status == 404 {
            return Err(LookupError::NotFound(format!("IMDb ID {}", id)));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LookupError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body: OmdbResponse = response.json().await.map_err(|e| {
            LookupError::ParseError(format!("Failed to parse OMDb response: {}", e))
        })?;

        let title = body.into_movie_title();
        match &title {
            Some(t) => debug!("OMDb found title: '{}' ({:?})", t.title, t.year),
            None => debug!("OMDb has no title for {}", id),
        }
        Ok(title)
    }
}

#[async_trait]
impl TitleLookup for OmdbClient {
    async fn lookup(&self, imdb_id: &str) -> Result<Option<MovieTitle>, LookupError> {
        let started = Instant::now();
        let result = self.fetch(imdb_id).await;
        record_external_request(SERVICE, result.is_ok(), started.elapsed().as_secs_f64());

        if let Err(e) = &result {
            warn!("OMDb lookup for {} failed: {}", imdb_id, e);
        }
        result
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OmdbResponse {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    year: Option<String>,
    #[serde(default, rename = "Type")]
    kind: Option<String>,
    #[serde(default)]
    response: Option<String>,
}

impl OmdbResponse {
    fn into_movie_title(self) -> Option<MovieTitle> {
        if self.response.as_deref() != Some("True") {
            return None;
        }
        let title = self.title.filter(|t| !t.trim().is_empty())?;
        Some(MovieTitle {
            title,
            year: self.year,
            kind: self.kind,
        })
    }
}
