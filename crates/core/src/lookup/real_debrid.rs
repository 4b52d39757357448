//! Real-Debrid API client.
//!
//! Only the streaming info endpoint is used: it tells us the exact file the
//! user is playing, which gives the highest-confidence target signature.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{ActiveStream, DebridClient, LookupError};
use crate::config::RealDebridConfig;
use crate::metrics::record_external_request;

const SERVICE: &str = "real_debrid";

/// Real-Debrid API client.
pub struct RealDebridClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RealDebridClient {
    /// Create a new Real-Debrid client.
    pub fn new(config: &RealDebridConfig) -> Result<Self, LookupError> {
        if config.api_key.is_empty() {
            return Err(LookupError::NotConfigured(
                "Real-Debrid API token is required".to_string(),
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

    async fn fetch_active(&self) -> Result<Option<ActiveStream>, LookupError> {
        let url = format!("{}/streaming/active", self.base_url);

        debug!("Real-Debrid: fetching active stream");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if status == 401 || status == 403 {
            return Err(LookupError::NotConfigured(
                "Invalid Real-Debrid API token".to_string(),
            ));
        }
        if status == 429 {
            return Err(LookupError::RateLimitExceeded);
        }
        if status == 404 {
            return Err(LookupError::NotFound("streaming/active".to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LookupError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let entries: Vec<RdStreamEntry> = response.json().await.map_err(|e| {
            LookupError::ParseError(format!("Failed to parse streaming response: {}", e))
        })?;

        let stream = first_stream(entries);
        match &stream {
            Some(s) => debug!("Real-Debrid active stream: {}", s.filename),
            None => debug!("Real-Debrid: no active streams"),
        }
        Ok(stream)
    }
}

#[async_trait]
impl DebridClient for RealDebridClient {
    async fn active_stream(&self) -> Result<Option<ActiveStream>, LookupError> {
        let started = Instant::now();
        let result = self.fetch_active().await;
        record_external_request(SERVICE, result.is_ok(), started.elapsed().as_secs_f64());

        if let Err(e) = &result {
            warn!("Real-Debrid stream lookup failed: {}", e);
        }
        result
    }
}

#[derive(Debug, Deserialize)]
struct RdStreamEntry {
    #[serde(default)]
    filename: Option<String>,
    #[serde(default)]
    filesize: Option<u64>,
}

fn first_stream(entries: Vec<RdStreamEntry>) -> Option<ActiveStream> {
    let entry = entries.into_iter().next()?;
    let filename = entry.filename.filter(|f| !f.trim().is_empty())?;
    Some(ActiveStream {
        filename,
        size_bytes: entry.filesize.filter(|size| *size > 0),
    })
}
