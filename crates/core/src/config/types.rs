use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::matcher::RankingConfig;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub addon: AddonConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    /// OMDb title lookup (optional; without it only explicit movie titles are used)
    #[serde(default)]
    pub title_lookup: Option<OmdbConfig>,
    /// Real-Debrid streaming info (optional)
    #[serde(default)]
    pub debrid: Option<RealDebridConfig>,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    3000
}

/// Addon identity published in the manifest
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddonConfig {
    #[serde(default = "default_addon_id")]
    pub id: String,
    #[serde(default = "default_addon_name")]
    pub name: String,
    #[serde(default = "default_addon_version")]
    pub version: String,
    #[serde(default = "default_addon_description")]
    pub description: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default = "default_types")]
    pub types: Vec<String>,
    #[serde(default = "default_id_prefixes")]
    pub id_prefixes: Vec<String>,
    /// Number of ranked results returned per request
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_addon_id() -> String {
    "com.titulky.subtitles".to_string()
}

fn default_addon_name() -> String {
    "Titulky.com Subtitles".to_string()
}

fn default_addon_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_addon_description() -> String {
    "Czech and Slovak subtitles ranked by release compatibility".to_string()
}

fn default_types() -> Vec<String> {
    vec!["movie".to_string(), "series".to_string()]
}

fn default_id_prefixes() -> Vec<String> {
    vec!["tt".to_string()]
}

fn default_top_n() -> usize {
    6
}

impl Default for AddonConfig {
    fn default() -> Self {
        Self {
            id: default_addon_id(),
            name: default_addon_name(),
            version: default_addon_version(),
            description: default_addon_description(),
            logo: None,
            types: default_types(),
            id_prefixes: default_id_prefixes(),
            top_n: default_top_n(),
        }
    }
}

/// OMDb title lookup configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OmdbConfig {
    /// OMDb API key
    pub api_key: String,
    /// API base URL (default: "https://www.omdbapi.com")
    #[serde(default = "default_omdb_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

fn default_omdb_url() -> String {
    "https://www.omdbapi.com".to_string()
}

/// Real-Debrid configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RealDebridConfig {
    /// Real-Debrid API token
    pub api_key: String,
    /// API base URL (default: "https://api.real-debrid.com/rest/1.0")
    #[serde(default = "default_real_debrid_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

fn default_real_debrid_url() -> String {
    "https://api.real-debrid.com/rest/1.0".to_string()
}

fn default_timeout() -> u32 {
    10
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub addon: AddonConfig,
    pub ranking: RankingConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_lookup: Option<SanitizedClientConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debrid: Option<SanitizedClientConfig>,
}

/// Sanitized external client config (API key hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedClientConfig {
    pub base_url: String,
    pub api_key_configured: bool,
    pub timeout_secs: u32,
}

impl From<&OmdbConfig> for SanitizedClientConfig {
    fn from(config: &OmdbConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            api_key_configured: !config.api_key.is_empty(),
            timeout_secs: config.timeout_secs,
        }
    }
}

impl From<&RealDebridConfig> for SanitizedClientConfig {
    fn from(config: &RealDebridConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            api_key_configured: !config.api_key.is_empty(),
            timeout_secs: config.timeout_secs,
        }
    }
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            addon: config.addon.clone(),
            ranking: config.ranking.clone(),
            title_lookup: config.title_lookup.as_ref().map(SanitizedClientConfig::from),
            debrid: config.debrid.as_ref().map(SanitizedClientConfig::from),
        }
    }
}
