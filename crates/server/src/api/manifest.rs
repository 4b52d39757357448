//! Stremio addon manifest.
//!
//! The manifest describes the addon; the `subtitles` resource itself is
//! served by the scraping front end, which calls `POST /api/v1/rank`.

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use titulky_core::AddonConfig;

use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub id: String,
    pub version: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub resources: Vec<String>,
    pub types: Vec<String>,
    pub id_prefixes: Vec<String>,
    pub catalogs: Vec<serde_json::Value>,
    pub behavior_hints: BehaviorHints,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorHints {
    pub adult: bool,
    pub p2p: bool,
    pub configurable: bool,
    pub configuration_required: bool,
}

impl From<&AddonConfig> for Manifest {
    fn from(addon: &AddonConfig) -> Self {
        Self {
            id: addon.id.clone(),
            version: addon.version.clone(),
            name: addon.name.clone(),
            description: addon.description.clone(),
            logo: addon.logo.clone(),
            resources: vec!["subtitles".to_string()],
            types: addon.types.clone(),
            id_prefixes: addon.id_prefixes.clone(),
            catalogs: Vec::new(),
            behavior_hints: BehaviorHints::default(),
        }
    }
}

pub async fn get_manifest(State(state): State<Arc<AppState>>) -> Json<Manifest> {
    Json(Manifest::from(&state.config().addon))
}
