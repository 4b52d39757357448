//! Ranking endpoint.
//!
//! Resolves the movie title and the target signature from whatever the
//! caller knows, ranks the candidates and labels the top window.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use titulky_core::{
    compose_label, resolve_target, CandidateSubtitle, DataSource, RankedSubtitle,
    ScoreBreakdown, TargetContext, TechnicalSignature,
};

use crate::state::AppState;

/// Request body for `POST /api/v1/rank`.
#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub candidates: Vec<CandidateSubtitle>,
    /// What is known about the video being played.
    #[serde(default)]
    pub target: Option<TargetContext>,
    /// Movie title; looked up from `imdb_id` when absent.
    #[serde(default)]
    pub movie_title: Option<String>,
    #[serde(default)]
    pub imdb_id: Option<String>,
    /// Ask the debrid service for the real filename.
    #[serde(default)]
    pub use_debrid: bool,
    /// Size of the returned window (default: `addon.top_n`).
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RankedEntry {
    pub id: String,
    pub label: String,
    pub final_score: f64,
    pub source_score: f64,
    pub edition_bonus: f64,
    pub breakdown: ScoreBreakdown,
    pub signature: TechnicalSignature,
    pub candidate: CandidateSubtitle,
}

impl RankedEntry {
    fn new(ranked: RankedSubtitle, label: String) -> Self {
        Self {
            id: ranked.candidate.id.clone(),
            label,
            final_score: ranked.final_score,
            source_score: ranked.source_score(),
            edition_bonus: ranked.edition_bonus,
            breakdown: ranked.breakdown,
            signature: ranked.signature,
            candidate: ranked.candidate,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub target: TechnicalSignature,
    pub movie_title: Option<String>,
    /// Number of ranked candidates before the window was applied.
    pub total: usize,
    pub results: Vec<RankedEntry>,
}

/// Rank subtitle candidates against the video being played.
pub async fn rank_subtitles(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RankRequest>,
) -> Json<RankResponse> {
    let movie_title = resolve_movie_title(&state, &request).await;

    let mut context = request.target.clone().unwrap_or_default();
    if request.use_debrid && context.filename.is_none() {
        fill_from_debrid(&state, &mut context).await;
    }

    let target = resolve_target(&context, &state.config().ranking.target);
    let candidates: Vec<CandidateSubtitle> = request
        .candidates
        .into_iter()
        .map(CandidateSubtitle::with_cleaned_version_text)
        .collect();
    let ranked = state.ranker().rank(
        &candidates,
        &target,
        movie_title.as_deref().unwrap_or_default(),
    );

    let total = ranked.len();
    let limit = request
        .limit
        .filter(|limit| *limit > 0)
        .unwrap_or(state.config().addon.top_n);
    let high_confidence = target.data_source == DataSource::ExplicitMetadata;

    let results: Vec<RankedEntry> = ranked
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(position, ranked)| {
            let label = compose_label(&ranked, position == 0, high_confidence);
            RankedEntry::new(ranked, label)
        })
        .collect();

    info!(
        movie = movie_title.as_deref().unwrap_or("-"),
        provenance = target.data_source.as_str(),
        total,
        returned = results.len(),
        top = results.first().map(|r| r.label.as_str()).unwrap_or("-"),
        "Ranked subtitles"
    );

    Json(RankResponse {
        target,
        movie_title,
        total,
        results,
    })
}

async fn resolve_movie_title(state: &AppState, request: &RankRequest) -> Option<String> {
    if let Some(title) = request
        .movie_title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
    {
        return Some(title.to_string());
    }

    let imdb_id = request.imdb_id.as_deref()?;
    let lookup = state.title_lookup()?;

    match lookup.lookup(imdb_id).await {
        Ok(Some(found)) => Some(found.title),
        Ok(None) => {
            info!("No title found for {}", imdb_id);
            None
        }
        Err(e) => {
            warn!("Title lookup for {} failed, ranking without title: {}", imdb_id, e);
            None
        }
    }
}

async fn fill_from_debrid(state: &AppState, context: &mut TargetContext) {
    let Some(debrid) = state.debrid() else {
        warn!("Debrid requested but no debrid client is configured");
        return;
    };

    match debrid.active_stream().await {
        Ok(Some(stream)) => {
            info!("Using debrid filename: {}", stream.filename);
            let streamed = stream.to_target_context();
            context.filename = streamed.filename;
            // a size sent by the caller wins
            context.file_size_bytes = context.file_size_bytes.or(streamed.file_size_bytes);
        }
        Ok(None) => info!("No active debrid stream"),
        Err(e) => warn!("Debrid lookup failed, falling back: {}", e),
    }
}
