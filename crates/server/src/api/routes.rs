use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{handlers, manifest, middleware::metrics_middleware, ranking};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Ranking
        .route("/rank", post(ranking::rank_subtitles))
        .with_state(Arc::clone(&state));

    // Addon protocol and ops endpoints
    Router::new()
        .route("/manifest.json", get(manifest::get_manifest))
        .route("/ping", get(handlers::ping))
        .route("/metrics", get(handlers::metrics))
        .with_state(state)
        .nest("/api/v1", api_routes)
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        // Stremio clients fetch the manifest cross-origin
        .layer(CorsLayer::permissive())
}
