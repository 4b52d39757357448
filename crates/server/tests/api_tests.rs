//! In-process API tests with mocked collaborators.

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{fixtures, TestFixture};
use titulky_core::{lookup::LookupError, Config};

fn inception_candidates() -> Value {
    serde_json::to_value(fixtures::inception_candidates()).unwrap()
}

fn result_ids(body: &Value) -> Vec<String> {
    body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Health, config and addon protocol
// =============================================================================

#[tokio::test]
async fn test_health() {
    let fixture = TestFixture::new();

    let response = fixture.get("/api/v1/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

#[tokio::test]
async fn test_config_hides_api_keys() {
    let config = titulky_core::load_config_from_str(
        r#"
[title_lookup]
api_key = "omdb-secret"

[debrid]
api_key = "rd-secret"
"#,
    )
    .unwrap();
    let fixture = TestFixture::with_config(config, true);

    let response = fixture.get("/api/v1/config").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["server"]["port"], 3000);
    assert_eq!(response.body["title_lookup"]["api_key_configured"], true);
    assert_eq!(response.body["debrid"]["api_key_configured"], true);

    let text = response.body.to_string();
    assert!(!text.contains("omdb-secret"));
    assert!(!text.contains("rd-secret"));
}

#[tokio::test]
async fn test_config_omits_unconfigured_clients() {
    let fixture = TestFixture::new();

    let response = fixture.get("/api/v1/config").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("title_lookup").is_none());
    assert!(response.body.get("debrid").is_none());
    assert_eq!(response.body["ranking"]["noise_threshold"], 2.0);
}

#[tokio::test]
async fn test_manifest() {
    let fixture = TestFixture::new();

    let response = fixture.get("/manifest.json").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], "com.titulky.subtitles");
    assert_eq!(response.body["resources"], json!(["subtitles"]));
    assert_eq!(response.body["types"], json!(["movie", "series"]));
    assert_eq!(response.body["idPrefixes"], json!(["tt"]));
}

#[tokio::test]
async fn test_ping() {
    let fixture = TestFixture::new();

    let response = fixture.get("/ping").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "alive");
    assert!(response.body["timestamp"].as_str().is_some());
    assert!(response.body["uptime"].as_u64().is_some());
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let fixture = TestFixture::new();

    let (status, text) = fixture.get_text("/metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert!(text.contains("titulky_http_requests_in_flight"));
    assert!(text.contains("titulky_rankings_total"));
}

// =============================================================================
// Ranking
// =============================================================================

#[tokio::test]
async fn test_rank_with_explicit_filename() {
    let fixture = TestFixture::new();

    let response = fixture
        .post(
            "/api/v1/rank",
            json!({
                "candidates": inception_candidates(),
                "movie_title": "Inception",
                "target": { "filename": "Inception.2010.1080p.BluRay.x264-SPARKS.mkv" }
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 5);
    assert_eq!(response.body["target"]["data_source"], "explicit-metadata");
    assert_eq!(response.body["target"]["source"], "bluray");
    assert_eq!(
        result_ids(&response.body),
        vec!["101", "104", "103", "102", "105"]
    );

    let top = &response.body["results"][0];
    assert_eq!(top["label"], "🏆 Inception [BLURAY]");
    assert_eq!(top["final_score"], 100.0);
    assert_eq!(top["source_score"], 100.0);
    assert_eq!(top["candidate"]["video_version_text"], "Inception.2010.1080p.BluRay.x264-SPARKS");
}

#[tokio::test]
async fn test_rank_respects_limit() {
    let fixture = TestFixture::new();

    let response = fixture
        .post(
            "/api/v1/rank",
            json!({
                "candidates": inception_candidates(),
                "movie_title": "Inception",
                "target": { "filename": "Inception.2010.1080p.BluRay.x264-SPARKS.mkv" },
                "limit": 2
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 5);
    assert_eq!(result_ids(&response.body), vec!["101", "104"]);
}

#[tokio::test]
async fn test_rank_default_window_uses_top_n() {
    let mut config = Config::default();
    config.addon.top_n = 3;
    let fixture = TestFixture::with_config(config, false);

    let response = fixture
        .post(
            "/api/v1/rank",
            json!({
                "candidates": inception_candidates(),
                "movie_title": "Inception"
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 5);
    assert_eq!(response.body["results"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_rank_empty_candidates() {
    let fixture = TestFixture::new();

    let response = fixture
        .post("/api/v1/rank", json!({ "candidates": [] }))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 0);
    assert_eq!(response.body["results"], json!([]));
    assert_eq!(response.body["target"]["confidence"], 0);
}

#[tokio::test]
async fn test_rank_resolves_title_from_imdb_id() {
    let fixture = TestFixture::new();
    fixture
        .title_lookup
        .add_title("tt1375666", fixtures::movie_title("Inception", "2010"))
        .await;

    let response = fixture
        .post(
            "/api/v1/rank",
            json!({
                "candidates": inception_candidates(),
                "imdb_id": "tt1375666",
                "target": { "filename": "Inception.2010.1080p.BluRay.x264-SPARKS.mkv" }
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["movie_title"], "Inception");
    // the sequel is penalised only when the title is known
    assert_eq!(response.body["results"][4]["id"], "105");
    assert_eq!(response.body["results"][4]["breakdown"]["title_similarity"], 60.0);
    assert_eq!(fixture.title_lookup.recorded_lookups().await, vec!["tt1375666"]);
}

#[tokio::test]
async fn test_explicit_movie_title_skips_lookup() {
    let fixture = TestFixture::new();

    let response = fixture
        .post(
            "/api/v1/rank",
            json!({
                "candidates": inception_candidates(),
                "movie_title": "Inception",
                "imdb_id": "tt1375666"
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["movie_title"], "Inception");
    assert_eq!(fixture.title_lookup.lookup_count().await, 0);
}

#[tokio::test]
async fn test_title_lookup_failure_degrades() {
    let fixture = TestFixture::new();
    fixture
        .title_lookup
        .set_next_error(LookupError::RateLimitExceeded)
        .await;

    let response = fixture
        .post(
            "/api/v1/rank",
            json!({
                "candidates": inception_candidates(),
                "imdb_id": "tt1375666"
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["movie_title"].is_null());
    assert_eq!(response.body["total"], 5);
}

#[tokio::test]
async fn test_rank_uses_debrid_stream() {
    let fixture = TestFixture::new();
    fixture
        .debrid
        .set_stream(Some(fixtures::active_stream(
            "Inception.2010.1080p.BluRay.x264-SPARKS.mkv",
            12 * 1024 * 1024 * 1024,
        )))
        .await;

    let response = fixture
        .post(
            "/api/v1/rank",
            json!({
                "candidates": inception_candidates(),
                "movie_title": "Inception",
                "use_debrid": true
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(fixture.debrid.call_count(), 1);
    assert_eq!(response.body["target"]["data_source"], "explicit-metadata");
    assert_eq!(
        response.body["target"]["original_text"],
        "Inception.2010.1080p.BluRay.x264-SPARKS.mkv"
    );
    assert_eq!(response.body["results"][0]["id"], "101");
}

#[tokio::test]
async fn test_debrid_size_fills_missing_source() {
    let fixture = TestFixture::new();
    fixture
        .debrid
        .set_stream(Some(fixtures::active_stream(
            "Inception.2010.1080p.x264-GRP.mkv",
            60 * 1024 * 1024 * 1024,
        )))
        .await;

    let response = fixture
        .post(
            "/api/v1/rank",
            json!({
                "candidates": inception_candidates(),
                "movie_title": "Inception",
                "use_debrid": true
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["target"]["data_source"], "explicit-metadata");
    assert_eq!(response.body["target"]["source"], "remux");
}

#[tokio::test]
async fn test_debrid_keeps_caller_file_size() {
    let fixture = TestFixture::new();
    // 0.1 GB/h would be estimated as a cam recording
    fixture
        .debrid
        .set_stream(Some(fixtures::active_stream(
            "Inception.2010.1080p.x264-GRP.mkv",
            200 * 1024 * 1024,
        )))
        .await;

    let response = fixture
        .post(
            "/api/v1/rank",
            json!({
                "candidates": inception_candidates(),
                "movie_title": "Inception",
                "use_debrid": true,
                "target": { "file_size_bytes": 60u64 * 1024 * 1024 * 1024 }
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(fixture.debrid.call_count(), 1);
    assert_eq!(
        response.body["target"]["original_text"],
        "Inception.2010.1080p.x264-GRP.mkv"
    );
    assert_eq!(response.body["target"]["source"], "remux");
}

#[tokio::test]
async fn test_debrid_not_called_when_filename_given() {
    let fixture = TestFixture::new();

    let response = fixture
        .post(
            "/api/v1/rank",
            json!({
                "candidates": inception_candidates(),
                "movie_title": "Inception",
                "use_debrid": true,
                "target": { "filename": "Inception.2010.720p.WEB-DL.H264.mkv" }
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(fixture.debrid.call_count(), 0);
    assert_eq!(response.body["target"]["source"], "web-dl");
}

#[tokio::test]
async fn test_debrid_failure_falls_back_to_stream_title() {
    let fixture = TestFixture::new();
    fixture
        .debrid
        .set_next_error(LookupError::NotConfigured("bad token".to_string()))
        .await;

    let response = fixture
        .post(
            "/api/v1/rank",
            json!({
                "candidates": inception_candidates(),
                "movie_title": "Inception",
                "use_debrid": true,
                "target": { "stream_title": "Inception 2010 1080p BluRay" }
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["target"]["data_source"], "title-guess");
    assert_eq!(response.body["target"]["confidence"], 50);
}

#[tokio::test]
async fn test_debrid_requested_without_client() {
    let fixture = TestFixture::with_config(Config::default(), false);

    let response = fixture
        .post(
            "/api/v1/rank",
            json!({
                "candidates": inception_candidates(),
                "use_debrid": true
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["target"]["data_source"], "title-guess");
    assert_eq!(fixture.debrid.call_count(), 0);
}

#[tokio::test]
async fn test_rank_cleans_version_text() {
    let fixture = TestFixture::new();

    let response = fixture
        .post(
            "/api/v1/rank",
            json!({
                "candidates": [{
                    "id": "7",
                    "title": "Inception",
                    "popularity": 10,
                    "video_version_text": " Inception.2010.1080p.BluRay.x264-SPARKS (CZ) "
                }],
                "movie_title": "Inception"
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["results"][0]["candidate"]["video_version_text"],
        "Inception.2010.1080p.BluRay.x264-SPARKS CZ"
    );
    assert_eq!(response.body["results"][0]["signature"]["source"], "bluray");
}

#[tokio::test]
async fn test_rank_malformed_json() {
    let fixture = TestFixture::new();

    let response = fixture.post_raw("/api/v1/rank", "{not json").await;

    assert!(response.status.is_client_error());
}

#[tokio::test]
async fn test_rank_missing_candidates() {
    let fixture = TestFixture::new();

    let response = fixture
        .post("/api/v1/rank", json!({ "movie_title": "Inception" }))
        .await;

    assert!(response.status.is_client_error());
}
