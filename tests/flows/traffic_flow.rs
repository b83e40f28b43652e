//! Traffic accounting flow: fills, hits and misses feeding the stats surface.

use axum::http::StatusCode;
use serde_json::json;

#[path = "../common/mod.rs"]
mod common;
use common::TestApp;

// ============================================================================
// Hit / miss recording
// ============================================================================

#[tokio::test]
async fn hits_and_misses_update_the_entry() {
    let app = TestApp::start(&["images"]).await;

    app.post_json("/api/cache/fill", json!({"path": "images/a.jpg", "bytes": 500}))
        .await;

    for _ in 0..3 {
        let status = app
            .post_json("/api/cache/hit", json!({"path": "images/a.jpg", "bytes": 500}))
            .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }
    let status = app
        .post_json("/api/cache/miss", json!({"path": "images/a.jpg", "bytes": 500}))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = app.get("/api/cache/status?path=images/a.jpg").await;
    assert_eq!(body["entry"]["hit_count"], json!(3));
    assert_eq!(body["entry"]["miss_count"], json!(1));
    assert!(body["entry"]["last_hit_at"].is_string());
    assert!(body["entry"]["last_miss_at"].is_string());
}

#[tokio::test]
async fn hit_on_unknown_key_is_not_found() {
    let app = TestApp::start(&["images"]).await;

    let status = app
        .post_json("/api/cache/hit", json!({"path": "images/ghost.jpg", "bytes": 10}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn list_filters_by_bucket_and_pages() {
    let app = TestApp::start(&["images", "videos"]).await;

    for i in 0..5 {
        app.post_json(
            "/api/cache/fill",
            json!({"path": format!("images/{i}.jpg"), "bytes": 100}),
        )
        .await;
    }
    app.post_json("/api/cache/fill", json!({"path": "videos/v.mp4", "bytes": 900}))
        .await;

    let (status, body) = app
        .get("/api/cache/list?bucket=images&limit=2&offset=2")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], json!(5));
    let entries = body["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    // Key-ordered page: offset 2 of 0..5 starts at "2.jpg".
    assert_eq!(entries[0]["key"], json!("images/2.jpg"));
    assert_eq!(entries[1]["key"], json!("images/3.jpg"));
}

#[tokio::test]
async fn bucket_listing_is_sorted() {
    let app = TestApp::start(&["videos", "images"]).await;

    let (status, body) = app.get("/api/cache/buckets").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["images", "videos"]));
}

// ============================================================================
// Stats surface
// ============================================================================

#[tokio::test]
async fn overview_combines_index_and_bandwidth() {
    let app = TestApp::start(&["images"]).await;

    app.post_json("/api/cache/fill", json!({"path": "images/a.jpg", "bytes": 1000}))
        .await;
    app.post_json("/api/cache/hit", json!({"path": "images/a.jpg", "bytes": 1000}))
        .await;
    app.post_json("/api/cache/hit", json!({"path": "images/a.jpg", "bytes": 1000}))
        .await;
    app.post_json("/api/cache/miss", json!({"path": "images/a.jpg", "bytes": 1000}))
        .await;

    let (status, body) = app.get("/api/stats/overview").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cached_entries"], json!(1));
    assert_eq!(body["cached_bytes"], json!(1000));
    let hit_ratio = body["hit_ratio"].as_f64().unwrap();
    assert!((hit_ratio - 200.0 / 3.0).abs() < 1e-9);
    assert!(body["bandwidth_last_24h_gb"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn bandwidth_series_is_contiguous() {
    let app = TestApp::start(&["images"]).await;

    app.post_json("/api/cache/fill", json!({"path": "images/a.jpg", "bytes": 100}))
        .await;
    app.post_json("/api/cache/hit", json!({"path": "images/a.jpg", "bytes": 100}))
        .await;

    let (status, body) = app.get("/api/stats/bandwidth?days=1").await;
    assert_eq!(status, StatusCode::OK);
    let points = body.as_array().unwrap();
    assert_eq!(points.len(), 24);
    // Only the current hour carries traffic; the rest are zero filler.
    assert!(points[23]["gb_sent"].as_f64().unwrap() > 0.0);
    assert_eq!(points[0]["gb_sent"], json!(0.0));
}

#[tokio::test]
async fn cache_performance_ranks_by_hits() {
    let app = TestApp::start(&["images"]).await;

    app.post_json("/api/cache/fill", json!({"path": "images/hot.jpg", "bytes": 100}))
        .await;
    app.post_json("/api/cache/fill", json!({"path": "images/cold.jpg", "bytes": 100}))
        .await;
    for _ in 0..5 {
        app.post_json("/api/cache/hit", json!({"path": "images/hot.jpg", "bytes": 100}))
            .await;
    }
    app.post_json("/api/cache/miss", json!({"path": "images/cold.jpg", "bytes": 100}))
        .await;

    let (status, body) = app.get("/api/stats/cache-performance").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["top_hits"][0]["key"], json!("images/hot.jpg"));
    let misses = body["recent_misses"].as_array().unwrap();
    assert_eq!(misses.len(), 1);
    assert_eq!(misses[0]["key"], json!("images/cold.jpg"));
}

#[tokio::test]
async fn top_files_reads_metadata_store() {
    let app = TestApp::start(&["images"]).await;

    sqlx::query(
        "INSERT INTO files (bucket, path, size_bytes, media_type, download_count, bytes_served) \
         VALUES ('images', 'popular.jpg', 100, 'image', 42, 4200), \
                ('images', 'quiet.jpg', 100, 'image', 1, 100)",
    )
    .execute(&app.pool)
    .await
    .unwrap();

    let (status, body) = app.get("/api/stats/top-files?limit=1").await;
    assert_eq!(status, StatusCode::OK);
    let files = body.as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["key"], json!("images/popular.jpg"));
    assert_eq!(files[0]["downloads"], json!(42));
}
