//! Full purge flow over the HTTP surface: fill, purge, audit trail.

use axum::http::StatusCode;
use serde_json::json;

#[path = "../common/mod.rs"]
mod common;
use common::TestApp;

// ============================================================================
// Single purge
// ============================================================================

#[tokio::test]
async fn fill_then_purge_single_removes_entry_and_logs() {
    let app = TestApp::start(&["images"]).await;

    let status = app
        .post_json("/api/cache/fill", json!({"path": "images/logo.png", "bytes": 2048}))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app.get("/api/cache/status?path=images/logo.png").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cached"], json!(true));
    assert_eq!(body["entry"]["size_bytes"], json!(2048));

    let (status, body) = app.delete("/api/purge?path=images/logo.png").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], json!("single"));
    assert_eq!(body["files_purged"], json!(1));
    assert_eq!(body["bytes_freed"], json!(2048));
    assert_eq!(body["success"], json!(true));

    let (_, body) = app.get("/api/cache/status?path=images/logo.png").await;
    assert_eq!(body["cached"], json!(false));

    assert_eq!(app.deleter.deleted().await, vec!["images/logo.png"]);

    let (status, history) = app.get("/api/purge/history").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history.as_array().unwrap().len(), 1);
    assert_eq!(history[0]["target"], json!("images/logo.png"));
}

#[tokio::test]
async fn purging_uncached_path_is_zero_effect_success() {
    let app = TestApp::start(&["images"]).await;

    let (status, body) = app.delete("/api/purge?path=images/ghost.png").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["files_purged"], json!(0));
    assert_eq!(body["bytes_freed"], json!(0));
    assert_eq!(body["success"], json!(true));

    // Nothing to delete, so the edge is never called.
    assert!(app.deleter.deleted().await.is_empty());
}

#[tokio::test]
async fn malformed_path_is_rejected() {
    let app = TestApp::start(&["images"]).await;

    let (status, _) = app.delete("/api/purge?path=no-bucket-separator").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// Bucket purge
// ============================================================================

#[tokio::test]
async fn bucket_purge_only_touches_that_bucket() {
    let app = TestApp::start(&["images", "videos"]).await;

    app.post_json("/api/cache/fill", json!({"path": "images/a.jpg", "bytes": 100}))
        .await;
    app.post_json("/api/cache/fill", json!({"path": "images/b.jpg", "bytes": 200}))
        .await;
    app.post_json("/api/cache/fill", json!({"path": "videos/c.mp4", "bytes": 900}))
        .await;

    let (status, body) = app.delete("/api/purge/bucket/images").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], json!("bucket"));
    assert_eq!(body["files_purged"], json!(2));
    assert_eq!(body["bytes_freed"], json!(300));
    assert_eq!(body["success"], json!(true));

    let (_, body) = app.get("/api/cache/status?path=videos/c.mp4").await;
    assert_eq!(body["cached"], json!(true));
    assert_eq!(app.index.len(), 1);
}

#[tokio::test]
async fn unknown_bucket_purge_is_noop_with_detail() {
    let app = TestApp::start(&["images"]).await;

    app.post_json("/api/cache/fill", json!({"path": "images/a.jpg", "bytes": 100}))
        .await;

    let (status, body) = app.delete("/api/purge/bucket/missing").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["files_purged"], json!(0));
    assert_eq!(body["success"], json!(true));
    assert!(body["error_detail"].as_str().unwrap().contains("missing"));
    assert_eq!(app.index.len(), 1);
}

// ============================================================================
// Full purge
// ============================================================================

#[tokio::test]
async fn purge_all_requires_confirmation() {
    let app = TestApp::start(&["images"]).await;

    app.post_json("/api/cache/fill", json!({"path": "images/a.jpg", "bytes": 100}))
        .await;

    let (status, _) = app.delete("/api/purge/all").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Rejected request leaves no trace: entry intact, no audit record.
    assert_eq!(app.index.len(), 1);
    let (_, history) = app.get("/api/purge/history").await;
    assert!(history.as_array().unwrap().is_empty());
    assert_eq!(app.deleter.clear_all_calls().await, 0);
}

#[tokio::test]
async fn confirmed_purge_all_clears_everything() {
    let app = TestApp::start(&["images", "videos"]).await;

    app.post_json("/api/cache/fill", json!({"path": "images/a.jpg", "bytes": 100}))
        .await;
    app.post_json("/api/cache/fill", json!({"path": "videos/b.mp4", "bytes": 900}))
        .await;

    let (status, body) = app.delete("/api/purge/all?confirm=true").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], json!("all"));
    assert_eq!(body["files_purged"], json!(2));
    assert_eq!(body["bytes_freed"], json!(1000));
    assert_eq!(body["success"], json!(true));

    assert_eq!(app.index.len(), 0);
    assert_eq!(app.deleter.clear_all_calls().await, 1);
}

// ============================================================================
// History
// ============================================================================

#[tokio::test]
async fn history_is_most_recent_first() {
    let app = TestApp::start(&["images"]).await;

    for name in ["a.jpg", "b.jpg", "c.jpg"] {
        app.post_json(
            "/api/cache/fill",
            json!({"path": format!("images/{name}"), "bytes": 10}),
        )
        .await;
        app.delete(&format!("/api/purge?path=images/{name}")).await;
    }

    let (_, history) = app.get("/api/purge/history?limit=2").await;
    let records = history.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["target"], json!("images/c.jpg"));
    assert_eq!(records[1]["target"], json!("images/b.jpg"));
}
