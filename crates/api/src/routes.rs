use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/cache/status", get(handlers::get_status))
        .route("/cache/list", get(handlers::list_entries))
        .route("/cache/buckets", get(handlers::list_buckets))
        .route("/cache/fill", post(handlers::record_fill))
        .route("/cache/hit", post(handlers::record_hit))
        .route("/cache/miss", post(handlers::record_miss))
        .route("/purge", delete(handlers::purge_single))
        .route("/purge/bucket/{bucket}", delete(handlers::purge_bucket))
        .route("/purge/all", delete(handlers::purge_all))
        .route("/purge/history", get(handlers::get_history))
        .route("/stats/overview", get(handlers::get_overview))
        .route("/stats/bandwidth", get(handlers::get_bandwidth))
        .route("/stats/top-files", get(handlers::get_top_files))
        .route(
            "/stats/cache-performance",
            get(handlers::get_cache_performance),
        )
        .with_state(state)
}
