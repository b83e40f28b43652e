use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use cinder_cdn_domain::{DomainError, ObjectKey};
use serde::Deserialize;
use tracing::{debug, error, instrument};

use crate::{
    dto::{CacheListResponse, CacheStatusResponse, TrafficEventRequest},
    state::AppState,
};

#[derive(Deserialize, Debug)]
pub struct StatusParams {
    pub path: String,
}

#[derive(Deserialize, Debug)]
pub struct ListParams {
    pub bucket: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

fn parse_key(path: &str) -> Result<ObjectKey, (StatusCode, String)> {
    ObjectKey::parse(path).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))
}

#[instrument(skip(state), name = "api_cache_status")]
pub async fn get_status(
    State(state): State<AppState>,
    Query(params): Query<StatusParams>,
) -> Result<Json<CacheStatusResponse>, (StatusCode, String)> {
    let key = parse_key(&params.path)?;
    let entry = state.get_status.execute(&key);

    Ok(Json(CacheStatusResponse {
        path: key.to_string(),
        cached: entry.is_some(),
        entry: entry.map(Into::into),
    }))
}

#[instrument(skip(state), name = "api_cache_list")]
pub async fn list_entries(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<CacheListResponse> {
    let limit = params.limit.unwrap_or(100);
    let offset = params.offset.unwrap_or(0);

    let (entries, total) = state
        .list_entries
        .execute(params.bucket.as_deref(), limit, offset);

    debug!(returned = entries.len(), total, "Cache entries listed");

    Json(CacheListResponse {
        entries: entries.into_iter().map(Into::into).collect(),
        total,
        limit,
        offset,
    })
}

#[instrument(skip(state), name = "api_cache_buckets")]
pub async fn list_buckets(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, (StatusCode, String)> {
    match state.list_buckets.execute().await {
        Ok(buckets) => Ok(Json(buckets)),
        Err(e) => {
            error!(error = %e, "Failed to list buckets");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

#[instrument(skip(state), name = "api_cache_fill")]
pub async fn record_fill(
    State(state): State<AppState>,
    Json(event): Json<TrafficEventRequest>,
) -> Result<StatusCode, (StatusCode, String)> {
    let key = parse_key(&event.path)?;
    state.record_fill.execute(key, event.bytes).await;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state), name = "api_cache_hit")]
pub async fn record_hit(
    State(state): State<AppState>,
    Json(event): Json<TrafficEventRequest>,
) -> Result<StatusCode, (StatusCode, String)> {
    let key = parse_key(&event.path)?;
    match state.record_hit.execute(key, event.bytes).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(DomainError::UnknownKey(key)) => Err((
            StatusCode::NOT_FOUND,
            format!("no cached entry for {key}"),
        )),
        Err(e) => {
            error!(error = %e, "Failed to record cache hit");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

#[instrument(skip(state), name = "api_cache_miss")]
pub async fn record_miss(
    State(state): State<AppState>,
    Json(event): Json<TrafficEventRequest>,
) -> Result<StatusCode, (StatusCode, String)> {
    let key = parse_key(&event.path)?;
    match state.record_miss.execute(key, event.bytes).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(DomainError::UnknownKey(key)) => Err((
            StatusCode::NOT_FOUND,
            format!("no cached entry for {key}"),
        )),
        Err(e) => {
            error!(error = %e, "Failed to record cache miss");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
