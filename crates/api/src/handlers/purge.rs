use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use cinder_cdn_domain::{DomainError, ObjectKey};
use serde::Deserialize;
use tracing::{debug, error, instrument};

use crate::{dto::PurgeRecordResponse, state::AppState};

#[derive(Deserialize, Debug)]
pub struct PurgeParams {
    pub path: String,
}

#[derive(Deserialize, Debug)]
pub struct ConfirmParams {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Deserialize, Debug)]
pub struct HistoryParams {
    pub limit: Option<u32>,
}

fn map_purge_error(e: DomainError) -> (StatusCode, String) {
    match e {
        DomainError::InvalidConfirmation => (
            StatusCode::BAD_REQUEST,
            "full purge requires confirm=true".to_string(),
        ),
        DomainError::InvalidKey(_) => (StatusCode::BAD_REQUEST, e.to_string()),
        other => {
            error!(error = %other, "Purge request failed");
            (StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
        }
    }
}

#[instrument(skip(state), name = "api_purge_single")]
pub async fn purge_single(
    State(state): State<AppState>,
    Query(params): Query<PurgeParams>,
) -> Result<Json<PurgeRecordResponse>, (StatusCode, String)> {
    let key = ObjectKey::parse(&params.path)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let record = state
        .purge_coordinator
        .purge_single(key)
        .await
        .map_err(map_purge_error)?;

    debug!(
        files = record.files_purged,
        bytes = record.bytes_freed,
        "Single purge completed"
    );
    Ok(Json(record.into()))
}

#[instrument(skip(state), name = "api_purge_bucket")]
pub async fn purge_bucket(
    State(state): State<AppState>,
    Path(bucket): Path<String>,
) -> Result<Json<PurgeRecordResponse>, (StatusCode, String)> {
    let record = state
        .purge_coordinator
        .purge_bucket(&bucket)
        .await
        .map_err(map_purge_error)?;

    debug!(
        files = record.files_purged,
        bytes = record.bytes_freed,
        success = record.success,
        "Bucket purge completed"
    );
    Ok(Json(record.into()))
}

#[instrument(skip(state), name = "api_purge_all")]
pub async fn purge_all(
    State(state): State<AppState>,
    Query(params): Query<ConfirmParams>,
) -> Result<Json<PurgeRecordResponse>, (StatusCode, String)> {
    let record = state
        .purge_coordinator
        .purge_all(params.confirm)
        .await
        .map_err(map_purge_error)?;

    debug!(
        files = record.files_purged,
        bytes = record.bytes_freed,
        success = record.success,
        "Full purge completed"
    );
    Ok(Json(record.into()))
}

#[instrument(skip(state), name = "api_purge_history")]
pub async fn get_history(
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> Result<Json<Vec<PurgeRecordResponse>>, (StatusCode, String)> {
    match state.get_history.execute(params.limit.unwrap_or(100)).await {
        Ok(records) => Ok(Json(records.into_iter().map(Into::into).collect())),
        Err(e) => {
            error!(error = %e, "Failed to load purge history");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
