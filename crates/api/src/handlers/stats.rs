use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::{error, instrument};

use crate::{
    dto::{BandwidthPointResponse, CachePerformanceResponse, OverviewResponse, TopFileResponse},
    state::AppState,
};

#[derive(Deserialize, Debug)]
pub struct BandwidthParams {
    pub days: Option<u32>,
}

#[derive(Deserialize, Debug)]
pub struct TopFilesParams {
    pub limit: Option<u32>,
}

#[instrument(skip(state), name = "api_stats_overview")]
pub async fn get_overview(
    State(state): State<AppState>,
) -> Result<Json<OverviewResponse>, (StatusCode, String)> {
    match state.get_overview.execute().await {
        Ok(overview) => Ok(Json(overview.into())),
        Err(e) => {
            error!(error = %e, "Failed to build stats overview");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

#[instrument(skip(state), name = "api_stats_bandwidth")]
pub async fn get_bandwidth(
    State(state): State<AppState>,
    Query(params): Query<BandwidthParams>,
) -> Result<Json<Vec<BandwidthPointResponse>>, (StatusCode, String)> {
    match state.get_bandwidth.execute(params.days.unwrap_or(7)).await {
        Ok(series) => Ok(Json(series.into_iter().map(Into::into).collect())),
        Err(e) => {
            error!(error = %e, "Failed to build bandwidth series");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

#[instrument(skip(state), name = "api_stats_top_files")]
pub async fn get_top_files(
    State(state): State<AppState>,
    Query(params): Query<TopFilesParams>,
) -> Result<Json<Vec<TopFileResponse>>, (StatusCode, String)> {
    match state.get_top_files.execute(params.limit.unwrap_or(10)).await {
        Ok(files) => Ok(Json(files.into_iter().map(Into::into).collect())),
        Err(e) => {
            error!(error = %e, "Failed to load top files");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

#[instrument(skip(state), name = "api_stats_cache_performance")]
pub async fn get_cache_performance(State(state): State<AppState>) -> Json<CachePerformanceResponse> {
    Json(state.get_cache_performance.execute().into())
}
