//! JSON API.

use axum::{
    Json,
    extract::{Multipart, Path, Query, State, multipart::MultipartRejection},
    response::IntoResponse,
};
use rfpa_core::{AnalysisSummary, StoredAnalysis};
use serde::Deserialize;
use tracing::info;

use crate::error::WebError;
use crate::handlers::upload::{process_upload, read_file_field};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
}

/// POST /api/analyze
pub async fn api_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, WebError> {
    let upload = read_file_field(multipart).await?;
    let processed = process_upload(&state, upload).await?;
    info!("API analysis {} stored for {}", processed.id, processed.filename);
    Ok(Json(processed.analysis))
}

/// GET /api/analyses?limit=N
pub async fn api_list_analyses(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<AnalysisSummary>>, WebError> {
    let limit = query.limit.unwrap_or(state.config.storage.recent_limit);
    let recent = state.with_store(|store| store.recent_analyses(limit))?;
    Ok(Json(recent))
}

/// GET /api/analyses/{id}
pub async fn api_show_analysis(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<StoredAnalysis>, WebError> {
    state
        .with_store(|store| store.get_analysis(id))?
        .map(Json)
        .ok_or(WebError::NotFound)
}
