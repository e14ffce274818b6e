//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::info;

use crate::analysis::pipeline::analyze_upload;
use crate::errors::AppError;
use crate::models::analysis::AnalysisResult;
use crate::state::AppState;
use crate::store::RECENT_ANALYSES_LIMIT;

/// POST /api/analyze-resume
///
/// Multipart upload; the first field carrying a file name is the resume.
/// Runs the full pipeline and returns the stored analysis.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    let (file_name, data) = read_upload(&mut multipart).await?;
    info!(file_name = %file_name, size = data.len(), "Received resume upload");

    let analysis = analyze_upload(&file_name, data, state.llm.as_ref(), state.store.as_ref()).await?;
    Ok(Json(analysis))
}

/// GET /api/analyses
///
/// The most recent analyses, newest first.
pub async fn handle_list_analyses(
    State(state): State<AppState>,
) -> Result<Json<Vec<AnalysisResult>>, AppError> {
    let analyses = state.store.recent_analyses(RECENT_ANALYSES_LIMIT).await?;
    Ok(Json(analyses))
}

async fn read_upload(multipart: &mut Multipart) -> Result<(String, Vec<u8>), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart upload: {e}")))?
    {
        let Some(file_name) = field.file_name().map(str::to_owned) else {
            continue;
        };
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read uploaded file: {e}")))?;
        return Ok((file_name, data.to_vec()));
    }

    Err(AppError::BadRequest(
        "No file uploaded. Please attach a PDF, DOCX, or TXT resume.".to_string(),
    ))
}
