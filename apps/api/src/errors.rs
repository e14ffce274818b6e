use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::pipeline::AnalysisError;
use crate::store::StoreError;

/// Message returned when an analysis fails for reasons outside the upload.
pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze resume. Please try again.";

/// Message returned when the model could not make sense of the document.
pub const UNREADABLE_RESUME_MESSAGE: &str =
    "The document could not be understood as a resume. Please check the file and try again.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Client-facing 400; the message is shown verbatim.
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] StoreError),

    /// Any server-side failure of the analysis pipeline.
    #[error("Analysis error: {0}")]
    Analysis(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        if !err.is_bad_input() {
            return AppError::Analysis(err.to_string());
        }
        match err {
            AnalysisError::Extraction(e) => AppError::BadRequest(e.to_string()),
            other => {
                tracing::warn!("Resume could not be parsed into a profile: {other}");
                AppError::BadRequest(UNREADABLE_RESUME_MESSAGE.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Analysis(msg) => {
                tracing::error!("Analysis error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "ANALYSIS_ERROR",
                    ANALYSIS_FAILED_MESSAGE.to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
