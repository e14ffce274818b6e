//! Analysis Orchestrator — file → text → profile → {jobs, insights} → stored result.
//!
//! Recommendation and insight generation depend only on the profile and run
//! concurrently. Nothing is persisted unless every stage succeeds.

use chrono::Utc;
use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

use crate::analysis::insights::generate_insights;
use crate::analysis::profile::extract_profile;
use crate::analysis::recommendations::recommend_jobs;
use crate::extraction::{extract_upload, ExtractError};
use crate::llm_client::{CompletionModel, LlmError};
use crate::models::analysis::AnalysisResult;
use crate::store::{DocumentStore, StoreError};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Extraction(#[from] ExtractError),

    #[error("Profile extraction failed: {0}")]
    Profile(#[source] LlmError),

    #[error("Job recommendation failed: {0}")]
    Recommendations(#[source] LlmError),

    #[error("Career insight generation failed: {0}")]
    Insights(#[source] LlmError),

    #[error("Failed to store analysis: {0}")]
    Persistence(#[from] StoreError),
}

impl AnalysisError {
    /// True when the upload itself could not be understood.
    pub fn is_bad_input(&self) -> bool {
        match self {
            AnalysisError::Extraction(_) => true,
            AnalysisError::Profile(e) => e.is_model_response(),
            _ => false,
        }
    }
}

/// Runs the full pipeline for one uploaded file.
pub async fn analyze_upload(
    file_name: &str,
    data: Vec<u8>,
    llm: &dyn CompletionModel,
    store: &dyn DocumentStore,
) -> Result<AnalysisResult, AnalysisError> {
    let size = data.len();
    let text = extract_upload(file_name, data).await?;
    info!(file_name, size, chars = text.len(), "Extracted resume text");

    analyze_text(&text, llm, store).await
}

/// Runs the LLM stages on already-extracted text and stores the result.
pub async fn analyze_text(
    text: &str,
    llm: &dyn CompletionModel,
    store: &dyn DocumentStore,
) -> Result<AnalysisResult, AnalysisError> {
    let profile = extract_profile(text, llm)
        .await
        .map_err(AnalysisError::Profile)?;

    let (jobs, insights) = tokio::try_join!(
        async {
            recommend_jobs(&profile, llm)
                .await
                .map_err(AnalysisError::Recommendations)
        },
        async {
            generate_insights(&profile, llm)
                .await
                .map_err(AnalysisError::Insights)
        },
    )?;

    let analysis = AnalysisResult {
        id: Uuid::new_v4(),
        resume: profile,
        jobs,
        insights,
        created_at: Utc::now(),
    };

    store.insert_analysis(&analysis).await.map_err(|e| {
        error!("Failed to persist analysis {}: {e}", analysis.id);
        AnalysisError::Persistence(e)
    })?;

    info!(analysis_id = %analysis.id, "Analysis complete");
    Ok(analysis)
}
