//! Recommendation Stage — a candidate profile to a batch of job recommendations.

use std::collections::HashSet;

use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::prompts::{fill_template, JOB_RECOMMENDATIONS_PROMPT};
use crate::analysis::{clamp_score, experience_json};
use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, JSON_ONLY_SYSTEM};
use crate::llm_client::{complete_json, CompletionModel, LlmError};
use crate::models::analysis::{CandidateProfile, JobRecommendation};

/// Number of jobs requested per analysis.
pub const JOB_RECOMMENDATION_COUNT: usize = 5;

pub fn build_recommendations_prompt(profile: &CandidateProfile) -> String {
    let job_count = JOB_RECOMMENDATION_COUNT.to_string();
    let skills = profile.skills.join(", ");
    let experience = experience_json(profile);

    fill_template(
        JOB_RECOMMENDATIONS_PROMPT,
        &[
            ("job_count", job_count.as_str()),
            ("summary", profile.summary.as_str()),
            ("skills", skills.as_str()),
            ("experience", experience.as_str()),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    )
}

/// Returns the model's recommendations in the order it gave them.
pub async fn recommend_jobs(
    profile: &CandidateProfile,
    llm: &dyn CompletionModel,
) -> Result<Vec<JobRecommendation>, LlmError> {
    let prompt = build_recommendations_prompt(profile);
    let jobs: Vec<JobRecommendation> = complete_json(llm, &prompt, JSON_ONLY_SYSTEM).await?;
    let jobs = normalize_jobs(jobs);

    info!(count = jobs.len(), "Generated job recommendations");
    Ok(jobs)
}

/// Caps the batch at the requested size, gives every job a unique id and
/// clamps match scores.
fn normalize_jobs(mut jobs: Vec<JobRecommendation>) -> Vec<JobRecommendation> {
    if jobs.len() > JOB_RECOMMENDATION_COUNT {
        warn!(
            "Model returned {} job recommendations, keeping the first {}",
            jobs.len(),
            JOB_RECOMMENDATION_COUNT
        );
        jobs.truncate(JOB_RECOMMENDATION_COUNT);
    } else if jobs.len() < JOB_RECOMMENDATION_COUNT {
        warn!(
            "Model returned only {} of {} job recommendations",
            jobs.len(),
            JOB_RECOMMENDATION_COUNT
        );
    }

    let mut seen = HashSet::new();
    for job in &mut jobs {
        let id = job.id.trim();
        if id.is_empty() || !seen.insert(id.to_string()) {
            job.id = Uuid::new_v4().to_string();
            seen.insert(job.id.clone());
        }
        job.match_score = clamp_score(job.match_score, "matchScore");
    }
    jobs
}
