//! Insight Stage — a candidate profile to an aggregate career insight.

use tracing::{info, warn};

use crate::analysis::prompts::{fill_template, CAREER_INSIGHTS_PROMPT};
use crate::analysis::{clamp_score, experience_json};
use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, JSON_ONLY_SYSTEM};
use crate::llm_client::{complete_json, CompletionModel, LlmError};
use crate::models::analysis::{CandidateProfile, CareerInsight, MARKET_DEMAND_LEVELS};

pub fn build_insights_prompt(profile: &CandidateProfile) -> String {
    let levels = MARKET_DEMAND_LEVELS
        .iter()
        .map(|level| format!("\"{level}\""))
        .collect::<Vec<_>>()
        .join(", ");

    let skills = profile.skills.join(", ");
    let experience = experience_json(profile);

    fill_template(
        CAREER_INSIGHTS_PROMPT,
        &[
            ("skills", skills.as_str()),
            ("experience", experience.as_str()),
            ("market_demand_levels", levels.as_str()),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    )
}

/// `marketDemand` is constrained by the prompt only; other values pass through.
pub async fn generate_insights(
    profile: &CandidateProfile,
    llm: &dyn CompletionModel,
) -> Result<CareerInsight, LlmError> {
    let prompt = build_insights_prompt(profile);
    let mut insight: CareerInsight = complete_json(llm, &prompt, JSON_ONLY_SYSTEM).await?;

    insight.score = clamp_score(insight.score, "score");
    if !insight.has_known_market_demand() {
        warn!(
            "Model returned unexpected marketDemand '{}'",
            insight.market_demand
        );
    }

    info!(
        score = insight.score,
        market_demand = %insight.market_demand,
        "Generated career insights"
    );
    Ok(insight)
}
