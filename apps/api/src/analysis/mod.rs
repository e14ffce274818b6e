// Resume analysis pipeline.
// Implements: profile extraction, job recommendations, career insights, orchestration.
// All LLM calls go through llm_client — no direct Anthropic calls here.

pub mod handlers;
pub mod insights;
pub mod pipeline;
pub mod profile;
pub mod prompts;
pub mod recommendations;

#[cfg(test)]
pub(crate) mod fixtures;

use tracing::warn;

use crate::models::analysis::CandidateProfile;

const SCORE_RANGE: std::ops::RangeInclusive<i64> = 0..=100;

/// Pins a model-reported score into 0..=100.
pub(crate) fn clamp_score(score: i64, field: &str) -> i64 {
    if SCORE_RANGE.contains(&score) {
        return score;
    }
    let clamped = score.clamp(*SCORE_RANGE.start(), *SCORE_RANGE.end());
    warn!("Model returned {field}={score}, clamped to {clamped}");
    clamped
}

/// Experience entries as compact JSON for embedding in prompts.
pub(crate) fn experience_json(profile: &CandidateProfile) -> String {
    serde_json::to_string(&profile.experience).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_score_keeps_in_range_values() {
        assert_eq!(clamp_score(0, "score"), 0);
        assert_eq!(clamp_score(85, "score"), 85);
        assert_eq!(clamp_score(100, "score"), 100);
    }

    #[test]
    fn test_clamp_score_pins_out_of_range_values() {
        assert_eq!(clamp_score(101, "score"), 100);
        assert_eq!(clamp_score(-1, "score"), 0);
    }

    #[test]
    fn test_experience_json_is_an_array() {
        let json = experience_json(&fixtures::jane_profile());
        assert!(json.starts_with('['));
        assert!(json.contains(r#""duration":"5 years""#));
    }
}
