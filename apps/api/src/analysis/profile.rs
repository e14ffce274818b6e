//! Profile Extraction — resume text to a structured `CandidateProfile`.

use tracing::info;

use crate::analysis::prompts::{fill_template, PROFILE_PARSE_PROMPT};
use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, JSON_ONLY_SYSTEM};
use crate::llm_client::{complete_json, CompletionModel, LlmError};
use crate::models::analysis::CandidateProfile;

pub fn build_profile_prompt(resume_text: &str) -> String {
    fill_template(
        PROFILE_PARSE_PROMPT,
        &[
            ("resume_text", resume_text),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    )
}

/// Asks the model for a profile. Empty text is sent as-is; the model decides.
pub async fn extract_profile(
    resume_text: &str,
    llm: &dyn CompletionModel,
) -> Result<CandidateProfile, LlmError> {
    let prompt = build_profile_prompt(resume_text);
    let profile: CandidateProfile = complete_json(llm, &prompt, JSON_ONLY_SYSTEM).await?;

    info!(
        skills = profile.skills.len(),
        experience = profile.experience.len(),
        education = profile.education.len(),
        "Extracted candidate profile"
    );
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixtures::JANE_PROFILE;
    use crate::llm_client::testing::ScriptedModel;

    #[test]
    fn test_prompt_embeds_text_and_forbids_fences() {
        let prompt = build_profile_prompt("Jane Doe, Python developer");
        assert!(prompt.contains("Jane Doe, Python developer"));
        assert!(prompt.contains("\"highlights\": [\"string\"]"));
        assert!(prompt.contains("no code fences"));
        assert!(!prompt.contains("{resume_text}"));
    }

    #[test]
    fn test_resume_text_with_placeholder_syntax_is_left_alone() {
        let prompt = build_profile_prompt("skills: {json_only}");
        assert!(prompt.contains("skills: {json_only}"));
    }

    #[tokio::test]
    async fn test_plain_and_fenced_completions_give_same_profile() {
        let fenced = format!("```json\n{JANE_PROFILE}\n```");
        let model = ScriptedModel::new([JANE_PROFILE.to_string(), fenced]);

        let plain = extract_profile("Jane Doe", &model).await.unwrap();
        let from_fence = extract_profile("Jane Doe", &model).await.unwrap();

        assert_eq!(plain, from_fence);
        assert_eq!(plain.name, "Jane Doe");
        assert_eq!(plain.experience[0].company, "Acme");
    }

    #[tokio::test]
    async fn test_truncated_json_is_model_response_error() {
        let model = ScriptedModel::new([r#"{"name": "Jane Doe", "email": "#]);
        let err = extract_profile("Jane Doe", &model).await.unwrap_err();
        assert!(matches!(err, LlmError::ModelResponse(_)));
    }

    #[tokio::test]
    async fn test_missing_required_field_is_model_response_error() {
        let model = ScriptedModel::new([r#"{"name": "Jane Doe", "email": "j@x.io"}"#]);
        let err = extract_profile("Jane Doe", &model).await.unwrap_err();
        assert!(err.is_model_response());
    }

    #[tokio::test]
    async fn test_empty_text_still_calls_model() {
        let model = ScriptedModel::new([JANE_PROFILE]);
        extract_profile("", &model).await.unwrap();
        assert_eq!(model.prompt_count(), 1);
    }
}
