/// LLM Client — the single point of entry for all Claude API calls.
///
/// ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
/// Stages talk to a `CompletionModel` and parse through `complete_json`.
///
/// Model: claude-sonnet-4-5 (hardcoded — do not make configurable to prevent drift)
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all LLM calls.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 4096;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,

    /// The completion was not valid JSON for the requested shape.
    #[error("Model response did not match the expected schema: {0}")]
    ModelResponse(#[from] serde_json::Error),
}

impl LlmError {
    /// True when the provider answered but the answer could not be parsed.
    pub fn is_model_response(&self) -> bool {
        matches!(self, LlmError::ModelResponse(_) | LlmError::EmptyContent)
    }
}

/// Prompt in, completion text out. Implemented by `LlmClient`; tests script it.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Wraps the Anthropic Messages API. Built once at startup and shared.
/// A failed call is returned as-is; there is no retry loop.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
        })
    }

    /// Makes a raw call to the Claude API, returning the full response object.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<LlmResponse, LlmError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<AnthropicError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        debug!(
            "LLM call succeeded: input_tokens={}, output_tokens={}",
            llm_response.usage.input_tokens, llm_response.usage.output_tokens
        );

        Ok(llm_response)
    }
}

#[async_trait]
impl CompletionModel for LlmClient {
    async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let response = self.call(prompt, system).await?;
        response
            .text()
            .map(str::to_owned)
            .ok_or(LlmError::EmptyContent)
    }
}

/// Structured completion: asks the model, strips any code fence, and
/// deserializes the remainder as `T`. The prompt must demand JSON.
pub async fn complete_json<T: DeserializeOwned>(
    model: &dyn CompletionModel,
    prompt: &str,
    system: &str,
) -> Result<T, LlmError> {
    let completion = model.complete(prompt, system).await?;
    parse_completion(&completion)
}

/// Parses one completion into `T`, fenced or not.
pub fn parse_completion<T: DeserializeOwned>(completion: &str) -> Result<T, LlmError> {
    let body = strip_json_fences(completion);
    Ok(serde_json::from_str(body)?)
}

/// Strips a surrounding ``` fence from LLM output.
/// The opening line (including any language tag) is dropped along with the
/// last closing fence.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if !text.starts_with("```") {
        return text;
    }
    let body = match text.split_once('\n') {
        Some((_, rest)) => rest,
        None => text.trim_start_matches('`'),
    };
    let body = match body.rsplit_once("```") {
        Some((inner, _)) => inner,
        None => body,
    };
    body.trim()
}

#[cfg(test)]
pub mod testing {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    /// Replays canned completions in order and records every prompt it saw.
    #[derive(Default)]
    pub struct ScriptedModel {
        replies: Mutex<VecDeque<Result<String, LlmError>>>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl ScriptedModel {
        pub fn new<I, S>(replies: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                replies: Mutex::new(replies.into_iter().map(|r| Ok(r.into())).collect()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn push_error(&self, err: LlmError) {
            self.replies.lock().unwrap().push_back(Err(err));
        }

        pub fn prompt_count(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CompletionModel for ScriptedModel {
        async fn complete(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(LlmError::EmptyContent))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "  {\"key\": \"value\"}\n";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_unterminated_fence() {
        let input = "```json\n[1, 2, 3]";
        assert_eq!(strip_json_fences(input), "[1, 2, 3]");
    }

    #[test]
    fn test_strip_json_fences_surrounding_whitespace() {
        let input = "\n\n```JSON\n{\"a\": 1}\n```\n  ";
        assert_eq!(strip_json_fences(input), "{\"a\": 1}");
    }

    #[test]
    fn test_parse_completion_fenced_and_plain_agree() {
        let plain: Value = parse_completion("{\"a\": [1, 2]}").unwrap();
        let fenced: Value = parse_completion("```json\n{\"a\": [1, 2]}\n```").unwrap();
        assert_eq!(plain, fenced);
    }

    #[test]
    fn test_parse_completion_truncated_json_is_model_response_error() {
        let err = parse_completion::<Value>("{\"a\": [1, 2").unwrap_err();
        assert!(matches!(err, LlmError::ModelResponse(_)));
        assert!(err.is_model_response());
    }

    #[test]
    fn test_llm_response_text_picks_first_text_block() {
        let response: LlmResponse = serde_json::from_str(
            r#"{
                "content": [
                    {"type": "tool_use"},
                    {"type": "text", "text": "hello"}
                ],
                "usage": {"input_tokens": 3, "output_tokens": 1}
            }"#,
        )
        .unwrap();
        assert_eq!(response.text(), Some("hello"));
    }

    #[test]
    fn test_api_error_is_not_model_response() {
        let err = LlmError::Api {
            status: 500,
            message: "overloaded".to_string(),
        };
        assert!(!err.is_model_response());
    }

    #[tokio::test]
    async fn test_complete_json_uses_model_output() {
        let model = testing::ScriptedModel::new(["```json\n{\"ok\": true}\n```"]);
        let value: Value = complete_json(&model, "prompt", "system").await.unwrap();
        assert_eq!(value["ok"], Value::Bool(true));
        assert_eq!(model.prompt_count(), 1);
    }
}
