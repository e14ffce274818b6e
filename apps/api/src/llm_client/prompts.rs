// Shared prompt constants.
// Each stage that needs LLM calls defines its own prompts alongside it.

/// System prompt that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Trailer appended to every structured prompt.
pub const JSON_ONLY_INSTRUCTION: &str =
    "Return ONLY valid JSON, no markdown formatting, no code fences and no additional text.";
