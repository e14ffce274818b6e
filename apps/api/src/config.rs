use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 120;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    pub llm_timeout: Duration,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: optional_env("PORT", DEFAULT_PORT)
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            llm_timeout: Duration::from_secs(
                optional_env("LLM_TIMEOUT_SECS", DEFAULT_LLM_TIMEOUT_SECS)
                    .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            max_upload_bytes: optional_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => Ok(raw.trim().parse::<T>()?),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_env_falls_back_to_default() {
        let value: u64 = optional_env("RESUME_INSIGHT_TEST_UNSET_VAR", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_optional_env_rejects_garbage() {
        std::env::set_var("RESUME_INSIGHT_TEST_BAD_PORT", "not-a-port");
        let result: Result<u16> = optional_env("RESUME_INSIGHT_TEST_BAD_PORT", 8080);
        assert!(result.is_err());
    }

    #[test]
    fn test_optional_env_parses_trimmed_value() {
        std::env::set_var("RESUME_INSIGHT_TEST_TIMEOUT", " 30 ");
        let value: u64 = optional_env("RESUME_INSIGHT_TEST_TIMEOUT", 120).unwrap();
        assert_eq!(value, 30);
    }
}
