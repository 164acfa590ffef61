//! Game configuration, environment-driven like the rest of the stack.

use serde::Deserialize;

use protocol::RetryPolicy;

/// Inference endpoint for the completion backend.
#[derive(Debug, Clone, Deserialize)]
pub struct Endpoint {
    pub url: String,
    pub model: String,
    pub api_key: Option<String>,
}

/// Top-level game configuration.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// OpenAI-compatible completion endpoint.
    pub endpoint: Endpoint,
    /// Allowed relation vocabulary (opaque, handed to the prompts verbatim).
    pub relation_set: String,
    /// Forbidden-pattern rule (opaque, handed to the prompts verbatim).
    pub forbidden_patterns: String,
    /// Number of rounds to play. Always positive.
    pub max_rounds: u32,
    /// Author-turn retry budget and inter-attempt delay.
    pub author_retry: RetryPolicy,
    /// Token budget per completion call.
    pub max_tokens: u32,
    /// Sampling temperature for the backend.
    pub temperature: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            endpoint: Endpoint {
                url: std::env::var("DEBATE_ENDPOINT_URL")
                    .unwrap_or_else(|_| "http://localhost:8080/v1".into()),
                model: std::env::var("DEBATE_MODEL")
                    .unwrap_or_else(|_| "mistral-7b-instruct-v0.1".into()),
                api_key: std::env::var("DEBATE_API_KEY").ok(),
            },
            relation_set: std::env::var("DEBATE_RELATION_SET")
                .unwrap_or_else(|_| "ClausalR(2,2)".into()),
            forbidden_patterns: std::env::var("DEBATE_FORBIDDEN_PATTERNS")
                .unwrap_or_else(|_| "TRUE".into()),
            max_rounds: positive_from_env("DEBATE_MAX_ROUNDS", 5),
            author_retry: RetryPolicy::new(
                positive_from_env("DEBATE_MAX_AUTHOR_RETRIES", 3),
                std::env::var("DEBATE_RETRY_DELAY_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(1_000),
            ),
            max_tokens: positive_from_env("DEBATE_MAX_TOKENS", 300),
            temperature: std::env::var("DEBATE_TEMPERATURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.7),
        }
    }
}

/// Parse a positive integer from the environment, falling back on absence,
/// garbage, or zero.
fn positive_from_env(var: &str, default: u32) -> u32 {
    std::env::var(var)
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_from_env_fallbacks() {
        // Unset variable falls back.
        assert_eq!(positive_from_env("DEBATE_TEST_UNSET_VAR", 5), 5);
    }

    #[test]
    fn test_default_config_is_usable() {
        // Don't touch process env in tests; just check the fallback values.
        let config = GameConfig::default();
        assert!(config.max_rounds >= 1);
        assert!(config.author_retry.max_attempts >= 1);
        assert!(config.max_tokens >= 1);
    }
}
