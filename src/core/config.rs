//! Environment-driven configuration
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial release with Groq/OpenAI credential discovery

use anyhow::{anyhow, Context, Result};
use std::env;
use std::time::Duration;

/// Groq's OpenAI-compatible endpoint (trailing slash required by the openai crate)
pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1/";
/// OpenAI's public endpoint
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1/";
/// Model used by the reference debate app
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";
pub const DEFAULT_TOPIC: &str = "Should AI replace teachers?";
pub const DEFAULT_MAX_TURNS: i64 = 6;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    /// Sampling temperature, provider default when unset
    pub temperature: Option<f32>,
    /// Per-request timeout for a single generation call
    pub request_timeout: Option<Duration>,
    pub default_topic: String,
    pub default_max_turns: i64,
    /// Override for the FOR persona instruction
    pub for_prompt: Option<String>,
    /// Override for the AGAINST persona instruction
    pub against_prompt: Option<String>,
    pub log_level: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the environment in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let (api_key, provider_url) = if let Some(key) = get("GROQ_API_KEY") {
            (key, GROQ_BASE_URL)
        } else if let Some(key) = get("OPENAI_API_KEY") {
            (key, OPENAI_BASE_URL)
        } else {
            return Err(anyhow!(
                "No API key configured: set GROQ_API_KEY or OPENAI_API_KEY"
            ));
        };

        let base_url = get("DEBATE_BASE_URL")
            .map(|url| if url.ends_with('/') { url } else { format!("{url}/") })
            .unwrap_or_else(|| provider_url.to_string());

        let temperature = get("DEBATE_TEMPERATURE")
            .map(|v| v.parse::<f32>())
            .transpose()
            .context("DEBATE_TEMPERATURE must be a number")?;

        let request_timeout = get("DEBATE_REQUEST_TIMEOUT_SECS")
            .map(|v| v.parse::<u64>())
            .transpose()
            .context("DEBATE_REQUEST_TIMEOUT_SECS must be a whole number of seconds")?
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        let default_max_turns = get("DEBATE_MAX_TURNS")
            .map(|v| v.parse::<i64>())
            .transpose()
            .context("DEBATE_MAX_TURNS must be an integer")?
            .unwrap_or(DEFAULT_MAX_TURNS);

        Ok(Config {
            api_key,
            base_url,
            model: get("DEBATE_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature,
            request_timeout,
            default_topic: get("DEBATE_TOPIC").unwrap_or_else(|| DEFAULT_TOPIC.to_string()),
            default_max_turns,
            for_prompt: get("DEBATE_FOR_PROMPT"),
            against_prompt: get("DEBATE_AGAINST_PROMPT"),
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }
}
