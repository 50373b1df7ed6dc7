//! Provider configuration loaded once at startup.
//!
//! Configuration is via environment variables:
//! - `OPENAI_API_KEY` - required, used for research, planning and explanations
//! - `GROQ_API_KEY` - required, used for question rewriting and verification
//! - `OPENAI_BASE_URL` / `GROQ_BASE_URL` - optional endpoint overrides
//! - `OPENAI_MODEL` / `GROQ_MODEL` - optional model overrides

use thiserror::Error;

pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_GROQ_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4.1-mini";
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";

pub const OPENAI_TEMPERATURE: f32 = 0.2;
pub const GROQ_TEMPERATURE: f32 = 0.3;

/// Startup configuration errors. All of them are fatal.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing {0}. Set it in the environment before starting AutoAssist.")]
    MissingVar(&'static str),
}

/// Connection settings for one LLM provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub openai: ProviderConfig,
    pub groq: ProviderConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let openai_key = get("OPENAI_API_KEY").ok_or(ConfigError::MissingVar("OPENAI_API_KEY"))?;
        let groq_key = get("GROQ_API_KEY").ok_or(ConfigError::MissingVar("GROQ_API_KEY"))?;

        Ok(Self {
            openai: ProviderConfig {
                api_key: openai_key,
                base_url: get("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_OPENAI_URL.to_string()),
                model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
                temperature: OPENAI_TEMPERATURE,
            },
            groq: ProviderConfig {
                api_key: groq_key,
                base_url: get("GROQ_BASE_URL").unwrap_or_else(|| DEFAULT_GROQ_URL.to_string()),
                model: get("GROQ_MODEL").unwrap_or_else(|| DEFAULT_GROQ_MODEL.to_string()),
                temperature: GROQ_TEMPERATURE,
            },
        })
    }
}
