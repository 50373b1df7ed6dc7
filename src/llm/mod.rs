//! LLM provider clients.
//!
//! The pipeline only ever sees two narrow seams:
//! - [`ChatModel`]: system + user prompt in, one trimmed completion out.
//! - [`WebSearch`]: system + user prompt in, notes plus cited sources out.
//!
//! [`ChatCompletionsClient`] speaks the chat-completions dialect shared by
//! OpenAI and Groq. [`ResponsesClient`] drives OpenAI's responses endpoint
//! with the built-in `web_search` tool. Swapping either provider means
//! implementing the trait, not touching the agents.

mod chat;
mod responses;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

pub use chat::ChatCompletionsClient;
pub use responses::{extract_notes, ResponsesClient, FALLBACK_LIMIT};

/// Upstream provider errors. None of them are retried.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider rejected the API key")]
    Unauthorized,

    #[error("Provider rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Provider error {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("Provider returned no completion text")]
    EmptyCompletion,
}

/// Research notes returned by a web-search call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchNotes {
    pub text: String,
    /// Cited URLs, deduplicated, in order of first appearance.
    pub sources: Vec<String>,
}

#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Short provider label for logs.
    fn name(&self) -> &str;

    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError>;
}

#[async_trait]
pub trait WebSearch: Send + Sync {
    fn name(&self) -> &str;

    async fn search(&self, system: &str, user: &str) -> Result<SearchNotes, LlmError>;
}

/// Map a non-success provider response onto [`LlmError`].
async fn error_from_response(response: reqwest::Response) -> LlmError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LlmError::Unauthorized,
        StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimited(body),
        _ => LlmError::Api { status, body },
    }
}
