use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use super::{error_from_response, LlmError, SearchNotes, WebSearch};
use crate::config::ProviderConfig;

/// Maximum characters of raw response kept when no text part is found.
pub const FALLBACK_LIMIT: usize = 4000;

#[derive(Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: [InputMessage<'a>; 2],
    tools: [Tool; 1],
}

#[derive(Serialize)]
struct InputMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct Tool {
    #[serde(rename = "type")]
    kind: &'static str,
}

/// Client for OpenAI's `/responses` endpoint with the `web_search` tool enabled.
#[derive(Debug, Clone)]
pub struct ResponsesClient {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl ResponsesClient {
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl WebSearch for ResponsesClient {
    fn name(&self) -> &str {
        "openai-web-search"
    }

    async fn search(&self, system: &str, user: &str) -> Result<SearchNotes, LlmError> {
        let request = ResponsesRequest {
            model: &self.model,
            input: [
                InputMessage {
                    role: "system",
                    content: system,
                },
                InputMessage {
                    role: "user",
                    content: user,
                },
            ],
            tools: [Tool { kind: "web_search" }],
        };

        let start = Instant::now();
        let response = self
            .client
            .post(format!("{}/responses", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let err = error_from_response(response).await;
            tracing::warn!(provider = self.name(), error = %err, "web search failed");
            return Err(err);
        }

        let body: Value = response.json().await?;
        let notes = extract_notes(&body);
        tracing::debug!(
            provider = self.name(),
            model = %self.model,
            sources = notes.sources.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "web search notes received"
        );

        Ok(notes)
    }
}

/// Pull readable text out of a responses-API payload.
///
/// Every `output_text` or `text` content part of every output item is kept,
/// joined by newlines. `url_citation` annotations on those parts become
/// sources. When no text part is present the pretty-printed payload is
/// returned instead, cut to [`FALLBACK_LIMIT`] characters.
pub fn extract_notes(response: &Value) -> SearchNotes {
    let mut parts: Vec<&str> = Vec::new();
    let mut sources: Vec<String> = Vec::new();

    let items = response["output"].as_array().map(Vec::as_slice).unwrap_or(&[]);
    for item in items {
        let contents = item["content"].as_array().map(Vec::as_slice).unwrap_or(&[]);
        for part in contents {
            if !matches!(part["type"].as_str(), Some("output_text") | Some("text")) {
                continue;
            }
            if let Some(text) = part["text"].as_str().filter(|t| !t.is_empty()) {
                parts.push(text);
            }
            for annotation in part["annotations"].as_array().into_iter().flatten() {
                if annotation["type"].as_str() != Some("url_citation") {
                    continue;
                }
                if let Some(url) = annotation["url"].as_str() {
                    if !sources.iter().any(|s| s == url) {
                        sources.push(url.to_string());
                    }
                }
            }
        }
    }

    let text = parts.join("\n").trim().to_string();
    if text.is_empty() {
        let raw = serde_json::to_string_pretty(response).unwrap_or_else(|_| response.to_string());
        return SearchNotes {
            text: raw.chars().take(FALLBACK_LIMIT).collect(),
            sources,
        };
    }

    SearchNotes { text, sources }
}
