//! Anthropic backend (messages API).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, TabulateError};
use crate::security::LlmCredentials;
use crate::traits::llm::Llm;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";
const API_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 4096;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
/// Longest error body kept in a message; HTML error pages can be huge.
const MAX_ERROR_BODY: usize = 1000;

/// Anthropic-backed [`Llm`].
#[derive(Clone)]
pub struct Anthropic {
    client: Client,
    credentials: LlmCredentials,
    base_url: String,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: [MessageParam<'a>; 1],
}

#[derive(Serialize)]
struct MessageParam<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl Anthropic {
    /// Build from explicit credentials. Fails on a blank key or model.
    pub fn new(credentials: LlmCredentials) -> Result<Self> {
        credentials.validate()?;

        let base_url = credentials
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TabulateError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            credentials,
            base_url,
        })
    }

    fn request<'a>(&'a self, prompt: &'a str) -> MessagesRequest<'a> {
        MessagesRequest {
            model: &self.credentials.model,
            max_tokens: MAX_TOKENS,
            temperature: 0.0,
            messages: [MessageParam {
                role: "user",
                content: prompt,
            }],
        }
    }
}

/// Trimmed error body, cut at a char boundary.
fn error_excerpt(body: &str) -> &str {
    let body = body.trim();
    if body.len() <= MAX_ERROR_BODY {
        return body;
    }
    let mut end = MAX_ERROR_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

/// Concatenate the text blocks of a reply.
fn reply_text(response: MessagesResponse) -> Option<String> {
    let text: String = response
        .content
        .into_iter()
        .filter(|block| block.kind == "text")
        .filter_map(|block| block.text)
        .collect();

    (!text.trim().is_empty()).then_some(text)
}

#[async_trait]
impl Llm for Anthropic {
    fn provider(&self) -> &str {
        "anthropic"
    }

    fn model(&self) -> &str {
        &self.credentials.model
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let start = std::time::Instant::now();

        let response = self
            .client
            .post(format!("{}/messages", self.base_url))
            .header("x-api-key", self.credentials.api_key.expose())
            .header("anthropic-version", API_VERSION)
            .header("Content-Type", "application/json")
            .json(&self.request(prompt))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Anthropic request failed");
                TabulateError::provider(format!("Network error: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Anthropic API error");
            return Err(TabulateError::provider(format!(
                "Anthropic API error: {} {}",
                status,
                error_excerpt(&error_text)
            )));
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| TabulateError::provider(format!("Parse error: {}", e)))?;

        let text = reply_text(parsed)
            .ok_or_else(|| TabulateError::provider("No response from Anthropic"))?;

        debug!(
            model = %self.credentials.model,
            duration_ms = start.elapsed().as_millis(),
            "Anthropic message"
        );

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anthropic_builder() {
        let llm = Anthropic::new(
            LlmCredentials::new("sk-ant-test", "claude-3-5-haiku-latest")
                .with_base_url("http://localhost:9999/v1/"),
        )
        .unwrap();

        assert_eq!(llm.provider(), "anthropic");
        assert_eq!(llm.model(), "claude-3-5-haiku-latest");
        assert_eq!(llm.base_url, "http://localhost:9999/v1");
    }

    #[test]
    fn test_request_body() {
        let llm = Anthropic::new(LlmCredentials::new("sk-ant-test", "claude-3-5-haiku-latest")).unwrap();
        let body = serde_json::to_value(llm.request("extract this")).unwrap();

        assert_eq!(body["temperature"], 0.0);
        assert_eq!(body["max_tokens"], MAX_TOKENS);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "extract this");
        assert!(body.to_string().find("sk-ant-test").is_none());
    }

    #[test]
    fn test_reply_text_joins_text_blocks() {
        let response: MessagesResponse = serde_json::from_str(
            r#"{"content":[{"type":"text","text":"[{\"a\":"},{"type":"tool_use","id":"x"},{"type":"text","text":"1}]"}]}"#,
        )
        .unwrap();

        assert_eq!(reply_text(response).as_deref(), Some(r#"[{"a":1}]"#));
    }

    #[test]
    fn test_error_excerpt_is_bounded() {
        assert_eq!(error_excerpt("  overloaded \n"), "overloaded");

        let page = "é".repeat(MAX_ERROR_BODY);
        let excerpt = error_excerpt(&page);
        assert!(excerpt.len() <= MAX_ERROR_BODY);
        assert!(excerpt.chars().all(|c| c == 'é'));
    }

    #[test]
    fn test_empty_reply_is_none() {
        let response: MessagesResponse = serde_json::from_str(r#"{"content":[]}"#).unwrap();
        assert!(reply_text(response).is_none());
    }
}
