//! OpenAI backend (chat completions).
//!
//! # Example
//!
//! ```rust,ignore
//! use tabulate::ai::OpenAI;
//! use tabulate::{Extractor, LlmCredentials};
//!
//! let llm = OpenAI::new(LlmCredentials::new(api_key, "gpt-3.5-turbo"))?;
//! let extractor = Extractor::new(llm);
//! ```

use async_trait::async_trait;
use openai_client::{ChatRequest, Message, OpenAIClient};
use tracing::debug;

use crate::error::Result;
use crate::security::LlmCredentials;
use crate::traits::llm::Llm;

/// Upper bound on reply length; large enough for long tables.
const MAX_TOKENS: u32 = 4096;

/// OpenAI-backed [`Llm`].
#[derive(Debug, Clone)]
pub struct OpenAI {
    client: OpenAIClient,
    model: String,
}

impl OpenAI {
    /// Build from explicit credentials. Fails on a blank key or model.
    pub fn new(credentials: LlmCredentials) -> Result<Self> {
        credentials.validate()?;

        let mut client = OpenAIClient::new(credentials.api_key.expose());
        if let Some(base_url) = &credentials.base_url {
            client = client.with_base_url(base_url.as_str());
        }

        Ok(Self {
            client,
            model: credentials.model,
        })
    }

    fn request(&self, prompt: &str) -> ChatRequest {
        let request = ChatRequest::new(self.model.as_str())
            .message(Message::user(prompt))
            .temperature(0.0);

        if ChatRequest::uses_max_completion_tokens(&self.model) {
            request.max_completion_tokens(MAX_TOKENS)
        } else {
            request.max_tokens(MAX_TOKENS)
        }
    }
}

#[async_trait]
impl Llm for OpenAI {
    fn provider(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let response = self.client.chat_completion(self.request(prompt)).await?;

        if let Some(usage) = &response.usage {
            debug!(
                model = %self.model,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "OpenAI token usage"
            );
        }

        Ok(response.content)
    }
}
