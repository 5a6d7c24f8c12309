//! LLM trait: one prompt in, one reply out.
//!
//! The pipeline never inspects provider details. Anything that can turn a
//! prompt into text can back an extraction: hosted APIs, local models, or
//! the [`MockLlm`](crate::testing::MockLlm) used in tests.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

/// Text-in, text-out completion backend.
///
/// Implementations receive their credentials at construction, send every
/// request with temperature 0, and never retry. Failures must surface as
/// [`TabulateError::Provider`](crate::TabulateError::Provider).
#[async_trait]
pub trait Llm: Send + Sync {
    /// Provider name used in logs (e.g. "openai").
    fn provider(&self) -> &str;

    /// Model identifier sent with each request.
    fn model(&self) -> &str;

    /// Send a single prompt and return the raw reply text.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

#[async_trait]
impl<T: Llm + ?Sized> Llm for Arc<T> {
    fn provider(&self) -> &str {
        (**self).provider()
    }

    fn model(&self) -> &str {
        (**self).model()
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        (**self).complete(prompt).await
    }
}

#[async_trait]
impl<T: Llm + ?Sized> Llm for Box<T> {
    fn provider(&self) -> &str {
        (**self).provider()
    }

    fn model(&self) -> &str {
        (**self).model()
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        (**self).complete(prompt).await
    }
}
