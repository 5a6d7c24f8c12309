//! Testing utilities including a mock LLM.
//!
//! Useful for exercising the extraction pipeline without network calls.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use crate::error::{Result, TabulateError};
use crate::traits::llm::Llm;

/// A scripted reply: either text or a provider failure message.
#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Failure(String),
}

/// A mock LLM for testing.
///
/// Replies are queued up front and handed out in order, one per call.
/// Every prompt is recorded for assertions. Calling with an empty queue
/// fails with a provider error.
#[derive(Clone, Default)]
pub struct MockLlm {
    /// Queued replies, consumed front to back
    replies: Arc<RwLock<VecDeque<MockReply>>>,

    /// Prompts received, in call order
    prompts: Arc<RwLock<Vec<String>>>,
}

impl MockLlm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply.
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.replies
            .write()
            .unwrap()
            .push_back(MockReply::Text(response.into()));
        self
    }

    /// Queue a provider failure.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.replies
            .write()
            .unwrap()
            .push_back(MockReply::Failure(message.into()));
        self
    }

    /// All prompts sent to this mock.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.read().unwrap().len()
    }

    /// Replies not yet consumed.
    pub fn remaining(&self) -> usize {
        self.replies.read().unwrap().len()
    }
}

#[async_trait]
impl Llm for MockLlm {
    fn provider(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts.write().unwrap().push(prompt.to_string());

        match self.replies.write().unwrap().pop_front() {
            Some(MockReply::Text(text)) => Ok(text),
            Some(MockReply::Failure(message)) => Err(TabulateError::provider(message)),
            None => Err(TabulateError::provider("MockLlm has no queued response")),
        }
    }
}
