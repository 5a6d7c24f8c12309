//! Error types for the OpenAI client.

use reqwest::StatusCode;
use thiserror::Error;

use crate::types::truncate_to_char_boundary;

/// Longest error body kept in a message; HTML error pages can be huge.
const MAX_ERROR_BODY: usize = 1000;

/// Result type for OpenAI client operations.
pub type Result<T> = std::result::Result<T, OpenAIError>;

/// OpenAI client errors.
#[derive(Debug, Error)]
pub enum OpenAIError {
    /// Configuration error (missing API key, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Key rejected (401/403)
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Quota or rate limit hit (429)
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Any other non-2xx response, or an empty completion
    #[error("API error: {0}")]
    Api(String),

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl OpenAIError {
    /// Classify a non-success HTTP response.
    pub(crate) fn from_status(status: StatusCode, body: String) -> Self {
        let body = truncate_to_char_boundary(body.trim(), MAX_ERROR_BODY);
        let message = format!("{} {}", status, body);
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Unauthorized(message),
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimited(message),
            _ => Self::Api(message),
        }
    }
}
