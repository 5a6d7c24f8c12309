//! Typed errors for the tabulate library.
//!
//! Every failure is terminal for the extraction that raised it. The variants
//! carry enough detail to be shown to the user as-is.

use thiserror::Error;

/// Errors that can occur while turning text into a table.
#[derive(Debug, Error)]
pub enum TabulateError {
    /// Input was blank; no LLM call was made
    #[error("input is empty: paste some content to extract from")]
    EmptyInput,

    /// The LLM call failed (network, auth, quota, empty reply)
    #[error("LLM provider error: {0}")]
    Provider(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The reply was not a JSON array
    #[error("LLM response was not a valid JSON array: {reason}")]
    Decode {
        reason: String,
        /// Unsanitized reply, kept for manual inspection
        raw_response: String,
    },

    /// Export format name not recognised
    #[error("unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Serializing the table failed
    #[error("export failed: {0}")]
    Export(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

impl TabulateError {
    /// Wrap any provider-side failure.
    pub fn provider(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Provider(err.into())
    }

    /// Original LLM reply, when the failure happened after the call returned.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Self::Decode { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }

    /// Stable machine-readable name for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::Provider(_) => "provider",
            Self::Decode { .. } => "decode",
            Self::UnsupportedFormat(_) => "unsupported_format",
            Self::Export(_) => "export",
            Self::Config(_) => "config",
        }
    }
}

#[cfg(feature = "openai")]
impl From<openai_client::OpenAIError> for TabulateError {
    fn from(err: openai_client::OpenAIError) -> Self {
        Self::Provider(Box::new(err))
    }
}

impl From<csv::Error> for TabulateError {
    fn from(err: csv::Error) -> Self {
        Self::Export(Box::new(err))
    }
}

/// Result type alias for tabulate operations.
pub type Result<T> = std::result::Result<T, TabulateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_keeps_raw_response() {
        let err = TabulateError::Decode {
            reason: "expected value at line 1 column 1".into(),
            raw_response: "Sorry, I cannot process this.".into(),
        };

        assert_eq!(err.kind(), "decode");
        assert_eq!(err.raw_response(), Some("Sorry, I cannot process this."));
    }

    #[test]
    fn test_provider_error_message_is_verbatim() {
        let err = TabulateError::provider("rate limited");
        assert_eq!(err.to_string(), "LLM provider error: rate limited");
        assert!(err.raw_response().is_none());
    }
}
