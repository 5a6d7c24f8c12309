//! Configuration types for the extractor and its LLM backend.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TabulateError;

/// Field names the prompt suggests when nothing else is configured.
pub const DEFAULT_HINTS: &[&str] = &[
    "title",
    "product",
    "price",
    "date",
    "brand",
    "color",
    "model",
    "contact info",
];

/// Configuration for the extraction pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Field names the LLM is nudged towards (e.g. ["title", "price"]).
    ///
    /// These are suggestions, not a schema: records may carry any fields.
    #[serde(default = "default_hints")]
    pub hints: Vec<String>,
}

fn default_hints() -> Vec<String> {
    DEFAULT_HINTS.iter().map(|h| h.to_string()).collect()
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            hints: default_hints(),
        }
    }
}

impl ExtractorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the field hints. Blank entries are dropped; an empty list
    /// falls back to the defaults.
    pub fn with_hints(mut self, hints: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let hints: Vec<String> = hints
            .into_iter()
            .map(|h| {
                let h: String = h.into();
                h.trim().to_string()
            })
            .filter(|h| !h.is_empty())
            .collect();
        self.hints = if hints.is_empty() { default_hints() } else { hints };
        self
    }
}

/// Hosted LLM providers with a built-in backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    #[default]
    OpenAI,
    Anthropic,
}

impl LlmProvider {
    pub fn default_model(self) -> &'static str {
        match self {
            Self::OpenAI => "gpt-3.5-turbo",
            Self::Anthropic => "claude-3-5-haiku-latest",
        }
    }

    /// Environment variable conventionally holding this provider's key.
    pub fn api_key_var(self) -> &'static str {
        match self {
            Self::OpenAI => "OPENAI_API_KEY",
            Self::Anthropic => "ANTHROPIC_API_KEY",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenAI => "openai",
            Self::Anthropic => "anthropic",
        }
    }
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LlmProvider {
    type Err = TabulateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(Self::OpenAI),
            "anthropic" | "claude" => Ok(Self::Anthropic),
            other => Err(TabulateError::Config(format!(
                "unknown LLM provider '{}' (expected 'openai' or 'anthropic')",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hints() {
        let config = ExtractorConfig::default();
        assert_eq!(config.hints.len(), DEFAULT_HINTS.len());
        assert_eq!(config.hints[0], "title");
    }

    #[test]
    fn test_with_hints_drops_blanks_and_falls_back() {
        let config = ExtractorConfig::new().with_hints([" sku ", "", "price"]);
        assert_eq!(config.hints, vec!["sku", "price"]);

        let config = ExtractorConfig::new().with_hints(Vec::<String>::new());
        assert_eq!(config, ExtractorConfig::default());
    }

    #[test]
    fn test_provider_parsing() {
        assert_eq!("OpenAI".parse::<LlmProvider>().unwrap(), LlmProvider::OpenAI);
        assert_eq!("claude".parse::<LlmProvider>().unwrap(), LlmProvider::Anthropic);
        assert!("gemini".parse::<LlmProvider>().is_err());
        assert_eq!(LlmProvider::OpenAI.default_model(), "gpt-3.5-turbo");
    }
}
