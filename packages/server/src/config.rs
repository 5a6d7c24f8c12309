use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use tabulate::{ExtractorConfig, LlmCredentials, LlmProvider};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub provider: LlmProvider,
    pub credentials: LlmCredentials,
    pub extractor: ExtractorConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let provider = var("LLM_PROVIDER")
            .map(|p| p.parse::<LlmProvider>())
            .transpose()
            .context("LLM_PROVIDER must be 'openai' or 'anthropic'")?
            .unwrap_or_default();

        let api_key = var(provider.api_key_var())
            .with_context(|| format!("{} must be set", provider.api_key_var()))?;

        let model = var("LLM_MODEL").unwrap_or_else(|| provider.default_model().to_string());

        let mut credentials = LlmCredentials::new(api_key, model);
        if let Some(base_url) = var("LLM_BASE_URL") {
            credentials = credentials.with_base_url(base_url);
        }

        let extractor = match var("EXTRACT_HINTS") {
            Some(hints) => ExtractorConfig::default().with_hints(hints.split(',')),
            None => ExtractorConfig::default(),
        };

        Ok(Self {
            port: var("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            provider,
            credentials,
            extractor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_to_openai() {
        let config = load(&[("OPENAI_API_KEY", "sk-test")]).unwrap();

        assert_eq!(config.provider, LlmProvider::OpenAI);
        assert_eq!(config.credentials.model, "gpt-3.5-turbo");
        assert_eq!(config.credentials.base_url, None);
        assert_eq!(config.port, 8080);
        assert_eq!(config.extractor, ExtractorConfig::default());
    }

    #[test]
    fn test_anthropic_with_overrides() {
        let config = load(&[
            ("LLM_PROVIDER", "Anthropic"),
            ("ANTHROPIC_API_KEY", "sk-ant-test"),
            ("LLM_MODEL", "claude-3-5-sonnet-latest"),
            ("LLM_BASE_URL", "http://localhost:9999/v1"),
            ("PORT", "3000"),
            ("EXTRACT_HINTS", "sku, stock ,,"),
        ])
        .unwrap();

        assert_eq!(config.provider, LlmProvider::Anthropic);
        assert_eq!(config.credentials.api_key.expose(), "sk-ant-test");
        assert_eq!(config.credentials.model, "claude-3-5-sonnet-latest");
        assert_eq!(config.credentials.base_url.as_deref(), Some("http://localhost:9999/v1"));
        assert_eq!(config.port, 3000);
        assert_eq!(config.extractor.hints, vec!["sku", "stock"]);
    }

    #[test]
    fn test_missing_key_names_the_variable() {
        let err = load(&[("LLM_PROVIDER", "anthropic"), ("OPENAI_API_KEY", "sk-test")]).unwrap_err();
        assert!(err.to_string().contains("ANTHROPIC_API_KEY"));
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        assert!(load(&[("LLM_PROVIDER", "gemini"), ("OPENAI_API_KEY", "sk-test")]).is_err());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(load(&[("OPENAI_API_KEY", "sk-test"), ("PORT", "eighty")]).is_err());
    }
}
