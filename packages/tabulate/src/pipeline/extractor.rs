//! The extraction pipeline: validate, prompt, call, sanitize, decode, tabulate.

use std::time::Instant;

use tracing::{debug, info, warn};

use super::decode::parse_llm_response;
use super::export::export_table;
use super::prompts::{extract_prompt_hash, format_extract_prompt};
use super::tabulate::build_table;
use crate::error::{Result, TabulateError};
use crate::traits::llm::Llm;
use crate::types::config::ExtractorConfig;
use crate::types::export::{ExportFormat, ExportPayload};
use crate::types::extraction::Extraction;

/// Reject blank input before anything else runs.
pub fn validate_input(raw_input: &str) -> Result<&str> {
    if raw_input.trim().is_empty() {
        return Err(TabulateError::EmptyInput);
    }
    Ok(raw_input)
}

/// Single-shot extractor over one LLM backend.
///
/// Holds no per-request state: each [`extract`](Self::extract) call runs
/// the whole pipeline once, with no retries and no fallback backend.
pub struct Extractor<L: Llm> {
    llm: L,
    config: ExtractorConfig,
    prompt_hash: String,
}

impl<L: Llm> Extractor<L> {
    pub fn new(llm: L) -> Self {
        Self::with_config(llm, ExtractorConfig::default())
    }

    pub fn with_config(llm: L, config: ExtractorConfig) -> Self {
        let prompt_hash = extract_prompt_hash(&config.hints);
        Self {
            llm,
            config,
            prompt_hash,
        }
    }

    pub fn llm(&self) -> &L {
        &self.llm
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Prompt that [`extract`](Self::extract) would send for `raw_input`.
    pub fn build_prompt(&self, raw_input: &str) -> Result<String> {
        let input = validate_input(raw_input)?;
        Ok(format_extract_prompt(input, &self.config.hints))
    }

    /// Run the pipeline on `raw_input`.
    ///
    /// Errors: [`EmptyInput`](TabulateError::EmptyInput) before any call,
    /// [`Provider`](TabulateError::Provider) from the backend, and
    /// [`Decode`](TabulateError::Decode) carrying the unsanitized reply.
    pub async fn extract(&self, raw_input: &str) -> Result<Extraction> {
        let prompt = self.build_prompt(raw_input)?;

        let start = Instant::now();
        let raw_response = self.llm.complete(&prompt).await.map_err(|e| {
            warn!(
                provider = self.llm.provider(),
                model = self.llm.model(),
                error = %e,
                "LLM call failed"
            );
            e
        })?;

        debug!(
            provider = self.llm.provider(),
            model = self.llm.model(),
            prompt_hash = %self.prompt_hash,
            input_len = raw_input.len(),
            response_len = raw_response.len(),
            duration_ms = start.elapsed().as_millis(),
            "LLM call finished"
        );

        let parsed = parse_llm_response(&raw_response).map_err(|e| {
            warn!(error = %e, "LLM response could not be decoded");
            e
        })?;
        let rule = parsed.sanitized.rule;
        let records = parsed.records;
        let table = build_table(&records);

        info!(
            rows = table.row_count(),
            columns = table.column_count(),
            rule = ?rule,
            "Extraction complete"
        );

        Ok(Extraction {
            records,
            table,
            raw_response,
            rule,
            prompt_hash: self.prompt_hash.clone(),
        })
    }

    /// Run the pipeline and serialize the result in one go.
    pub async fn extract_and_export(
        &self,
        raw_input: &str,
        format: ExportFormat,
    ) -> Result<(Extraction, ExportPayload)> {
        let extraction = self.extract(raw_input).await?;
        let payload = export_table(&extraction.table, format)?;
        Ok((extraction, payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_input() {
        assert!(matches!(validate_input(""), Err(TabulateError::EmptyInput)));
        assert!(matches!(validate_input(" \n\t "), Err(TabulateError::EmptyInput)));
        assert_eq!(validate_input("  text ").unwrap(), "  text ");
    }
}
