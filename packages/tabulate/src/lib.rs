//! Text-to-Table Extraction Library
//!
//! Paste unstructured text in, get a table out. The library prompts an LLM
//! to emit a JSON array of flat records, isolates and decodes that array
//! from the reply, projects it onto rows and columns, and serializes the
//! result as CSV or JSON.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tabulate::{ExportFormat, Extractor};
//! use tabulate::testing::MockLlm;
//!
//! let llm = MockLlm::new().with_response(r#"[{"name": "Widget", "price": 9.99}]"#);
//! let extractor = Extractor::new(llm);
//!
//! let (extraction, payload) = extractor
//!     .extract_and_export("Widget costs $9.99", ExportFormat::Csv)
//!     .await?;
//!
//! assert_eq!(extraction.table.columns(), &["name", "price"]);
//! assert_eq!(payload.text(), "name,price\nWidget,9.99\n");
//! ```
//!
//! # Modules
//!
//! - [`traits`] - The [`Llm`] abstraction
//! - [`types`] - Records, tables, export formats and config
//! - [`pipeline`] - Prompt, sanitize, decode, tabulate, export
//! - [`ai`] - OpenAI and Anthropic backends (feature-gated)
//! - [`security`] - Credential handling
//! - [`testing`] - Mock LLM for tests

pub mod error;
pub mod pipeline;
pub mod security;
pub mod testing;
pub mod traits;
pub mod types;

#[cfg(any(feature = "openai", feature = "anthropic"))]
pub mod ai;

pub use error::{Result, TabulateError};
pub use security::{LlmCredentials, SecretString};
pub use traits::llm::Llm;
pub use types::{
    config::{ExtractorConfig, LlmProvider, DEFAULT_HINTS},
    export::{ExportFormat, ExportPayload},
    extraction::Extraction,
    record::{Record, RecordSet},
    table::{display_cell, Cell, Table, SCALAR_COLUMN},
};

pub use pipeline::{
    build_table, decode_records, export_table, extract_prompt_hash, format_extract_prompt,
    parse_llm_response, sanitize_response, validate_input, Extractor, ParsedResponse,
    SanitizeRule, Sanitized,
};

#[cfg(any(feature = "openai", feature = "anthropic"))]
pub use ai::build_llm;

pub use testing::MockLlm;
