//! Extraction pipeline.
//!
//! Stages, in order:
//! - Prompt building ([`prompts`])
//! - Sanitizing the reply down to a JSON array ([`sanitize`])
//! - Strict decoding ([`decode`])
//! - Table projection ([`tabulate`])
//! - Export to CSV / JSON ([`export`])
//!
//! [`Extractor`] runs them end to end against an [`Llm`](crate::Llm).

pub mod decode;
pub mod export;
pub mod extractor;
pub mod prompts;
pub mod sanitize;
pub mod tabulate;

pub use decode::{decode_records, parse_llm_response, ParsedResponse};
pub use export::export_table;
pub use extractor::{validate_input, Extractor};
pub use prompts::{extract_prompt_hash, format_extract_prompt, EXTRACT_PROMPT};
pub use sanitize::{sanitize_response, SanitizeRule, Sanitized};
pub use tabulate::build_table;
