//! LLM prompt for turning free text into a JSON array of records.

use sha2::{Digest, Sha256};

/// Instruction template. `{hints}` and `{content}` are substituted.
///
/// The sanitizer only copes with a bare array or an array inside a single
/// ```json fence, so the prompt asks for nothing but the array.
pub const EXTRACT_PROMPT: &str = r#"Extract all structured information from the following text and return it as a JSON array of objects (a list of flat records, one object per item).
Try to identify fields like {hints}, and any other fields the text clearly provides.
Use the same field name for the same kind of information across records.
Values must be strings, numbers, or null. Do not nest objects or arrays.

Respond with ONLY the JSON array. Do not add explanations, comments, or markdown formatting.

Text:
"""
{content}
""""#;

/// Build the extraction prompt for `content`.
///
/// `content` is embedded verbatim. Callers must reject blank input first.
pub fn format_extract_prompt(content: &str, hints: &[String]) -> String {
    // Hints first: content is user text and may itself contain "{hints}".
    EXTRACT_PROMPT
        .replace("{hints}", &hints.join(", "))
        .replace("{content}", content)
}

/// Hash of the template plus hints, for identifying prompt versions in logs.
pub fn extract_prompt_hash(hints: &[String]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(EXTRACT_PROMPT.as_bytes());
    for hint in hints {
        hasher.update(b"\n");
        hasher.update(hint.as_bytes());
    }
    format!("{:x}", hasher.finalize())
}
