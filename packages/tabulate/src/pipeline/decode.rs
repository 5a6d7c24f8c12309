//! Strict JSON decoding of a sanitized reply.

use serde_json::Value;
use tracing::{debug, warn};

use super::sanitize::{sanitize_response, Sanitized};
use crate::error::{Result, TabulateError};
use crate::types::record::RecordSet;

/// A reply that made it through sanitizing and decoding.
#[derive(Debug, Clone)]
pub struct ParsedResponse<'a> {
    pub sanitized: Sanitized<'a>,
    pub records: RecordSet,
}

/// Decode sanitized text into a [`RecordSet`].
///
/// Malformed JSON, or JSON that is not an array, fails the whole decode.
/// The error carries `raw_response` (the unsanitized reply) for display.
/// Non-object elements are accepted.
pub fn decode_records(sanitized: &str, raw_response: &str) -> Result<RecordSet> {
    let value: Value =
        serde_json::from_str(sanitized).map_err(|e| decode_error(e.to_string(), raw_response))?;

    let elements = match value {
        Value::Array(elements) => elements,
        other => {
            return Err(decode_error(
                format!("expected a JSON array, found {}", json_kind(&other)),
                raw_response,
            ))
        }
    };

    let records = RecordSet::new(elements);
    let non_objects = records.non_object_count();
    if non_objects > 0 {
        warn!(
            non_objects,
            total = records.len(),
            "Array holds non-object elements; they become degenerate rows"
        );
    }

    Ok(records)
}

/// Sanitize then decode a raw LLM reply.
pub fn parse_llm_response(raw_response: &str) -> Result<ParsedResponse<'_>> {
    let sanitized = sanitize_response(raw_response);
    debug!(
        rule = ?sanitized.rule,
        ambiguous = sanitized.ambiguous,
        sanitized_len = sanitized.text.len(),
        raw_len = raw_response.len(),
        "Sanitized LLM response"
    );

    let records = decode_records(sanitized.text, raw_response).map_err(|e| match e {
        TabulateError::Decode {
            reason,
            raw_response,
        } if sanitized.ambiguous => TabulateError::Decode {
            reason: format!("{} (reply holds more than one top-level array)", reason),
            raw_response,
        },
        other => other,
    })?;
    Ok(ParsedResponse { sanitized, records })
}

fn decode_error(reason: String, raw_response: &str) -> TabulateError {
    TabulateError::Decode {
        reason,
        raw_response: raw_response.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
