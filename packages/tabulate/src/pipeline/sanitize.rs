//! Isolate the JSON array inside a free-form LLM reply.
//!
//! Rules, first match wins:
//!
//! 1. A ```` ```json ```` fenced block with a closing fence: its trimmed interior.
//! 2. The greedy span from the first `[` to the last `]`.
//! 3. The text unchanged (decoding then fails explicitly).
//!
//! A fenced interior is used as-is, so a fence holding an object or prose
//! fails to decode rather than being cut down to the arrays inside it.
//!
//! The greedy span can swallow prose when a reply holds several separate
//! arrays (`[..] and also [..]`). That case is flagged as `ambiguous` and
//! logged, not rejected.

use serde::Serialize;
use tracing::warn;

const FENCE: &str = "```";
const JSON_FENCE: &str = "```json";

/// Which rule produced the sanitized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SanitizeRule {
    Fenced,
    Bracketed,
    Passthrough,
}

/// Sanitizer output: a slice of the reply plus how it was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sanitized<'a> {
    pub text: &'a str,
    pub rule: SanitizeRule,
    pub ambiguous: bool,
}

/// Sanitize a raw LLM reply. Pure.
///
/// Idempotent on every output that is a JSON array, and on every output not
/// taken from a fence.
pub fn sanitize_response(raw: &str) -> Sanitized<'_> {
    if let Some(interior) = fenced_json_block(raw) {
        return Sanitized {
            text: interior,
            rule: SanitizeRule::Fenced,
            ambiguous: false,
        };
    }

    if let Some(span) = greedy_bracket_span(raw) {
        let ambiguous = has_multiple_top_level_arrays(span);
        if ambiguous {
            warn!(
                span_len = span.len(),
                "Response holds several bracketed regions; greedy span may include text between them"
            );
        }
        return Sanitized {
            text: span,
            rule: SanitizeRule::Bracketed,
            ambiguous,
        };
    }

    Sanitized {
        text: raw,
        rule: SanitizeRule::Passthrough,
        ambiguous: false,
    }
}

/// Interior of the first ```` ```json ```` block that has a closing fence.
///
/// The tag is matched case-insensitively and must end the word
/// (```` ```jsonl ```` does not count).
fn fenced_json_block(text: &str) -> Option<&str> {
    // ASCII lowercasing keeps byte offsets aligned with `text`.
    let lowered = text.to_ascii_lowercase();
    let mut search_from = 0;

    while let Some(offset) = lowered[search_from..].find(JSON_FENCE) {
        let tag_end = search_from + offset + JSON_FENCE.len();
        let tag_continues = text[tag_end..]
            .chars()
            .next()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '-');
        if tag_continues {
            search_from = tag_end;
            continue;
        }

        let close = text[tag_end..].find(FENCE)?;
        return Some(text[tag_end..tag_end + close].trim());
    }

    None
}

/// First `[` through last `]`, if they are in that order.
fn greedy_bracket_span(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (end > start).then(|| &text[start..=end])
}

/// Whether bracket depth returns to zero before the end of `span`.
///
/// Brackets inside JSON strings are ignored while inside an array; text
/// between arrays is not treated as JSON.
fn has_multiple_top_level_arrays(span: &str) -> bool {
    let last = span.len().saturating_sub(1);
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in span.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' if depth > 0 => in_string = true,
            '[' => depth += 1,
            ']' => {
                depth = depth.saturating_sub(1);
                if depth == 0 && i != last {
                    return true;
                }
            }
            _ => {}
        }
    }

    false
}
