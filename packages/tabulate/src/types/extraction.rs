//! Result of one successful extraction.

use super::record::RecordSet;
use super::table::Table;
use crate::pipeline::sanitize::SanitizeRule;

/// Everything produced by a single extraction run.
///
/// Nothing here outlives the request that created it.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Decoded array elements, in reply order
    pub records: RecordSet,

    /// Table built from `records`
    pub table: Table,

    /// Reply exactly as the LLM returned it
    pub raw_response: String,

    /// Which sanitizer rule isolated the JSON
    pub rule: SanitizeRule,

    /// Hash of the instruction template and hints used
    pub prompt_hash: String,
}

impl Extraction {
    pub fn row_count(&self) -> usize {
        self.table.row_count()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
