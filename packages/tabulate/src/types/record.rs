//! Decoded LLM output before it becomes a table.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One flat record: field name to value, in the order the LLM emitted them.
pub type Record = serde_json::Map<String, Value>;

/// The elements of the decoded JSON array, in reply order.
///
/// Elements are normally objects ([`Record`]s). Anything else is kept as-is
/// and becomes a degenerate row when tabulated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet(Vec<Value>);

impl RecordSet {
    pub fn new(elements: Vec<Value>) -> Self {
        Self(elements)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All elements, objects or not.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    /// Only the object elements.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.0.iter().filter_map(Value::as_object)
    }

    /// Number of elements that are not objects.
    pub fn non_object_count(&self) -> usize {
        self.0.iter().filter(|v| !v.is_object()).count()
    }

    pub fn into_inner(self) -> Vec<Value> {
        self.0
    }
}

impl FromIterator<Value> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Record>> for RecordSet {
    fn from(records: Vec<Record>) -> Self {
        records.into_iter().map(Value::Object).collect()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
