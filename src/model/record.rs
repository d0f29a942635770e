//! Schema-less records.

use super::value::Value;
use std::collections::BTreeMap;
use std::fmt;

static NULL: Value = Value::Null;

/// Field name carrying a record's rendering identity.
pub const ID_FIELD: &str = "id";

/// One row of input data: an open mapping from field key to value.
///
/// Records have no required shape. Reading a key the record does not carry
/// yields `Value::Null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Read a field. Missing fields read as null.
    pub fn get(&self, key: &str) -> &Value {
        self.fields.get(key).unwrap_or(&NULL)
    }

    /// True if the record carries the field (even if null).
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Iterate fields in key order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields carried.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The record's own identity, if it carries a non-null `id` field.
    pub fn id(&self) -> Option<&Value> {
        match self.get(ID_FIELD) {
            Value::Null => None,
            id => Some(id),
        }
    }

    /// Rendering identity: `id` if present, else the positional index.
    pub fn row_key(&self, index: usize) -> RowKey {
        match self.id() {
            Some(id) => RowKey::Id(id.to_string()),
            None => RowKey::Index(index),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Record {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        map.into_iter().collect()
    }
}

/// Identity of a projected row.
///
/// Affects re-render identity only; it plays no part in search, filtering
/// or ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    /// Record carried an `id` field (stringified).
    Id(String),
    /// Position of the record in the caller's input sequence.
    Index(usize),
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Id(id) => f.write_str(id),
            RowKey::Index(i) => write!(f, "#{i}"),
        }
    }
}
