//! Column descriptors and column sets.

use super::record::Record;
use super::value::Value;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Per-column render rule: `(raw value, whole record) -> cell`.
///
/// Must be pure; it is called once per visible row on every recomputation.
pub type RenderFn = Arc<dyn Fn(&Value, &Record) -> RenderedCell + Send + Sync>;

/// A projected cell.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedCell {
    /// Raw field value, passed through unmodified.
    Value(Value),
    /// Text produced by a render rule.
    Text(String),
}

impl RenderedCell {
    pub fn text(s: impl Into<String>) -> Self {
        RenderedCell::Text(s.into())
    }
}

impl fmt::Display for RenderedCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderedCell::Value(v) => v.fmt(f),
            RenderedCell::Text(s) => f.write_str(s),
        }
    }
}

/// Static metadata describing how one record field is displayed, filtered
/// and sorted.
#[derive(Clone)]
pub struct ColumnDescriptor {
    key: String,
    label: String,
    sortable: bool,
    filterable: bool,
    render: Option<RenderFn>,
}

impl ColumnDescriptor {
    /// New column: label defaults to the key, sortable and filterable.
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            label: key.clone(),
            key,
            sortable: true,
            filterable: true,
            render: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    /// Attach a render rule.
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&Value, &Record) -> RenderedCell + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// Attach an already-shared render rule.
    pub fn render_fn(mut self, render: RenderFn) -> Self {
        self.render = Some(render);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn header(&self) -> &str {
        &self.label
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn is_filterable(&self) -> bool {
        self.filterable
    }

    pub fn has_render(&self) -> bool {
        self.render.is_some()
    }

    /// Read this column's raw value off a record.
    pub fn value_of<'r>(&self, record: &'r Record) -> &'r Value {
        record.get(&self.key)
    }

    /// Compute this column's cell for a record.
    pub fn cell(&self, record: &Record) -> RenderedCell {
        let raw = self.value_of(record);
        match &self.render {
            Some(render) => render(raw, record),
            None => RenderedCell::Value(raw.clone()),
        }
    }
}

impl fmt::Debug for ColumnDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("render", &self.render.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Errors building a column set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ColumnError {
    #[error("Duplicate column key: {0}")]
    DuplicateKey(String),

    #[error("Column key cannot be empty")]
    EmptyKey,
}

/// Ordered set of columns with unique keys.
///
/// Column order is both header order and row-cell order.
#[derive(Debug, Clone, Default)]
pub struct ColumnSet {
    columns: Vec<ColumnDescriptor>,
}

impl ColumnSet {
    /// Smart constructor: rejects empty and duplicate keys.
    pub fn new(columns: Vec<ColumnDescriptor>) -> Result<Self, ColumnError> {
        for (i, column) in columns.iter().enumerate() {
            if column.key.is_empty() {
                return Err(ColumnError::EmptyKey);
            }
            if columns[..i].iter().any(|c| c.key == column.key) {
                return Err(ColumnError::DuplicateKey(column.key.clone()));
            }
        }
        Ok(Self { columns })
    }

    /// Infer columns from records: keys in first-seen order.
    pub fn infer(records: &[Record]) -> Self {
        let mut columns: Vec<ColumnDescriptor> = Vec::new();
        for record in records {
            for (key, _) in record.fields() {
                if !key.is_empty() && !columns.iter().any(|c| c.key == key) {
                    columns.push(ColumnDescriptor::new(key));
                }
            }
        }
        Self { columns }
    }

    pub fn get(&self, key: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.key == key)
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.key == key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColumnDescriptor> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.key())
    }
}

impl std::ops::Index<usize> for ColumnSet {
    type Output = ColumnDescriptor;

    fn index(&self, index: usize) -> &Self::Output {
        &self.columns[index]
    }
}

impl<'a> IntoIterator for &'a ColumnSet {
    type Item = &'a ColumnDescriptor;
    type IntoIter = std::slice::Iter<'a, ColumnDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
