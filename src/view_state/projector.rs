//! View projection: surviving records to renderable cells.

use crate::model::{ColumnSet, Record, RenderedCell, RowKey};
use crate::query::PipelineOutput;

/// One projected row.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRow {
    /// Render identity (`id` field or input position).
    pub key: RowKey,
    /// Index of the source record in the caller's input.
    pub source_index: usize,
    /// One cell per column, in column order.
    pub cells: Vec<RenderedCell>,
}

/// The projected, ordered grid plus the counters for status messaging.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableView {
    rows: Vec<ViewRow>,
    total_count: usize,
}

impl TableView {
    pub fn rows(&self) -> &[ViewRow] {
        &self.rows
    }

    pub fn row(&self, visible_index: usize) -> Option<&ViewRow> {
        self.rows.get(visible_index)
    }

    pub fn visible_count(&self) -> usize {
        self.rows.len()
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// True when search or filters hid at least one record.
    pub fn is_filtered(&self) -> bool {
        self.visible_count() < self.total_count
    }

    /// "N items" or "N items (filtered from M)".
    pub fn status_line(&self) -> String {
        if self.total_count == 0 {
            return "No data".to_string();
        }
        let noun = if self.visible_count() == 1 { "item" } else { "items" };
        if self.is_filtered() {
            format!(
                "{} {} (filtered from {})",
                self.visible_count(),
                noun,
                self.total_count
            )
        } else {
            format!("{} {}", self.visible_count(), noun)
        }
    }
}

/// Project the pipeline output into rows of cells.
///
/// Render rules run only for surviving records, once per cell.
pub fn project(records: &[Record], columns: &ColumnSet, output: &PipelineOutput) -> TableView {
    let rows = output
        .indices
        .iter()
        .map(|&i| {
            let record = &records[i];
            ViewRow {
                key: record.row_key(i),
                source_index: i,
                cells: columns.iter().map(|column| column.cell(record)).collect(),
            }
        })
        .collect();

    TableView {
        rows,
        total_count: output.total_count,
    }
}
