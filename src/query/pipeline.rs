//! Predicate pipeline: search, then column filters, then sort.
//!
//! Each stage narrows or reorders the surviving record indices produced by
//! the one before it. The stage order is fixed.

use super::compare::compare_values;
use super::flags::FeatureFlags;
use crate::model::{ColumnSet, Record, Value};
use crate::state::{QueryState, SortSpec};
use std::cmp::Ordering;

/// Ordered indices of the records that survived the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PipelineOutput {
    /// Indices into the input record slice, in display order.
    pub indices: Vec<usize>,
    /// Size of the unfiltered input.
    pub total_count: usize,
}

impl PipelineOutput {
    pub fn visible_count(&self) -> usize {
        self.indices.len()
    }
}

/// Run the full pipeline over `records`.
///
/// Pure: the same `(records, columns, state, flags)` always yields the
/// same output.
pub fn run_pipeline<Q>(
    records: &[Record],
    columns: &ColumnSet,
    state: &Q,
    flags: FeatureFlags,
) -> PipelineOutput
where
    Q: QueryState + ?Sized,
{
    let mut indices: Vec<usize> = (0..records.len()).collect();

    let term = state.search_term();
    if flags.search_enabled() && !term.is_empty() {
        search_stage(records, columns, term, &mut indices);
    }

    if flags.column_filter_enabled() && state.filters().has_active_filters() {
        column_filter_stage(records, columns, state, &mut indices);
    }

    if let Some(sort) = state.sort() {
        if flags.enable_internal_sort && !state.delegates_sort() {
            sort_stage(records, columns, sort, &mut indices);
        }
    }

    PipelineOutput {
        indices,
        total_count: records.len(),
    }
}

/// Keep records where any column contains the term.
fn search_stage(records: &[Record], columns: &ColumnSet, term: &str, indices: &mut Vec<usize>) {
    let needle = term.to_lowercase();
    indices.retain(|&i| {
        let record = &records[i];
        columns
            .iter()
            .any(|column| column.value_of(record).contains_folded(&needle))
    });
}

/// Keep records where every active filter matches its column.
///
/// Filters keyed on columns outside the set, or on non-filterable columns,
/// are inert.
fn column_filter_stage<Q>(
    records: &[Record],
    columns: &ColumnSet,
    state: &Q,
    indices: &mut Vec<usize>,
) where
    Q: QueryState + ?Sized,
{
    let active: Vec<(&str, String)> = state
        .filters()
        .active_filters()
        .filter(|(key, _)| columns.get(key).is_some_and(|c| c.is_filterable()))
        .map(|(key, value)| (key, value.to_lowercase()))
        .collect();

    if active.is_empty() {
        return;
    }

    indices.retain(|&i| {
        let record = &records[i];
        active
            .iter()
            .all(|(key, needle)| record.get(key).contains_folded(needle))
    });
}

/// Stable sort by the active column.
///
/// An unknown or non-sortable sort column leaves the order untouched.
fn sort_stage(records: &[Record], columns: &ColumnSet, sort: &SortSpec, indices: &mut [usize]) {
    let Some(column) = columns.get(&sort.column) else {
        return;
    };
    if !column.is_sortable() {
        return;
    }

    let mut keyed: Vec<(usize, &Value)> = indices
        .iter()
        .map(|&i| (i, column.value_of(&records[i])))
        .collect();

    // Mixed columns make the pairwise order non-transitive, which slice::sort_by
    // may reject with a panic.
    let by_value =
        |a: &(usize, &Value), b: &(usize, &Value)| compare_values(a.1, b.1, sort.direction);
    merge_sort_by(&mut keyed, &by_value);

    for (slot, (i, _)) in indices.iter_mut().zip(keyed) {
        *slot = i;
    }
}

/// Stable top-down merge sort.
///
/// Every adjacent output pair satisfies `compare(a, b) != Greater` and equal
/// neighbours keep their input order, even when `compare` is not transitive.
fn merge_sort_by<T, F>(items: &mut [T], compare: &F)
where
    T: Copy,
    F: Fn(&T, &T) -> Ordering,
{
    let mut buffer = items.to_vec();
    merge_sort_run(items, &mut buffer, compare);
}

fn merge_sort_run<T, F>(items: &mut [T], buffer: &mut [T], compare: &F)
where
    T: Copy,
    F: Fn(&T, &T) -> Ordering,
{
    let len = items.len();
    if len < 2 {
        return;
    }
    let mid = len / 2;
    merge_sort_run(&mut items[..mid], &mut buffer[..mid], compare);
    merge_sort_run(&mut items[mid..], &mut buffer[mid..], compare);

    buffer.copy_from_slice(items);
    let (mut left, mut right) = buffer.split_at(mid);
    for slot in items.iter_mut() {
        let take_left = match (left.first(), right.first()) {
            (Some(a), Some(b)) => compare(a, b) != Ordering::Greater,
            (Some(_), None) => true,
            (None, _) => false,
        };
        let source = if take_left { &mut left } else { &mut right };
        let current = *source;
        if let Some((head, rest)) = current.split_first() {
            *slot = *head;
            *source = rest;
        }
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
