//! Tests for the predicate pipeline.

use super::*;
use crate::model::{ColumnDescriptor, Value};
use crate::state::{ExternalQueryState, InternalQueryState, SortDirection, SortSpec};

// ===== Fixtures =====

fn records() -> Vec<Record> {
    vec![
        Record::new().with("id", 1).with("name", "Bravo").with("score", 10),
        Record::new()
            .with("id", 2)
            .with("name", "Alpha")
            .with("score", Value::Null),
        Record::new().with("id", 3).with("name", "Charlie").with("score", 10),
    ]
}

fn columns() -> ColumnSet {
    ColumnSet::new(vec![
        ColumnDescriptor::new("name").label("Name"),
        ColumnDescriptor::new("score").label("Score"),
    ])
    .unwrap()
}

fn ids(records: &[Record], output: &PipelineOutput) -> Vec<f64> {
    output
        .indices
        .iter()
        .map(|&i| records[i].get("id").as_number().unwrap())
        .collect()
}

// ===== Scenarios =====

#[test]
fn sort_ascending_puts_null_last_and_keeps_ties_stable() {
    let records = records();
    let state = InternalQueryState::new().with_sort(SortSpec::ascending("score"));
    let output = run_pipeline(&records, &columns(), &state, FeatureFlags::default());
    assert_eq!(ids(&records, &output), vec![1.0, 3.0, 2.0]);
}

#[test]
fn sort_descending_puts_null_first_and_keeps_ties_stable() {
    let records = records();
    let state = InternalQueryState::new().with_sort(SortSpec::descending("score"));
    let output = run_pipeline(&records, &columns(), &state, FeatureFlags::default());
    assert_eq!(ids(&records, &output), vec![2.0, 1.0, 3.0]);
}

#[test]
fn search_matches_any_column() {
    let records = records();
    let mut state = InternalQueryState::new();
    state.set_search_term("al");
    let output = run_pipeline(&records, &columns(), &state, FeatureFlags::default());
    assert_eq!(ids(&records, &output), vec![2.0]);
    assert_eq!(output.visible_count(), 1);
    assert_eq!(output.total_count, 3);
}

#[test]
fn column_filter_is_case_insensitive_substring() {
    let records = records();
    let mut state = InternalQueryState::new();
    state.set_column_filter("name", "a");
    let output = run_pipeline(&records, &columns(), &state, FeatureFlags::default());
    assert_eq!(ids(&records, &output), vec![1.0, 2.0, 3.0]);
}

#[test]
fn external_sort_handler_preserves_input_order() {
    let records = records();
    let state = ExternalQueryState::new(|_| {}).with_sort(SortSpec::ascending("score"));
    let output = run_pipeline(&records, &columns(), &state, FeatureFlags::default());
    assert_eq!(ids(&records, &output), vec![1.0, 2.0, 3.0]);
}

// ===== Search stage =====

#[test]
fn search_never_matches_null() {
    let records = records();
    let mut state = InternalQueryState::new();
    // record 2 has a null score; "1" only matches the numeric scores
    state.set_search_term("1");
    let output = run_pipeline(&records, &columns(), &state, FeatureFlags::default());
    assert_eq!(ids(&records, &output), vec![1.0, 3.0]);
}

#[test]
fn search_ignores_fields_outside_columns() {
    let records = records();
    let mut state = InternalQueryState::new();
    // "id" is not a column, so searching "2" finds nothing
    state.set_search_term("2");
    let output = run_pipeline(&records, &columns(), &state, FeatureFlags::default());
    assert!(output.indices.is_empty());
}

#[test]
fn search_is_case_insensitive() {
    let records = records();
    let mut state = InternalQueryState::new();
    state.set_search_term("CHAR");
    let output = run_pipeline(&records, &columns(), &state, FeatureFlags::default());
    assert_eq!(ids(&records, &output), vec![3.0]);
}

#[test]
fn search_disabled_by_flag_is_skipped() {
    let records = records();
    let mut state = InternalQueryState::new();
    state.set_search_term("zzz");
    let flags = FeatureFlags {
        searchable: false,
        ..FeatureFlags::default()
    };
    let output = run_pipeline(&records, &columns(), &state, flags);
    assert_eq!(output.visible_count(), 3);
}

// ===== Column filter stage =====

#[test]
fn column_filters_are_a_conjunction() {
    let records = records();
    let mut state = InternalQueryState::new();
    state.set_column_filter("name", "a");
    state.set_column_filter("score", "10");
    let output = run_pipeline(&records, &columns(), &state, FeatureFlags::default());
    assert_eq!(ids(&records, &output), vec![1.0, 3.0]);
}

#[test]
fn null_never_matches_a_non_empty_filter() {
    let records = records();
    let mut state = InternalQueryState::new();
    state.set_column_filter("score", "1");
    let output = run_pipeline(&records, &columns(), &state, FeatureFlags::default());
    assert_eq!(ids(&records, &output), vec![1.0, 3.0]);
}

#[test]
fn empty_filter_is_inert() {
    let records = records();
    let mut state = InternalQueryState::new();
    state.set_column_filter("score", "");
    let output = run_pipeline(&records, &columns(), &state, FeatureFlags::default());
    assert_eq!(output.visible_count(), 3);
}

#[test]
fn filter_on_unknown_column_is_inert() {
    let records = records();
    let mut state = InternalQueryState::new();
    state.set_column_filter("missing", "zzz");
    let output = run_pipeline(&records, &columns(), &state, FeatureFlags::default());
    assert_eq!(output.visible_count(), 3);
}

#[test]
fn filter_on_non_filterable_column_is_inert() {
    let records = records();
    let columns = ColumnSet::new(vec![
        ColumnDescriptor::new("name").filterable(false),
        ColumnDescriptor::new("score"),
    ])
    .unwrap();
    let mut state = InternalQueryState::new();
    state.set_column_filter("name", "zzz");
    let output = run_pipeline(&records, &columns, &state, FeatureFlags::default());
    assert_eq!(output.visible_count(), 3);
}

#[test]
fn column_filter_disabled_by_flag_is_skipped() {
    let records = records();
    let mut state = InternalQueryState::new();
    state.set_column_filter("name", "zzz");
    let flags = FeatureFlags {
        enable_column_filter: false,
        ..FeatureFlags::default()
    };
    let output = run_pipeline(&records, &columns(), &state, flags);
    assert_eq!(output.visible_count(), 3);
}

#[test]
fn filtering_master_switch_skips_search_and_filters() {
    let records = records();
    let mut state = InternalQueryState::new();
    state.set_search_term("zzz");
    state.set_column_filter("name", "zzz");
    let flags = FeatureFlags {
        enable_filtering: false,
        ..FeatureFlags::default()
    };
    let output = run_pipeline(&records, &columns(), &state, flags);
    assert_eq!(output.visible_count(), 3);
}

#[test]
fn search_and_filters_combine() {
    let records = records();
    let mut state = InternalQueryState::new();
    state.set_search_term("o");
    state.set_column_filter("score", "10");
    // "o" matches Bravo only (Alpha and Charlie have no "o")
    let output = run_pipeline(&records, &columns(), &state, FeatureFlags::default());
    assert_eq!(ids(&records, &output), vec![1.0]);
}

// ===== Sort stage =====

#[test]
fn internal_sort_disabled_by_flag_keeps_order() {
    let records = records();
    let state = InternalQueryState::new().with_sort(SortSpec::ascending("name"));
    let flags = FeatureFlags {
        enable_internal_sort: false,
        ..FeatureFlags::default()
    };
    let output = run_pipeline(&records, &columns(), &state, flags);
    assert_eq!(ids(&records, &output), vec![1.0, 2.0, 3.0]);
}

#[test]
fn sort_by_name_ascending() {
    let records = records();
    let state = InternalQueryState::new().with_sort(SortSpec::ascending("name"));
    let output = run_pipeline(&records, &columns(), &state, FeatureFlags::default());
    assert_eq!(ids(&records, &output), vec![2.0, 1.0, 3.0]);
}

#[test]
fn sort_on_unknown_column_keeps_order() {
    let records = records();
    let state = InternalQueryState::new().with_sort(SortSpec::descending("missing"));
    let output = run_pipeline(&records, &columns(), &state, FeatureFlags::default());
    assert_eq!(ids(&records, &output), vec![1.0, 2.0, 3.0]);
}

#[test]
fn sort_on_non_sortable_column_keeps_order() {
    let records = records();
    let columns = ColumnSet::new(vec![
        ColumnDescriptor::new("name").sortable(false),
        ColumnDescriptor::new("score"),
    ])
    .unwrap();
    let state = InternalQueryState::new().with_sort(SortSpec::ascending("name"));
    let output = run_pipeline(&records, &columns, &state, FeatureFlags::default());
    assert_eq!(ids(&records, &output), vec![1.0, 2.0, 3.0]);
}

#[test]
fn sort_runs_after_filtering() {
    let records = records();
    let mut state = InternalQueryState::new().with_sort(SortSpec::descending("name"));
    state.set_column_filter("name", "h");
    // Alpha and Charlie survive, then sort descending by name
    let output = run_pipeline(&records, &columns(), &state, FeatureFlags::default());
    assert_eq!(ids(&records, &output), vec![3.0, 2.0]);
}

#[test]
fn mixed_type_column_sorts_without_panicking() {
    let records = vec![
        Record::new().with("id", 1).with("v", "b"),
        Record::new().with("id", 2).with("v", 5),
        Record::new().with("id", 3).with("v", "A"),
    ];
    let columns = ColumnSet::new(vec![ColumnDescriptor::new("v")]).unwrap();
    let state = InternalQueryState::new().with_sort(SortSpec::ascending("v"));
    let output = run_pipeline(&records, &columns, &state, FeatureFlags::default());
    // "5" < "a" < "b" as text
    assert_eq!(ids(&records, &output), vec![2.0, 3.0, 1.0]);
}

#[test]
fn mixed_type_column_compares_each_pair_on_its_own_types() {
    let records = vec![
        Record::new().with("id", 1).with("v", 10),
        Record::new().with("id", 2).with("v", "x"),
        Record::new().with("id", 3).with("v", 9),
    ];
    let columns = ColumnSet::new(vec![ColumnDescriptor::new("v")]).unwrap();
    let state = InternalQueryState::new().with_sort(SortSpec::ascending("v"));
    let output = run_pipeline(&records, &columns, &state, FeatureFlags::default());
    // 9 < 10 numerically; both precede "x" as text
    assert_eq!(ids(&records, &output), vec![3.0, 1.0, 2.0]);
}

#[test]
fn mixed_type_column_neighbours_are_ordered_pairwise() {
    let values: Vec<Value> = vec![
        "2".into(),
        10.into(),
        "b".into(),
        2.into(),
        Value::Null,
        "10".into(),
        9.into(),
        "A".into(),
    ];
    let records: Vec<Record> = values
        .iter()
        .enumerate()
        .map(|(i, v)| Record::new().with("id", i as i64).with("v", v.clone()))
        .collect();
    let columns = ColumnSet::new(vec![ColumnDescriptor::new("v")]).unwrap();

    for direction in [SortDirection::Ascending, SortDirection::Descending] {
        let state = InternalQueryState::new().with_sort(SortSpec::new("v", direction));
        let output = run_pipeline(&records, &columns, &state, FeatureFlags::default());
        assert_eq!(output.visible_count(), records.len());
        for pair in output.indices.windows(2) {
            let ordering = compare_values(&values[pair[0]], &values[pair[1]], direction);
            assert_ne!(ordering, Ordering::Greater, "{:?} out of order", pair);
        }
    }
}

// ===== merge_sort_by =====

#[test]
fn merge_sort_matches_std_sort_on_total_orders() {
    let mut items: Vec<(usize, i32)> = [5, 3, 5, 1, 3, 9, 0, 5, 1]
        .into_iter()
        .enumerate()
        .collect();
    let mut expected = items.clone();
    expected.sort_by(|a, b| a.1.cmp(&b.1));

    merge_sort_by(&mut items, &|a: &(usize, i32), b: &(usize, i32)| a.1.cmp(&b.1));

    assert_eq!(items, expected);
}

#[test]
fn merge_sort_survives_cyclic_comparator() {
    // rock < paper < scissors < rock
    let beats = |a: &u8, b: &u8| match (a, b) {
        _ if a == b => Ordering::Equal,
        (0, 1) | (1, 2) | (2, 0) => Ordering::Less,
        _ => Ordering::Greater,
    };
    let mut items = vec![2u8, 0, 1, 2, 1, 0, 0, 2, 1];

    merge_sort_by(&mut items, &beats);

    assert_eq!(items.len(), 9);
    for pair in items.windows(2) {
        assert_ne!(beats(&pair[0], &pair[1]), Ordering::Greater);
    }
}

#[test]
fn accented_text_sorts_beside_its_base_letter() {
    let records = vec![
        Record::new().with("id", 1).with("v", "zebra"),
        Record::new().with("id", 2).with("v", "Éclair"),
    ];
    let columns = ColumnSet::new(vec![ColumnDescriptor::new("v")]).unwrap();
    let state = InternalQueryState::new().with_sort(SortSpec::ascending("v"));
    let output = run_pipeline(&records, &columns, &state, FeatureFlags::default());
    assert_eq!(ids(&records, &output), vec![2.0, 1.0]);
}

#[test]
fn numeric_column_with_nulls_sorts_numerically() {
    let records = vec![
        Record::new().with("id", 1).with("v", 10),
        Record::new().with("id", 2).with("v", Value::Null),
        Record::new().with("id", 3).with("v", 2),
    ];
    let columns = ColumnSet::new(vec![ColumnDescriptor::new("v")]).unwrap();
    let state = InternalQueryState::new().with_sort(SortSpec::ascending("v"));
    let output = run_pipeline(&records, &columns, &state, FeatureFlags::default());
    assert_eq!(ids(&records, &output), vec![3.0, 1.0, 2.0]);
}

// ===== Counts =====

#[test]
fn empty_input_yields_empty_output() {
    let output = run_pipeline(&[], &columns(), &InternalQueryState::new(), FeatureFlags::default());
    assert_eq!(output, PipelineOutput::default());
}

#[test]
fn no_query_keeps_everything_in_order() {
    let records = records();
    let output = run_pipeline(
        &records,
        &columns(),
        &InternalQueryState::new(),
        FeatureFlags::default(),
    );
    assert_eq!(output.visible_count(), output.total_count);
    assert_eq!(ids(&records, &output), vec![1.0, 2.0, 3.0]);
}

#[test]
fn pipeline_is_idempotent() {
    let records = records();
    let mut state = InternalQueryState::new().with_sort(SortSpec::descending("score"));
    state.set_search_term("a");
    let first = run_pipeline(&records, &columns(), &state, FeatureFlags::default());
    let second = run_pipeline(&records, &columns(), &state, FeatureFlags::default());
    assert_eq!(first, second);
}
