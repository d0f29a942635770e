//! Property-based tests for the query pipeline.
//!
//! Tests validate:
//! 1. Recomputation is idempotent
//! 2. Sorting is stable
//! 3. Nulls sort last ascending, first descending
//! 4. Column filters conjoin, search disjoins across columns
//! 5. Visible count never exceeds total count

use proptest::prelude::*;
use std::cmp::Ordering;
use tabview::model::{ColumnDescriptor, ColumnSet, Record, Value};
use tabview::query::{compare_values, run_pipeline, FeatureFlags};
use tabview::state::{InternalQueryState, QueryState, SortDirection, SortSpec};

// ===== Strategies =====

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        (-5i32..5).prop_map(|n| Value::Number(f64::from(n))),
        "[abAB]{0,3}".prop_map(Value::String),
    ]
}

fn records_strategy() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec((value_strategy(), value_strategy()), 0..24).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (a, b))| {
                Record::new()
                    .with("id", i as i64)
                    .with("a", a)
                    .with("b", b)
            })
            .collect()
    })
}

fn direction_strategy() -> impl Strategy<Value = SortDirection> {
    prop_oneof![Just(SortDirection::Ascending), Just(SortDirection::Descending)]
}

fn columns() -> ColumnSet {
    ColumnSet::new(vec![ColumnDescriptor::new("a"), ColumnDescriptor::new("b")])
        .expect("valid columns")
}

fn sorted_by(column: &str, direction: SortDirection) -> InternalQueryState {
    InternalQueryState::new().with_sort(SortSpec::new(column, direction))
}

// ===== Property 1: Idempotence =====

proptest! {
    #[test]
    fn recompute_is_idempotent(
        records in records_strategy(),
        direction in direction_strategy(),
        term in "[ab]{0,2}",
    ) {
        let columns = columns();
        let mut state = sorted_by("a", direction);
        state.set_search_term(&term);

        let first = run_pipeline(&records, &columns, &state, FeatureFlags::default());
        let second = run_pipeline(&records, &columns, &state, FeatureFlags::default());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn sorting_sorted_output_is_identity(
        records in records_strategy(),
        direction in direction_strategy(),
    ) {
        let columns = columns();
        let state = sorted_by("a", direction);

        let first = run_pipeline(&records, &columns, &state, FeatureFlags::default());
        let reordered: Vec<Record> = first.indices.iter().map(|&i| records[i].clone()).collect();
        let second = run_pipeline(&reordered, &columns, &state, FeatureFlags::default());

        let identity: Vec<usize> = (0..reordered.len()).collect();
        prop_assert_eq!(second.indices, identity);
    }
}

// ===== Property 2: Stability =====

proptest! {
    #[test]
    fn equal_keys_keep_input_order(
        records in records_strategy(),
        direction in direction_strategy(),
    ) {
        let columns = columns();
        let state = sorted_by("a", direction);
        let output = run_pipeline(&records, &columns, &state, FeatureFlags::default());

        for pair in output.indices.windows(2) {
            let (x, y) = (pair[0], pair[1]);
            let ordering = compare_values(records[x].get("a"), records[y].get("a"), direction);
            prop_assert_ne!(ordering, Ordering::Greater, "output not sorted");
            if ordering == Ordering::Equal {
                prop_assert!(x < y, "tie at {} and {} broke input order", x, y);
            }
        }
    }
}

// ===== Property 3: Null ordering =====

proptest! {
    #[test]
    fn nulls_last_ascending_first_descending(
        records in records_strategy(),
        direction in direction_strategy(),
    ) {
        let columns = columns();
        let state = sorted_by("b", direction);
        let output = run_pipeline(&records, &columns, &state, FeatureFlags::default());

        let nulls: Vec<bool> = output
            .indices
            .iter()
            .map(|&i| records[i].get("b").is_null())
            .collect();
        let expected_null_block_first = direction == SortDirection::Descending;

        // Nulls form one contiguous block at the proper end
        let first_switch = nulls.windows(2).position(|w| w[0] != w[1]);
        if let Some(pos) = first_switch {
            prop_assert_eq!(nulls[pos], expected_null_block_first);
            prop_assert!(nulls[pos + 1..].iter().all(|&n| n == nulls[pos + 1]));
        }
    }
}

// ===== Property 4: Conjunction and disjunction =====

proptest! {
    #[test]
    fn column_filters_conjoin(
        records in records_strategy(),
        fa in "[ab]{0,2}",
        fb in "[ab0-4]{0,1}",
    ) {
        let columns = columns();
        let flags = FeatureFlags::default();

        let mut only_a = InternalQueryState::new();
        only_a.set_column_filter("a", &fa);
        let mut only_b = InternalQueryState::new();
        only_b.set_column_filter("b", &fb);
        let mut both = InternalQueryState::new();
        both.set_column_filter("a", &fa);
        both.set_column_filter("b", &fb);

        let a_out = run_pipeline(&records, &columns, &only_a, flags).indices;
        let b_out = run_pipeline(&records, &columns, &only_b, flags).indices;
        let both_out = run_pipeline(&records, &columns, &both, flags).indices;

        let intersection: Vec<usize> =
            a_out.iter().copied().filter(|i| b_out.contains(i)).collect();
        prop_assert_eq!(both_out, intersection);
    }

    #[test]
    fn search_disjoins_across_columns(
        records in records_strategy(),
        term in "[abAB0-4]{1,2}",
    ) {
        let columns = columns();
        let mut state = InternalQueryState::new();
        state.set_search_term(&term);

        let output = run_pipeline(&records, &columns, &state, FeatureFlags::default());

        let needle = term.to_lowercase();
        let expected: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, r)| {
                ["a", "b"].iter().any(|key| match r.get(key) {
                    Value::Null => false,
                    v => v.to_string().to_lowercase().contains(&needle),
                })
            })
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(output.indices, expected);
    }
}

// ===== Property 5: Monotonicity =====

proptest! {
    #[test]
    fn visible_never_exceeds_total(
        records in records_strategy(),
        term in "[ab]{0,2}",
        filter in "[ab]{0,1}",
    ) {
        let columns = columns();
        let mut state = InternalQueryState::new();
        state.set_search_term(&term);
        state.set_column_filter("b", &filter);

        let output = run_pipeline(&records, &columns, &state, FeatureFlags::default());

        prop_assert!(output.visible_count() <= output.total_count);
        prop_assert_eq!(output.total_count, records.len());
        if term.is_empty() && filter.is_empty() {
            prop_assert_eq!(output.visible_count(), output.total_count);
        }
    }

    #[test]
    fn longer_search_term_never_widens(
        records in records_strategy(),
        term in "[ab]{0,2}",
        extra in "[ab]",
    ) {
        let columns = columns();
        let mut short = InternalQueryState::new();
        short.set_search_term(&term);
        let mut long = InternalQueryState::new();
        long.set_search_term(&format!("{term}{extra}"));

        let flags = FeatureFlags::default();
        let short_out = run_pipeline(&records, &columns, &short, flags);
        let long_out = run_pipeline(&records, &columns, &long, flags);

        prop_assert!(long_out.indices.iter().all(|i| short_out.indices.contains(i)));
    }
}
