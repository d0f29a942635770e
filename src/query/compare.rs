//! Type-aware value ordering.

use crate::model::Value;
use crate::state::SortDirection;
use icu_collator::{Collator, CollatorOptions, Strength};
use std::cmp::Ordering;
use tracing::warn;

/// Order two values of the active sort column.
///
/// - Both null: equal.
/// - One null: the null goes last when ascending and first when
///   descending, so missing data trails the natural reading order.
/// - Both numbers: numeric order. NaN sorts after every other number.
/// - Anything else, including a number against a string: [`collate`] on
///   the displayed text.
///
/// Equal keys return `Equal`; callers keep ties in input order by sorting
/// stably. The mixed number/string rule is not transitive across a column,
/// so callers must use a sort that tolerates that.
pub fn compare_values(a: &Value, b: &Value, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => direction.orient(Ordering::Greater),
        (_, Value::Null) => direction.orient(Ordering::Less),
        (Value::Number(x), Value::Number(y)) => direction.orient(compare_numbers(*x, *y)),
        _ => direction.orient(collate(&a.to_string(), &b.to_string())),
    }
}

fn compare_numbers(x: f64, y: f64) -> Ordering {
    match (x.is_nan(), y.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
    }
}

thread_local! {
    static ROOT_COLLATOR: Option<Collator> = root_collator();
}

/// Root-locale collator at secondary strength: accents count, case does not.
fn root_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Secondary);
    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            warn!(error = %e, "Root collator unavailable, ordering by code point");
            None
        }
    }
}

/// Case-insensitive, locale-aware string collation (CLDR root order).
///
/// Accented letters sort next to their base letter, and strings differing
/// only in case compare equal.
pub fn collate(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => fold_code_points(a, b),
    })
}

/// Lowercased code point order.
fn fold_code_points(a: &str, b: &str) -> Ordering {
    let lhs = a.chars().flat_map(char::to_lowercase);
    let rhs = b.chars().flat_map(char::to_lowercase);
    lhs.cmp(rhs)
}
