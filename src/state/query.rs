//! Query state: search term, column filters and sort selection.
//!
//! Two holders implement [`QueryState`]:
//! - [`InternalQueryState`]: uncontrolled mode, the engine owns and mutates
//!   the sort selection itself.
//! - [`ExternalQueryState`]: controlled mode, the host owns the sort
//!   selection; toggles are forwarded to the host as [`SortIntent`]s and the
//!   engine never sorts locally.
//!
//! Search and column filters are always engine-owned ([`FilterState`]).

use serde::Deserialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

// ===== Sort selection =====

/// Sort direction for the active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Orient an ascending ordering for this direction.
    pub fn orient(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Header marker for this direction.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("ascending"),
            SortDirection::Descending => f.write_str("descending"),
        }
    }
}

/// Active sort selection: a column key and a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub column: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }

    pub fn ascending(column: impl Into<String>) -> Self {
        Self::new(column, SortDirection::Ascending)
    }

    pub fn descending(column: impl Into<String>) -> Self {
        Self::new(column, SortDirection::Descending)
    }
}

/// Request, sent to the host in controlled mode, to toggle sort on a column.
///
/// Carries no direction: the host decides what the toggle means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortIntent {
    pub column: String,
}

/// Result of a sort toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortOutcome {
    /// Column unknown or not sortable; nothing changed.
    Ignored,
    /// Uncontrolled mode: the engine applied this selection.
    Applied(SortSpec),
    /// Controlled mode: the intent was forwarded to the host.
    Delegated(SortIntent),
}

// ===== Filters =====

/// Engine-owned search term and per-column filter values.
///
/// Values are stored verbatim. An empty filter is inert, exactly like a
/// missing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    column_filters: BTreeMap<String, String>,
    search_term: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, value: impl Into<String>) {
        self.search_term = value.into();
    }

    /// Filter value for a column; empty when unset.
    pub fn column_filter(&self, key: &str) -> &str {
        self.column_filters.get(key).map_or("", String::as_str)
    }

    pub fn set_column_filter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.column_filters.insert(key.into(), value.into());
    }

    /// Non-empty filters, in key order.
    pub fn active_filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.column_filters
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn has_active_filters(&self) -> bool {
        self.active_filters().next().is_some()
    }

    pub fn is_searching(&self) -> bool {
        !self.search_term.is_empty()
    }

    /// Reset search term and every column filter.
    pub fn clear(&mut self) {
        self.search_term.clear();
        self.column_filters.clear();
    }
}

// ===== QueryState strategy =====

/// Read/write surface the pipeline and engine work against.
///
/// `toggle_sort` is only called for columns the engine has already checked
/// to be known and sortable.
pub trait QueryState {
    /// Current sort selection, if any.
    fn sort(&self) -> Option<&SortSpec>;

    fn filters(&self) -> &FilterState;

    fn filters_mut(&mut self) -> &mut FilterState;

    /// Toggle sort on a sortable column.
    fn toggle_sort(&mut self, column: &str) -> SortOutcome;

    /// True when an external sort handler owns ordering; the pipeline then
    /// never sorts.
    fn delegates_sort(&self) -> bool;

    fn search_term(&self) -> &str {
        self.filters().search_term()
    }

    fn column_filter(&self, key: &str) -> &str {
        self.filters().column_filter(key)
    }

    fn set_column_filter(&mut self, key: &str, value: &str) {
        self.filters_mut().set_column_filter(key, value);
    }

    fn set_search_term(&mut self, value: &str) {
        self.filters_mut().set_search_term(value);
    }

    /// Reset search and column filters. Sort is untouched.
    fn clear_all(&mut self) {
        self.filters_mut().clear();
    }
}

/// Uncontrolled query state: the engine owns everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InternalQueryState {
    sort: Option<SortSpec>,
    filters: FilterState,
}

impl InternalQueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an initial sort selection.
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }
}

impl QueryState for InternalQueryState {
    fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    fn filters(&self) -> &FilterState {
        &self.filters
    }

    fn filters_mut(&mut self) -> &mut FilterState {
        &mut self.filters
    }

    fn toggle_sort(&mut self, column: &str) -> SortOutcome {
        let next = match &self.sort {
            Some(current) if current.column == column => {
                SortSpec::new(column, current.direction.flipped())
            }
            _ => SortSpec::ascending(column),
        };
        self.sort = Some(next.clone());
        SortOutcome::Applied(next)
    }

    fn delegates_sort(&self) -> bool {
        false
    }
}

/// Host callback receiving sort intents in controlled mode.
pub type SortHandler = Box<dyn FnMut(&SortIntent)>;

/// Controlled query state: sort selection belongs to the host.
///
/// The engine reads the host's selection (for header markers) and forwards
/// toggles to `on_sort`. The host pushes its new selection back through
/// [`ExternalQueryState::set_host_sort`].
pub struct ExternalQueryState {
    sort: Option<SortSpec>,
    filters: FilterState,
    on_sort: SortHandler,
}

impl ExternalQueryState {
    pub fn new(on_sort: impl FnMut(&SortIntent) + 'static) -> Self {
        Self {
            sort: None,
            filters: FilterState::default(),
            on_sort: Box::new(on_sort),
        }
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Mirror the host-owned selection.
    pub fn set_host_sort(&mut self, sort: Option<SortSpec>) {
        self.sort = sort;
    }
}

impl fmt::Debug for ExternalQueryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExternalQueryState")
            .field("sort", &self.sort)
            .field("filters", &self.filters)
            .finish_non_exhaustive()
    }
}

impl QueryState for ExternalQueryState {
    fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    fn filters(&self) -> &FilterState {
        &self.filters
    }

    fn filters_mut(&mut self) -> &mut FilterState {
        &mut self.filters
    }

    fn toggle_sort(&mut self, column: &str) -> SortOutcome {
        let intent = SortIntent {
            column: column.to_string(),
        };
        (self.on_sort)(&intent);
        SortOutcome::Delegated(intent)
    }

    fn delegates_sort(&self) -> bool {
        true
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
