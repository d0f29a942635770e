//! Header cells derived from columns, query state and flags.

use crate::model::ColumnSet;
use crate::query::FeatureFlags;
use crate::state::{QueryState, SortDirection};

/// Presentation data for one column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    /// Direction marker when this column is the active sort column.
    pub sort: Option<SortDirection>,
    /// Whether a filter input is offered for this column.
    pub filter_offered: bool,
    /// Current filter value (empty when unset).
    pub filter: String,
}

impl HeaderCell {
    /// Label with the sort marker appended when active.
    pub fn title(&self) -> String {
        match self.sort {
            Some(direction) => format!("{} {}", self.label, direction.arrow()),
            None => self.label.clone(),
        }
    }
}

/// Build header cells in column order.
///
/// The sort marker follows whatever selection the state reports, including
/// a host-owned one in controlled mode.
pub fn headers<Q>(columns: &ColumnSet, state: &Q, flags: FeatureFlags) -> Vec<HeaderCell>
where
    Q: QueryState + ?Sized,
{
    let sort = state.sort();
    columns
        .iter()
        .map(|column| HeaderCell {
            key: column.key().to_string(),
            label: column.header().to_string(),
            sortable: column.is_sortable(),
            sort: sort
                .filter(|s| column.is_sortable() && s.column == column.key())
                .map(|s| s.direction),
            filter_offered: flags.column_filter_enabled() && column.is_filterable(),
            filter: state.column_filter(column.key()).to_string(),
        })
        .collect()
}
