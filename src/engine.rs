//! Data table engine.
//!
//! [`DataTable`] binds borrowed records and columns to a query state and
//! keeps the projected [`TableView`] current: every mutation recomputes the
//! view synchronously before returning, so readers never observe a stale
//! grid.

use crate::model::{ColumnSet, Record};
use crate::query::{run_pipeline, FeatureFlags};
use crate::state::{InternalQueryState, QueryState, SortOutcome};
use crate::view_state::{headers, project, HeaderCell, TableView};
use tracing::{debug, trace, warn};

/// Host callback notified with the clicked record.
pub type RowClickHandler<'a> = Box<dyn FnMut(&Record) + 'a>;

/// Tabular view engine over caller-owned records.
///
/// Generic over the query state strategy: `InternalQueryState` for
/// uncontrolled sort, `ExternalQueryState` when the host owns sorting.
pub struct DataTable<'a, Q: QueryState> {
    columns: &'a ColumnSet,
    records: &'a [Record],
    state: Q,
    flags: FeatureFlags,
    on_row_click: Option<RowClickHandler<'a>>,
    view: TableView,
}

impl<'a> DataTable<'a, InternalQueryState> {
    /// Engine with an empty, engine-owned query state.
    pub fn uncontrolled(columns: &'a ColumnSet, records: &'a [Record], flags: FeatureFlags) -> Self {
        Self::new(columns, records, InternalQueryState::new(), flags)
    }
}

impl<'a, Q: QueryState> DataTable<'a, Q> {
    /// Create the engine and compute the initial view.
    pub fn new(columns: &'a ColumnSet, records: &'a [Record], state: Q, flags: FeatureFlags) -> Self {
        if state.delegates_sort() && flags.enable_internal_sort {
            warn!(
                "External sort handler supplied while internal sort is enabled; \
                 records are assumed pre-sorted and will not be sorted locally"
            );
        }

        let mut table = Self {
            columns,
            records,
            state,
            flags,
            on_row_click: None,
            view: TableView::default(),
        };
        table.recompute();
        table
    }

    /// Register the row-click notification.
    pub fn on_row_click(mut self, handler: impl FnMut(&Record) + 'a) -> Self {
        self.on_row_click = Some(Box::new(handler));
        self
    }

    // ===== Query mutations =====

    /// Toggle sort on a column.
    ///
    /// Unknown and non-sortable columns are ignored. Otherwise the state
    /// holder decides: apply locally (uncontrolled) or forward an intent to
    /// the host (controlled).
    pub fn toggle_sort(&mut self, column: &str) -> SortOutcome {
        let sortable = self.columns.get(column).is_some_and(|c| c.is_sortable());
        if !sortable {
            trace!(column, "Sort toggle ignored for non-sortable column");
            return SortOutcome::Ignored;
        }

        let outcome = self.state.toggle_sort(column);
        trace!(?outcome, "Sort toggled");
        self.recompute();
        outcome
    }

    /// Store a column filter verbatim. Empty means inert.
    pub fn set_column_filter(&mut self, column: &str, value: &str) {
        self.state.set_column_filter(column, value);
        self.recompute();
    }

    /// Store the search term verbatim.
    pub fn set_search_term(&mut self, value: &str) {
        self.state.set_search_term(value);
        self.recompute();
    }

    /// Clear search and all column filters; sort is kept.
    pub fn clear_all(&mut self) {
        self.state.clear_all();
        self.recompute();
    }

    /// Apply an arbitrary host mutation to the query state, then recompute.
    ///
    /// This is how a controlled-mode host pushes its new sort selection.
    pub fn update_state(&mut self, update: impl FnOnce(&mut Q)) {
        update(&mut self.state);
        self.recompute();
    }

    // ===== Outputs =====

    pub fn view(&self) -> &TableView {
        &self.view
    }

    /// Header cells for the current state.
    pub fn headers(&self) -> Vec<HeaderCell> {
        headers(self.columns, &self.state, self.flags)
    }

    pub fn visible_count(&self) -> usize {
        self.view.visible_count()
    }

    pub fn total_count(&self) -> usize {
        self.view.total_count()
    }

    /// "N items (filtered from M)" message.
    pub fn status_line(&self) -> String {
        self.view.status_line()
    }

    /// Resolve a click on a visible row and notify the row-click handler.
    ///
    /// Returns `None` (and notifies nobody) for out-of-range rows.
    pub fn click_row(&mut self, visible_index: usize) -> Option<&'a Record> {
        let row = self.view.row(visible_index)?;
        let records: &'a [Record] = self.records;
        let record = &records[row.source_index];
        debug!(row = %row.key, "Row clicked");
        if let Some(handler) = self.on_row_click.as_mut() {
            handler(record);
        }
        Some(record)
    }

    pub fn state(&self) -> &Q {
        &self.state
    }

    pub fn flags(&self) -> FeatureFlags {
        self.flags
    }

    pub fn columns(&self) -> &'a ColumnSet {
        self.columns
    }

    pub fn records(&self) -> &'a [Record] {
        self.records
    }

    fn recompute(&mut self) {
        let output = run_pipeline(self.records, self.columns, &self.state, self.flags);
        self.view = project(self.records, self.columns, &output);
        debug!(
            visible = self.view.visible_count(),
            total = self.view.total_count(),
            "View recomputed"
        );
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
