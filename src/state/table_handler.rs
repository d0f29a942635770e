//! Key action dispatch for the table screen.
//!
//! Translates domain actions into engine mutations and keeps the UI state
//! (selection, focus, input mode) consistent with the recomputed view.

use super::app_state::{AppState, InputMode};
use super::input_handler::{apply_edit, TextEdit};
use super::query::{QueryState, SortOutcome};
use crate::engine::DataTable;
use crate::model::{KeyAction, Record};
use tracing::info;

/// Handle one action in normal mode.
///
/// Returns true if the app should quit.
pub fn handle_table_action<Q: QueryState>(
    app: &mut AppState,
    table: &mut DataTable<'_, Q>,
    action: KeyAction,
) -> bool {
    let rows = table.visible_count();
    match action {
        KeyAction::Quit => return true,

        KeyAction::SelectNext => app.select_next(rows),
        KeyAction::SelectPrev => app.select_prev(rows),
        KeyAction::SelectFirst => app.select_first(rows),
        KeyAction::SelectLast => app.select_last(rows),

        KeyAction::FocusNextColumn => app.focus_next_column(table.columns().len()),
        KeyAction::FocusPrevColumn => app.focus_prev_column(),

        KeyAction::ToggleSortFocused => {
            let index = app.focused_column;
            toggle_sort_at(app, table, index);
        }
        KeyAction::ToggleSortColumn(index) => {
            if index < table.columns().len() {
                app.focused_column = index;
                toggle_sort_at(app, table, index);
            }
        }

        KeyAction::EditSearch => {
            if table.flags().search_enabled() {
                app.input_mode = InputMode::Search;
                app.message = None;
            } else {
                app.message = Some("Search is disabled".to_string());
            }
        }
        KeyAction::EditFilter => {
            let headers = table.headers();
            match headers.get(app.focused_column) {
                Some(header) if header.filter_offered => {
                    app.input_mode = InputMode::Filter {
                        column: header.key.clone(),
                    };
                    app.message = None;
                }
                Some(header) => {
                    app.message = Some(format!("Column {} has no filter", header.label));
                }
                None => {}
            }
        }
        KeyAction::ClearFilters => {
            table.clear_all();
            app.message = Some("Filters cleared".to_string());
        }

        KeyAction::ActivateRow => {
            if let Some(index) = app.selected {
                let columns = table.columns();
                if let Some(record) = table.click_row(index) {
                    let summary = summarize(record, columns.iter().map(|c| c.key()));
                    info!(row = index, "Row activated");
                    app.message = Some(summary);
                }
            }
        }
    }

    app.clamp_selection(table.visible_count());
    false
}

/// Handle one editing step while a text input is active.
///
/// Every keystroke updates the engine immediately, so the view follows the
/// text as it is typed.
pub fn handle_text_edit<Q: QueryState>(
    app: &mut AppState,
    table: &mut DataTable<'_, Q>,
    edit: TextEdit,
) {
    match app.input_mode.clone() {
        InputMode::Normal => return,
        InputMode::Search => {
            let next = apply_edit(table.state().search_term(), edit);
            table.set_search_term(&next);
        }
        InputMode::Filter { column } => {
            let next = apply_edit(table.state().column_filter(&column), edit);
            table.set_column_filter(&column, &next);
        }
    }

    if edit == TextEdit::Finish {
        app.input_mode = InputMode::Normal;
    }
    app.clamp_selection(table.visible_count());
}

fn toggle_sort_at<Q: QueryState>(app: &mut AppState, table: &mut DataTable<'_, Q>, index: usize) {
    let columns = table.columns();
    if index >= columns.len() {
        return;
    }
    let column = &columns[index];
    app.message = match table.toggle_sort(column.key()) {
        SortOutcome::Ignored => Some(format!("Column {} is not sortable", column.header())),
        SortOutcome::Applied(_) => None,
        SortOutcome::Delegated(intent) => Some(format!("Sort requested on {}", intent.column)),
    };
}

/// "key=value" pairs for the given fields, in order.
fn summarize<'k>(record: &Record, keys: impl Iterator<Item = &'k str>) -> String {
    keys.map(|key| format!("{}={}", key, record.get(key)))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "table_handler_tests.rs"]
mod tests;
