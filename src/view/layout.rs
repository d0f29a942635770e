//! Screen layout: table, query bar, status bar.

use super::constants::{QUERY_BAR_HEIGHT, STATUS_BAR_HEIGHT};
use super::query_bar::QueryBar;
use super::styles::TableStyles;
use super::table::TableWidget;
use crate::engine::DataTable;
use crate::state::{AppState, QueryState};
use ratatui::{
    layout::{Constraint, Layout},
    text::Line,
    widgets::{Paragraph, TableState},
    Frame,
};

/// Render the whole table screen into the frame.
pub fn render_layout<Q: QueryState>(
    frame: &mut Frame,
    table: &DataTable<'_, Q>,
    app: &AppState,
    styles: TableStyles,
) {
    let [table_area, query_area, status_area] = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(QUERY_BAR_HEIGHT),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(frame.area());

    let headers = table.headers();

    let mut table_state = TableState::default().with_selected(app.selected);
    frame.render_stateful_widget(
        TableWidget::new(&headers, table.view(), styles).focused_column(app.focused_column),
        table_area,
        &mut table_state,
    );

    frame.render_widget(
        QueryBar::new(
            &app.input_mode,
            table.state().search_term(),
            &headers,
            styles,
        ),
        query_area,
    );

    frame.render_widget(
        Paragraph::new(Line::styled(status_text(table, app), styles.status)),
        status_area,
    );
}

/// Counts message, followed by the last notice if any.
pub fn status_text<Q: QueryState>(table: &DataTable<'_, Q>, app: &AppState) -> String {
    match &app.message {
        Some(message) => format!("{} | {}", table.status_line(), message),
        None => table.status_line(),
    }
}
