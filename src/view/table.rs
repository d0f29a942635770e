//! Table widget for the projected rows.

use super::constants::{COLUMN_SPACING, MAX_COLUMN_WIDTH};
use super::plain::column_widths;
use super::styles::TableStyles;
use crate::view_state::{HeaderCell, TableView};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    widgets::{Block, Borders, Cell, Row, StatefulWidget, Table, TableState},
};

/// Renders headers with sort markers and the visible rows.
///
/// The focused column header is highlighted; the selected row comes from
/// the `TableState`.
pub struct TableWidget<'a> {
    headers: &'a [HeaderCell],
    view: &'a TableView,
    focused_column: usize,
    styles: TableStyles,
}

impl<'a> TableWidget<'a> {
    pub fn new(headers: &'a [HeaderCell], view: &'a TableView, styles: TableStyles) -> Self {
        Self {
            headers,
            view,
            focused_column: 0,
            styles,
        }
    }

    pub fn focused_column(mut self, index: usize) -> Self {
        self.focused_column = index;
        self
    }
}

impl StatefulWidget for TableWidget<'_> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut TableState) {
        let widths: Vec<Constraint> = column_widths(self.headers, self.view)
            .into_iter()
            .map(|w| Constraint::Length((w.min(usize::from(MAX_COLUMN_WIDTH)) as u16).max(1)))
            .collect();

        let header = Row::new(self.headers.iter().enumerate().map(|(i, h)| {
            let style = if i == self.focused_column {
                self.styles.focused_header
            } else {
                self.styles.header
            };
            Cell::from(h.title()).style(style)
        }));

        let rows = self
            .view
            .rows()
            .iter()
            .map(|row| Row::new(row.cells.iter().map(|c| Cell::from(c.to_string()))));

        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(COLUMN_SPACING)
            .row_highlight_style(self.styles.selected_row)
            .block(Block::default().borders(Borders::ALL).title("Records"));

        StatefulWidget::render(table, area, buf, state);
    }
}
