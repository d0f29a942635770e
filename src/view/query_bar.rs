//! Query bar widget: search and filter inputs.

use super::styles::TableStyles;
use crate::state::InputMode;
use crate::view_state::HeaderCell;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const IDLE_HINT: &str = "/ search  f filter  s sort  c clear  q quit";

/// Shows the text being edited, or a summary of active search and filters.
pub struct QueryBar<'a> {
    mode: &'a InputMode,
    search: &'a str,
    headers: &'a [HeaderCell],
    styles: TableStyles,
}

impl<'a> QueryBar<'a> {
    pub fn new(
        mode: &'a InputMode,
        search: &'a str,
        headers: &'a [HeaderCell],
        styles: TableStyles,
    ) -> Self {
        Self {
            mode,
            search,
            headers,
            styles,
        }
    }

    fn editing_line(&self, text: &str) -> Line<'static> {
        Line::from(vec![
            Span::styled(text.to_string(), self.styles.editing_input),
            Span::styled(
                " ",
                Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    }

    fn summary_line(&self) -> Line<'static> {
        let mut parts = Vec::new();
        if !self.search.is_empty() {
            parts.push(format!("search: {:?}", self.search));
        }
        for header in self.headers {
            if header.filter_offered && !header.filter.is_empty() {
                parts.push(format!("{}~{:?}", header.label, header.filter));
            }
        }

        if parts.is_empty() {
            Line::from(Span::styled(IDLE_HINT, self.styles.status))
        } else {
            Line::from(parts.join("  "))
        }
    }
}

impl Widget for QueryBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title, line) = match self.mode {
            InputMode::Search => ("Search".to_string(), self.editing_line(self.search)),
            InputMode::Filter { column } => {
                let header = self.headers.iter().find(|h| &h.key == column);
                let label = header.map_or(column.as_str(), |h| h.label.as_str());
                let value = header.map_or("", |h| h.filter.as_str());
                (format!("Filter: {label}"), self.editing_line(value))
            }
            InputMode::Normal => ("Query".to_string(), self.summary_line()),
        };

        Paragraph::new(line)
            .block(Block::default().borders(Borders::ALL).title(title))
            .render(area, buf);
    }
}
