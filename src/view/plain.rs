//! Plain-text table output for non-interactive use.
//!
//! Columns are padded to their display width so wide characters line up.

use crate::view_state::{HeaderCell, TableView};
use unicode_width::UnicodeWidthStr;

/// Gap between columns.
const COLUMN_GAP: &str = "  ";

/// Display width of each column: the widest of its header title and cells.
pub fn column_widths(headers: &[HeaderCell], view: &TableView) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.title().width()).collect();
    for row in view.rows() {
        for (width, cell) in widths.iter_mut().zip(&row.cells) {
            *width = (*width).max(cell.to_string().width());
        }
    }
    widths
}

/// Format headers, rows and the status line as aligned text.
///
/// Trailing spaces are trimmed from every line.
pub fn format_table(headers: &[HeaderCell], view: &TableView) -> String {
    let widths = column_widths(headers, view);
    let mut lines = Vec::with_capacity(view.visible_count() + 3);

    if !headers.is_empty() {
        lines.push(join_padded(headers.iter().map(HeaderCell::title), &widths));
        lines.push(join_padded(widths.iter().map(|&w| "-".repeat(w)), &widths));
        for row in view.rows() {
            lines.push(join_padded(row.cells.iter().map(ToString::to_string), &widths));
        }
    }

    lines.push(view.status_line());
    lines.join("\n")
}

fn join_padded(texts: impl Iterator<Item = String>, widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, (text, &width)) in texts.zip(widths).enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        line.push_str(&pad(&text, width));
    }
    line.trim_end().to_string()
}

/// Right-pad `text` with spaces up to `width` display columns.
pub(crate) fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    let mut padded = String::with_capacity(text.len() + fill);
    padded.push_str(text);
    padded.extend(std::iter::repeat(' ').take(fill));
    padded
}
