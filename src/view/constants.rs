//! Layout dimension constants for TUI rendering.

/// Height of the query bar (border + input line).
pub const QUERY_BAR_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Widest a column may grow before its cells are clipped.
pub const MAX_COLUMN_WIDTH: u16 = 40;

/// Space between table columns.
pub const COLUMN_SPACING: u16 = 2;
