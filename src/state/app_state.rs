//! Terminal interaction state.
//!
//! Holds what the user is pointing at (selected row, focused column) and
//! which input is being edited. Query state itself lives in the engine.

// ===== InputMode =====

/// Which text input, if any, receives typed characters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys are dispatched through key bindings.
    #[default]
    Normal,
    /// Typing into the search box.
    Search,
    /// Typing into the filter input of a column.
    Filter {
        /// Key of the column being filtered.
        column: String,
    },
}

// ===== AppState =====

/// UI state for the table screen. Pure data, no side effects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// Selected visible row, `None` when the view is empty.
    pub selected: Option<usize>,

    /// Index of the focused column (target of `s` and `f`).
    pub focused_column: usize,

    /// Active text input.
    pub input_mode: InputMode,

    /// Last notice shown in the status bar (row activation, hints).
    pub message: Option<String>,
}

impl AppState {
    /// Create state with the first row selected if any rows are visible.
    pub fn new(visible_rows: usize) -> Self {
        let mut state = Self::default();
        state.clamp_selection(visible_rows);
        state
    }

    /// True while a text input is being edited.
    pub fn is_editing(&self) -> bool {
        self.input_mode != InputMode::Normal
    }

    /// Keep the selection inside `0..visible_rows`.
    ///
    /// Selects row 0 when rows appear and nothing was selected.
    pub fn clamp_selection(&mut self, visible_rows: usize) {
        self.selected = match (self.selected, visible_rows) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), n) => Some(i.min(n - 1)),
        };
    }

    pub fn select_next(&mut self, visible_rows: usize) {
        if let Some(i) = self.selected {
            self.selected = Some((i + 1).min(visible_rows.saturating_sub(1)));
        }
        self.clamp_selection(visible_rows);
    }

    pub fn select_prev(&mut self, visible_rows: usize) {
        if let Some(i) = self.selected {
            self.selected = Some(i.saturating_sub(1));
        }
        self.clamp_selection(visible_rows);
    }

    pub fn select_first(&mut self, visible_rows: usize) {
        self.selected = Some(0);
        self.clamp_selection(visible_rows);
    }

    pub fn select_last(&mut self, visible_rows: usize) {
        self.selected = Some(visible_rows.saturating_sub(1));
        self.clamp_selection(visible_rows);
    }

    /// Move column focus right, saturating at the last column.
    pub fn focus_next_column(&mut self, column_count: usize) {
        if self.focused_column + 1 < column_count {
            self.focused_column += 1;
        }
    }

    /// Move column focus left, saturating at the first column.
    pub fn focus_prev_column(&mut self) {
        self.focused_column = self.focused_column.saturating_sub(1);
    }
}
