//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Row selection
    /// Select the next visible row. Default: j/↓
    SelectNext,
    /// Select the previous visible row. Default: k/↑
    SelectPrev,
    /// Select the first visible row. Default: g/Home
    SelectFirst,
    /// Select the last visible row. Default: G/End
    SelectLast,

    // Column focus
    /// Focus the next column. Default: l/→
    FocusNextColumn,
    /// Focus the previous column. Default: h/←
    FocusPrevColumn,

    // Sorting
    /// Toggle sort on the focused column (header activation). Default: s
    ToggleSortFocused,
    /// Toggle sort on the N-th column (0-based). Default: 1-9
    ToggleSortColumn(usize),

    // Filtering
    /// Start editing the search term. Default: /
    EditSearch,
    /// Start editing the focused column's filter. Default: f
    EditFilter,
    /// Clear search and all column filters. Default: c
    ClearFilters,

    // Rows
    /// Activate (click) the selected row. Default: Enter
    ActivateRow,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_sort_column_carries_index() {
        let action = KeyAction::ToggleSortColumn(2);
        match action {
            KeyAction::ToggleSortColumn(index) => assert_eq!(index, 2),
            _ => panic!("ToggleSortColumn should carry its column index"),
        }
    }

    #[test]
    fn toggle_sort_columns_differ_by_index() {
        assert_ne!(
            KeyAction::ToggleSortColumn(0),
            KeyAction::ToggleSortColumn(1),
            "Different column indices should not be equal"
        );
    }

    #[test]
    fn focused_and_indexed_sort_are_distinct() {
        assert_ne!(KeyAction::ToggleSortFocused, KeyAction::ToggleSortColumn(0));
    }
}
