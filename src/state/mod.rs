//! Interaction state (pure).
//!
//! All state transitions are plain functions testable without a terminal.

pub mod app_state;
pub mod input_handler;
pub mod query;
pub mod table_handler;

// Re-export for convenience
pub use app_state::{AppState, InputMode};
pub use query::{
    ExternalQueryState, FilterState, InternalQueryState, QueryState, SortDirection, SortHandler,
    SortIntent, SortOutcome, SortSpec,
};
pub use input_handler::{apply_edit, TextEdit};
pub use table_handler::{handle_table_action, handle_text_edit};
