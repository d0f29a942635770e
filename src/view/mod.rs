//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod layout;
pub mod plain;
mod query_bar;
mod styles;
mod table;

pub use layout::{render_layout, status_text};
pub use plain::format_table;
pub use query_bar::QueryBar;
pub use styles::{ColorConfig, TableStyles};
pub use table::TableWidget;

use crate::config::keybindings::KeyBindings;
use crate::engine::DataTable;
use crate::state::{handle_table_action, handle_text_edit, AppState, QueryState, TextEdit};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend, and over the
/// query state strategy of the table it drives.
pub struct TuiApp<'a, B, Q>
where
    B: ratatui::backend::Backend,
    Q: QueryState,
{
    terminal: Terminal<B>,
    table: DataTable<'a, Q>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: TableStyles,
}

impl<'a, Q: QueryState> TuiApp<'a, CrosstermBackend<Stdout>, Q> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(table: DataTable<'a, Q>) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(terminal, table))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Blocks on terminal events;
    /// redraws only after input or resize.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    debug!("Handling resize to {}x{}", width, height);
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<'a, B, Q> TuiApp<'a, B, Q>
where
    B: ratatui::backend::Backend,
    Q: QueryState,
{
    /// Build the app around an already-initialized terminal.
    pub fn with_terminal(terminal: Terminal<B>, table: DataTable<'a, Q>) -> Self {
        let app_state = AppState::new(table.visible_count());
        Self {
            terminal,
            table,
            app_state,
            key_bindings: KeyBindings::default(),
            styles: TableStyles::default(),
        }
    }

    /// Replace the default styles (e.g. monochrome for snapshot tests).
    pub fn styles(mut self, styles: TableStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }

        // Ctrl+C always quits, even while editing
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.is_editing() {
            let edit = match key.code {
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    TextEdit::Insert(ch)
                }
                KeyCode::Backspace => TextEdit::Backspace,
                KeyCode::Enter | KeyCode::Esc => TextEdit::Finish,
                _ => return false,
            };
            handle_text_edit(&mut self.app_state, &mut self.table, edit);
            return false;
        }

        match self.key_bindings.get(key) {
            Some(action) => handle_table_action(&mut self.app_state, &mut self.table, action),
            None => false,
        }
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let table = &self.table;
        let app_state = &self.app_state;
        let styles = self.styles;
        self.terminal.draw(|frame| {
            render_layout(frame, table, app_state, styles);
        })?;
        Ok(())
    }

    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub fn table(&self) -> &DataTable<'a, Q> {
        &self.table
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI over a table.
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// even when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_table<Q: QueryState>(table: DataTable<'_, Q>) -> Result<(), TuiError> {
    let mut app = TuiApp::new(table)?;

    let result = app.run();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
