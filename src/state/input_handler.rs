//! Text input editing (pure state transitions).
//!
//! Search and filter inputs are append-only line editors: typed characters
//! go at the end, backspace removes the last character.

/// One editing step on a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    /// Append a character.
    Insert(char),
    /// Remove the last character.
    Backspace,
    /// Leave the input, keeping its value.
    Finish,
}

/// Apply an edit to the current text, returning the new text.
///
/// `Finish` leaves the text unchanged.
pub fn apply_edit(current: &str, edit: TextEdit) -> String {
    match edit {
        TextEdit::Insert(ch) => {
            let mut next = String::with_capacity(current.len() + ch.len_utf8());
            next.push_str(current);
            next.push(ch);
            next
        }
        TextEdit::Backspace => {
            let mut next = current.to_string();
            next.pop();
            next
        }
        TextEdit::Finish => current.to_string(),
    }
}
