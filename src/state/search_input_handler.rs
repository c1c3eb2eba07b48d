//! Search input editing (pure state transitions).
//!
//! All functions are pure: they take the current [`SearchInput`] and
//! return the updated one, testable without a terminal. None of them
//! dispatch fetches; that decision lives on
//! [`crate::state::AppState::fetch_after_edit`].

use crate::state::search_input::{SearchInput, QUERY_MAX_CHARS};

/// Byte offset of character position `cursor` in `text`.
fn byte_offset(text: &str, cursor: usize) -> usize {
    text.char_indices()
        .nth(cursor)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Insert a character at the cursor and advance it.
/// Input at [`QUERY_MAX_CHARS`] is ignored.
pub fn handle_char_input(mut input: SearchInput, ch: char) -> SearchInput {
    if input.char_count() >= QUERY_MAX_CHARS {
        return input;
    }
    let at = byte_offset(&input.text, input.cursor);
    input.text.insert(at, ch);
    input.cursor += 1;
    input
}

/// Delete the character before the cursor, if any.
pub fn handle_backspace(mut input: SearchInput) -> SearchInput {
    if input.cursor == 0 {
        return input;
    }
    let at = byte_offset(&input.text, input.cursor - 1);
    input.text.remove(at);
    input.cursor -= 1;
    input
}

/// Move the cursor left by one character. Saturates at 0.
pub fn handle_cursor_left(mut input: SearchInput) -> SearchInput {
    input.cursor = input.cursor.saturating_sub(1);
    input
}

/// Move the cursor right by one character. Saturates at the text length.
pub fn handle_cursor_right(mut input: SearchInput) -> SearchInput {
    input.cursor = (input.cursor + 1).min(input.char_count());
    input
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
